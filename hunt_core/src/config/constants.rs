//! Hunt tuning constants

use serde::{Deserialize, Serialize};

/// Tunable hunt constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntConstants {
    /// Attack bonus per bite level (0.1 = +10% attack per level)
    #[serde(default = "default_bite_bonus_per_level")]
    pub bite_bonus_per_level: f64,
    /// Cutoffs below this size are flagged to the player as not worth a raid
    #[serde(default = "default_cutoff_warning_threshold")]
    pub cutoff_warning_threshold: f64,
}

impl Default for HuntConstants {
    fn default() -> Self {
        HuntConstants {
            bite_bonus_per_level: default_bite_bonus_per_level(),
            cutoff_warning_threshold: default_cutoff_warning_threshold(),
        }
    }
}

impl HuntConstants {
    /// Attack multiplier for a given bite level: `1 + bonus * level`
    pub fn bite_multiplier(&self, bite_level: u32) -> f64 {
        1.0 + self.bite_bonus_per_level * bite_level as f64
    }
}

fn default_bite_bonus_per_level() -> f64 {
    0.1
}

fn default_cutoff_warning_threshold() -> f64 {
    5_000_000.0
}
