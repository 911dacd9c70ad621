//! Calculation inputs and outputs

use serde::{Deserialize, Serialize};

/// How many of one unit the player owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCount {
    /// Unit id or display name
    pub unit: String,
    pub count: u64,
}

impl UnitCount {
    pub fn new(unit: impl Into<String>, count: u64) -> Self {
        UnitCount {
            unit: unit.into(),
            count,
        }
    }
}

/// Everything one calculation needs from the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub unit_counts: Vec<UnitCount>,
    /// Bite level, at least 1
    pub bite_level: u32,
    /// Hunt instinct: number of simultaneous raids, at least 1
    pub hunt_instinct: u32,
    /// Target size expected when the raid arrives
    pub arrival_size: f64,
}

impl CalculationInput {
    pub fn new(unit_counts: Vec<UnitCount>, bite_level: u32, hunt_instinct: u32, arrival_size: f64) -> Self {
        CalculationInput {
            unit_counts,
            bite_level,
            hunt_instinct,
            arrival_size,
        }
    }

    /// Same as [`CalculationInput::new`] with the arrival size given in millions
    pub fn with_arrival_millions(
        unit_counts: Vec<UnitCount>,
        bite_level: u32,
        hunt_instinct: u32,
        arrival_millions: f64,
    ) -> Self {
        Self::new(unit_counts, bite_level, hunt_instinct, arrival_millions * 1_000_000.0)
    }
}

/// Something the player should know about, which does not block the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// The recommended cutoff is too small to be worth a raid
    CutoffBelowThreshold { cutoff: f64, threshold: f64 },
    /// A unit count referenced an unknown unit and was ignored
    UnknownUnitSkipped(String),
    /// Hunt instinct is 0, so nothing can be split into raids
    NoRaids,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::CutoffBelowThreshold { cutoff, threshold } => write!(
                f,
                "Cutoff {:.0} is below {:.0}, raids will be barely worth it",
                cutoff, threshold
            ),
            Advisory::UnknownUnitSkipped(unit) => write!(f, "Unknown unit '{}' ignored", unit),
            Advisory::NoRaids => write!(f, "Hunt instinct is 0, no raids possible"),
        }
    }
}

/// Raw stat totals of the known units, without bite bonus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmySummary {
    pub units: u64,
    pub attack: f64,
    pub defense: f64,
    pub health: f64,
}

/// Output of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_combat_power: f64,
    pub combat_power_per_raid: f64,
    pub recommended_cutoff: f64,
    /// Equal to the hunt instinct
    pub raid_count: u32,
    /// Units to send per raid, one entry per catalog unit in catalog order
    pub per_unit_raid_counts: Vec<(String, u64)>,
    pub army: ArmySummary,
    pub advisories: Vec<Advisory>,
}

impl CalculationResult {
    /// Cutoff truncated to a whole target size, as shown to the player
    pub fn cutoff_truncated(&self) -> u64 {
        self.recommended_cutoff.max(0.0) as u64
    }

    /// Units to send per raid for one unit id
    pub fn raid_count_for(&self, unit_id: &str) -> Option<u64> {
        self.per_unit_raid_counts
            .iter()
            .find(|(id, _)| id == unit_id)
            .map(|&(_, count)| count)
    }

    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}
