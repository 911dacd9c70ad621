//! Unit - A single unit type and its combat attributes

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Combat attributes of one unit type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable identifier (e.g. "requin_blanc")
    pub id: String,
    /// Display name (e.g. "Requin Blanc")
    pub name: String,
    pub attack: f64,
    #[serde(default)]
    pub defense: f64,
    pub health: f64,
}

impl Unit {
    pub fn new(id: &str, name: &str, attack: f64, defense: f64, health: f64) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            attack,
            defense,
            health,
        }
    }

    /// Attack must be positive, defense non-negative, health positive
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.attack.is_finite() && self.attack > 0.0) {
            return Err(non_positive(&self.id, "attack", self.attack));
        }
        if !(self.defense.is_finite() && self.defense >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "unit '{}' defense must be non-negative, got {}",
                self.id, self.defense
            )));
        }
        if !(self.health.is_finite() && self.health > 0.0) {
            return Err(non_positive(&self.id, "health", self.health));
        }
        Ok(())
    }
}

fn non_positive(id: &str, stat: &str, value: f64) -> ConfigError {
    ConfigError::NonPositive {
        field: format!("unit '{}' {}", id, stat),
        value,
    }
}
