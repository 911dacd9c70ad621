//! Hunt configuration - unit catalog, reference curve and constants

use super::{ConfigError, HuntConstants};
use crate::calculator::HuntCalculator;
use crate::catalog::{Unit, UnitCatalog};
use crate::curve::{ReferenceCurve, ReferencePoint};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw hunt configuration as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntConfig {
    /// Combat power at which the reference curve cutoffs apply unscaled
    pub reference_combat_power: f64,
    #[serde(default)]
    pub constants: HuntConstants,
    pub units: Vec<Unit>,
    pub reference_curve: Vec<ReferencePoint>,
}

impl Default for HuntConfig {
    fn default() -> Self {
        HuntConfig {
            reference_combat_power: 252_000_000_000.0,
            constants: HuntConstants::default(),
            units: vec![
                Unit::new("petite_roussette", "Petite Roussette", 60.0, 40.0, 70.0),
                Unit::new("roussette", "Roussette", 100.0, 60.0, 100.0),
                Unit::new("requin_blanc", "Requin Blanc", 1100.0, 1.0, 600.0),
            ],
            reference_curve: vec![
                ReferencePoint::new(1_000_000.0, 5_200_000_000.0),
                ReferencePoint::new(2_500_000.0, 3_900_000_000.0),
                ReferencePoint::new(5_000_000.0, 3_000_000_000.0),
                ReferencePoint::new(10_000_000.0, 2_300_000_000.0),
                ReferencePoint::new(25_000_000.0, 1_550_000_000.0),
                ReferencePoint::new(50_000_000.0, 1_090_000_000.0),
                ReferencePoint::new(100_000_000.0, 760_000_000.0),
            ],
        }
    }
}

impl HuntConfig {
    /// Load a `.toml` or `.json` hunt configuration
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: HuntConfig = super::load_config(path)?;
        tracing::info!(
            path = %path.display(),
            units = config.units.len(),
            curve_points = config.reference_curve.len(),
            "loaded hunt config"
        );
        Ok(config)
    }

    /// Validate every table and freeze them into a [`HuntModel`]
    pub fn build(self) -> Result<HuntModel, ConfigError> {
        validate_constants(&self.constants)?;
        let catalog = UnitCatalog::new(self.units)?;
        let curve = ReferenceCurve::new(self.reference_curve, self.reference_combat_power)?;

        Ok(HuntModel {
            catalog,
            curve,
            constants: self.constants,
        })
    }
}

fn validate_constants(constants: &HuntConstants) -> Result<(), ConfigError> {
    let fields = [
        ("bite_bonus_per_level", constants.bite_bonus_per_level),
        ("cutoff_warning_threshold", constants.cutoff_warning_threshold),
    ];
    for (field, value) in fields {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "constants.{} must be a non-negative number, got {}",
                field, value
            )));
        }
    }
    Ok(())
}

/// Validated, immutable hunt tables
///
/// Built once at start-up and borrowed by every calculation.
#[derive(Debug, Clone)]
pub struct HuntModel {
    pub catalog: UnitCatalog,
    pub curve: ReferenceCurve,
    pub constants: HuntConstants,
}

impl HuntModel {
    pub fn calculator(&self) -> HuntCalculator<'_> {
        HuntCalculator::new(&self.catalog, &self.curve, &self.constants)
    }
}

/// Get the shipped hunt configuration
pub fn default_config() -> HuntConfig {
    let toml = include_str!("../../config/hunt.toml");
    super::parse_toml(toml).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "shipped hunt config unreadable, using built-in tables");
        HuntConfig::default()
    })
}
