//! hunt_core - Combat power and raid cutoff calculations for hunting
//!
//! This library provides:
//! - UnitCatalog: Static attack/defense/health per unit type
//! - CombatPowerCalculator: Army combat power (FDF) and per-raid splits
//! - CutoffInterpolator: Recommended target cutoff (Tc) from the reference curve
//! - HuntCalculator: The whole calculation, one input in, one result out

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod curve;
pub mod power;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use calculator::HuntCalculator;
pub use catalog::{CatalogError, Unit, UnitCatalog};
pub use config::{default_config, ConfigError, HuntConfig, HuntConstants, HuntModel};
pub use curve::{CutoffInterpolator, DomainError, ReferenceCurve, ReferencePoint};
pub use power::{combat_power_per_raid, per_raid_count, CombatPowerCalculator};
pub use types::{Advisory, ArmySummary, CalculationInput, CalculationResult, UnitCount};
