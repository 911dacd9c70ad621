//! Combat power - Army aggregation and raid splitting

mod allocation;
mod combat;

pub use allocation::per_raid_count;
pub use combat::{combat_power_per_raid, CombatPowerCalculator};
