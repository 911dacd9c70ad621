//! HuntCalculator - Army in, raid plan out

use crate::catalog::UnitCatalog;
use crate::config::HuntConstants;
use crate::curve::{CutoffInterpolator, DomainError, ReferenceCurve};
use crate::power::{combat_power_per_raid, per_raid_count, CombatPowerCalculator};
use crate::types::{Advisory, CalculationInput, CalculationResult, UnitCount};

/// Borrows the static hunt tables and runs calculations against them
///
/// Holds no mutable state: any number of calculations may run against the
/// same tables at once, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct HuntCalculator<'a> {
    catalog: &'a UnitCatalog,
    curve: &'a ReferenceCurve,
    constants: &'a HuntConstants,
}

impl<'a> HuntCalculator<'a> {
    pub fn new(catalog: &'a UnitCatalog, curve: &'a ReferenceCurve, constants: &'a HuntConstants) -> Self {
        HuntCalculator {
            catalog,
            curve,
            constants,
        }
    }

    pub fn combat_power(&self) -> CombatPowerCalculator<'a> {
        CombatPowerCalculator::new(self.catalog, self.constants)
    }

    pub fn interpolator(&self) -> CutoffInterpolator<'a> {
        CutoffInterpolator::new(self.curve)
    }

    pub fn total_combat_power(&self, unit_counts: &[UnitCount], bite_level: u32) -> f64 {
        self.combat_power().total_combat_power(unit_counts, bite_level)
    }

    pub fn combat_power_per_raid(&self, total_combat_power: f64, hunt_instinct: u32) -> f64 {
        combat_power_per_raid(total_combat_power, hunt_instinct)
    }

    pub fn recommended_cutoff(&self, arrival_size: f64, combat_power_per_raid: f64) -> Result<f64, DomainError> {
        self.interpolator()
            .recommended_cutoff(arrival_size, combat_power_per_raid)
    }

    /// Run the full calculation for one player
    ///
    /// Only an arrival size outside the curve's domain fails. Unknown units,
    /// zero hunt instinct and tiny cutoffs are reported as advisories.
    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, DomainError> {
        let power = self.combat_power();

        let total_combat_power = power.total_combat_power(&input.unit_counts, input.bite_level);
        let per_raid = combat_power_per_raid(total_combat_power, input.hunt_instinct);
        let recommended_cutoff = self.recommended_cutoff(input.arrival_size, per_raid)?;

        let per_unit_raid_counts = power
            .counts_by_unit(&input.unit_counts)
            .into_iter()
            .map(|(unit, count)| (unit.id.clone(), per_raid_count(count, input.hunt_instinct)))
            .collect();

        let mut advisories: Vec<Advisory> = power
            .unknown_units(&input.unit_counts)
            .into_iter()
            .map(Advisory::UnknownUnitSkipped)
            .collect();
        if input.hunt_instinct == 0 {
            advisories.push(Advisory::NoRaids);
        }
        let threshold = self.constants.cutoff_warning_threshold;
        if recommended_cutoff < threshold {
            advisories.push(Advisory::CutoffBelowThreshold {
                cutoff: recommended_cutoff,
                threshold,
            });
        }
        for advisory in &advisories {
            tracing::warn!(%advisory, "hunt advisory");
        }

        tracing::debug!(
            total_combat_power,
            combat_power_per_raid = per_raid,
            recommended_cutoff,
            "hunt calculated"
        );

        Ok(CalculationResult {
            total_combat_power,
            combat_power_per_raid: per_raid,
            recommended_cutoff,
            raid_count: input.hunt_instinct,
            per_unit_raid_counts,
            army: power.army_summary(&input.unit_counts),
            advisories,
        })
    }
}
