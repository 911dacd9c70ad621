//! Combat power (FDF) aggregation

use crate::catalog::{Unit, UnitCatalog};
use crate::config::HuntConstants;
use crate::types::{ArmySummary, UnitCount};

/// Sums a player's army into combat power
///
/// Unit counts naming a unit the catalog does not know contribute nothing.
/// This is deliberate: a stale or mistyped entry must not stop the player
/// from getting a result.
#[derive(Debug, Clone, Copy)]
pub struct CombatPowerCalculator<'a> {
    catalog: &'a UnitCatalog,
    constants: &'a HuntConstants,
}

impl<'a> CombatPowerCalculator<'a> {
    pub fn new(catalog: &'a UnitCatalog, constants: &'a HuntConstants) -> Self {
        CombatPowerCalculator { catalog, constants }
    }

    /// Unit counts resolved against the catalog, unknown ones dropped
    pub fn resolved<'c>(
        &self,
        unit_counts: &'c [UnitCount],
    ) -> impl Iterator<Item = (&'a Unit, u64)> + 'c
    where
        'a: 'c,
    {
        let catalog = self.catalog;
        unit_counts.iter().filter_map(move |entry| {
            let unit = catalog.lookup(&entry.unit);
            if unit.is_none() {
                tracing::debug!(unit = %entry.unit, count = entry.count, "skipping unknown unit");
            }
            unit.map(|unit| (unit, entry.count))
        })
    }

    /// Identifiers in `unit_counts` that the catalog does not know
    pub fn unknown_units(&self, unit_counts: &[UnitCount]) -> Vec<String> {
        unit_counts
            .iter()
            .filter(|entry| self.catalog.lookup(&entry.unit).is_none())
            .map(|entry| entry.unit.clone())
            .collect()
    }

    /// `Σ count × attack × (1 + bonus × bite_level)` over known units
    pub fn total_combat_power(&self, unit_counts: &[UnitCount], bite_level: u32) -> f64 {
        let multiplier = self.constants.bite_multiplier(bite_level);

        self.resolved(unit_counts)
            .map(|(unit, count)| count as f64 * unit.attack * multiplier)
            .sum()
    }

    /// Raw attack, defense and health totals over known units
    pub fn army_summary(&self, unit_counts: &[UnitCount]) -> ArmySummary {
        self.resolved(unit_counts)
            .fold(ArmySummary::default(), |mut summary, (unit, count)| {
                let n = count as f64;
                summary.units = summary.units.saturating_add(count);
                summary.attack += n * unit.attack;
                summary.defense += n * unit.defense;
                summary.health += n * unit.health;
                summary
            })
    }

    /// Total owned per catalog unit, in catalog order
    ///
    /// Several entries for the same unit are added together, saturating at
    /// `u64::MAX`.
    pub fn counts_by_unit(&self, unit_counts: &[UnitCount]) -> Vec<(&'a Unit, u64)> {
        let mut totals: Vec<(&'a Unit, u64)> =
            self.catalog.units().iter().map(|unit| (unit, 0)).collect();

        for (unit, count) in self.resolved(unit_counts) {
            if let Some(slot) = totals.iter_mut().find(|(known, _)| known.id == unit.id) {
                slot.1 = slot.1.saturating_add(count);
            }
        }

        totals
    }
}

/// Combat power available to each raid
///
/// Returns 0 when there are no raids rather than dividing by zero.
pub fn combat_power_per_raid(total_combat_power: f64, hunt_instinct: u32) -> f64 {
    if hunt_instinct == 0 {
        return 0.0;
    }
    total_combat_power / hunt_instinct as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> UnitCatalog {
        UnitCatalog::new(vec![
            Unit::new("petite_roussette", "Petite Roussette", 60.0, 40.0, 70.0),
            Unit::new("roussette", "Roussette", 100.0, 60.0, 100.0),
            Unit::new("requin_blanc", "Requin Blanc", 1100.0, 1.0, 600.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_unit_bite_one() {
        // 10 × 60 × 1.1 = 660
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);

        let counts = vec![
            UnitCount::new("PetiteRoussette", 10),
            UnitCount::new("Roussette", 0),
            UnitCount::new("RequinBlanc", 0),
        ];
        let total = calc.total_combat_power(&counts, 1);
        assert!((total - 660.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_army() {
        // (5 × 60 + 3 × 100 + 2 × 1100) × (1 + 0.1 × 4) = 2800 × 1.4 = 3920
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);

        let counts = vec![
            UnitCount::new("petite_roussette", 5),
            UnitCount::new("roussette", 3),
            UnitCount::new("requin_blanc", 2),
        ];
        let total = calc.total_combat_power(&counts, 4);
        assert!((total - 3920.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_units_contribute_nothing() {
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);

        let counts = vec![
            UnitCount::new("roussette", 1),
            UnitCount::new("kraken", 1_000_000),
        ];
        let total = calc.total_combat_power(&counts, 1);
        assert!((total - 110.0).abs() < 1e-9);
        assert_eq!(calc.unknown_units(&counts), vec!["kraken".to_string()]);
    }

    #[test]
    fn test_empty_army() {
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);
        assert!((calc.total_combat_power(&[], 5) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_army_summary() {
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);

        let counts = vec![
            UnitCount::new("roussette", 2),
            UnitCount::new("requin_blanc", 1),
            UnitCount::new("kraken", 9),
        ];
        let summary = calc.army_summary(&counts);
        assert_eq!(summary.units, 3);
        assert!((summary.attack - 1300.0).abs() < f64::EPSILON);
        assert!((summary.defense - 121.0).abs() < f64::EPSILON);
        assert!((summary.health - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_by_unit_merges_duplicates() {
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);

        let counts = vec![
            UnitCount::new("roussette", 2),
            UnitCount::new("Roussette", 3),
        ];
        let by_unit: Vec<(&str, u64)> = calc
            .counts_by_unit(&counts)
            .into_iter()
            .map(|(unit, count)| (unit.id.as_str(), count))
            .collect();
        assert_eq!(
            by_unit,
            [("petite_roussette", 0), ("roussette", 5), ("requin_blanc", 0)]
        );
    }

    #[test]
    fn test_huge_counts_saturate() {
        let catalog = catalog();
        let constants = HuntConstants::default();
        let calc = CombatPowerCalculator::new(&catalog, &constants);

        let counts = vec![
            UnitCount::new("roussette", u64::MAX),
            UnitCount::new("Roussette", 1),
            UnitCount::new("petite_roussette", 1),
        ];
        let summary = calc.army_summary(&counts);
        assert_eq!(summary.units, u64::MAX);

        let by_unit = calc.counts_by_unit(&counts);
        assert_eq!(by_unit[1].1, u64::MAX);
        assert!(calc.total_combat_power(&counts, 1).is_finite());
    }

    #[test]
    fn test_per_raid_division() {
        assert!((combat_power_per_raid(900.0, 3) - 300.0).abs() < f64::EPSILON);
        assert!((combat_power_per_raid(900.0, 0) - 0.0).abs() < f64::EPSILON);
    }
}
