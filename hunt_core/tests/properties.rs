//! Property tests for combat power and cutoff interpolation

use hunt_core::prelude::*;
use hunt_core::{combat_power_per_raid, per_raid_count, ReferencePoint, UnitCount};
use proptest::prelude::*;

fn model() -> HuntModel {
    default_config().build().unwrap()
}

/// Straight line through two table rows in log-log space, evaluated at `x`
fn power_law(lo: ReferencePoint, hi: ReferencePoint, x: f64) -> f64 {
    let slope = (hi.cutoff.ln() - lo.cutoff.ln()) / (hi.input_size.ln() - lo.input_size.ln());
    (lo.cutoff.ln() + (x.ln() - lo.input_size.ln()) * slope).exp()
}

fn army(counts: [u64; 3]) -> Vec<UnitCount> {
    vec![
        UnitCount::new("petite_roussette", counts[0]),
        UnitCount::new("roussette", counts[1]),
        UnitCount::new("requin_blanc", counts[2]),
    ]
}

proptest! {
    #[test]
    fn combat_power_non_decreasing_in_counts(
        counts in prop::array::uniform3(0u64..1_000_000_000),
        which in 0usize..3,
        extra in 0u64..1_000_000,
        bite in 1u32..50,
    ) {
        let model = model();
        let calc = model.calculator();

        let mut more = counts;
        more[which] += extra;

        let before = calc.total_combat_power(&army(counts), bite);
        let after = calc.total_combat_power(&army(more), bite);
        prop_assert!(after >= before);
    }

    #[test]
    fn combat_power_non_decreasing_in_bite(
        counts in prop::array::uniform3(0u64..1_000_000_000),
        bite in 1u32..50,
        step in 0u32..50,
    ) {
        let model = model();
        let calc = model.calculator();

        let before = calc.total_combat_power(&army(counts), bite);
        let after = calc.total_combat_power(&army(counts), bite + step);
        prop_assert!(after >= before);
    }

    #[test]
    fn cutoff_non_increasing_in_arrival(
        a in 1_000.0f64..1e9,
        b in 1_000.0f64..1e9,
        power in 1.0f64..1e13,
    ) {
        let model = model();
        let calc = model.calculator();

        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let at_small = calc.recommended_cutoff(small, power).unwrap();
        let at_large = calc.recommended_cutoff(large, power).unwrap();
        // Segment joins may differ by an ulp depending on which side computes them
        prop_assert!(at_large <= at_small * (1.0 + 1e-12));
    }

    #[test]
    fn cutoff_scales_linearly_with_power(
        arrival in 1_000.0f64..1e9,
        power in 1.0f64..1e13,
    ) {
        let model = model();
        let calc = model.calculator();

        let single = calc.recommended_cutoff(arrival, power).unwrap();
        let double = calc.recommended_cutoff(arrival, 2.0 * power).unwrap();
        prop_assert!(((double - 2.0 * single) / double).abs() < 1e-12);
    }

    #[test]
    fn below_table_matches_first_segment(arrival in 1.0f64..1_000_000.0) {
        let model = model();
        let interp = model.calculator().interpolator();
        let (lo, hi) = model.curve.segment(0);

        prop_assert_eq!(interp.segment_index(arrival), 0);
        let expected = power_law(lo, hi, arrival);
        let cutoff = interp.reference_cutoff(arrival).unwrap();
        prop_assert!(((cutoff - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn above_table_matches_last_segment(arrival in 100_000_000.0f64..1e12) {
        let model = model();
        let interp = model.calculator().interpolator();
        let last = model.curve.segment_count() - 1;
        let (lo, hi) = model.curve.segment(last);

        prop_assert_eq!(interp.segment_index(arrival), last);
        let expected = power_law(lo, hi, arrival);
        let cutoff = interp.reference_cutoff(arrival).unwrap();
        prop_assert!(((cutoff - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn per_raid_figures_never_divide_by_zero(total in 0.0f64..1e15, count in 0u64..u64::MAX) {
        prop_assert_eq!(combat_power_per_raid(total, 0), 0.0);
        prop_assert_eq!(per_raid_count(count, 0), 0);
    }

    #[test]
    fn per_raid_allocation_never_exceeds_army(count in 0u64..1_000_000_000, raids in 1u32..100) {
        let per_raid = per_raid_count(count, raids);
        let sent = per_raid * u64::from(raids);
        prop_assert!(sent <= count);
        prop_assert!((count - sent) < u64::from(raids));
    }
}
