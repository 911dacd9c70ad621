//! CutoffInterpolator - Log-log interpolation against the reference curve

use super::reference::{ReferenceCurve, ReferencePoint};
use thiserror::Error;

/// Inputs outside the range the cutoff formula is defined for
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("Arrival size must be positive, got {0}")]
    NonPositiveArrivalSize(f64),
    #[error("Combat power per raid cannot be negative, got {0}")]
    NegativeCombatPower(f64),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Interpolate in log-log space between two reference points
///
/// `ln C = ln C0 + (ln x - ln S0) * (ln C1 - ln C0) / (ln S1 - ln S0)`
///
/// Straight lines in log-log space are power laws, so between two table rows
/// the cutoff follows `C = C0 * (x / S0)^k`. Only called with segments of a
/// validated [`ReferenceCurve`], which never have zero width.
pub(crate) fn log_log_interpolate(lo: ReferencePoint, hi: ReferencePoint, x: f64) -> f64 {
    let ln_s0 = lo.input_size.ln();
    let ln_s1 = hi.input_size.ln();
    let ln_c0 = lo.cutoff.ln();
    let ln_c1 = hi.cutoff.ln();
    debug_assert!(ln_s1 > ln_s0, "reference segment has zero width");

    let ln_c = ln_c0 + (x.ln() - ln_s0) * (ln_c1 - ln_c0) / (ln_s1 - ln_s0);
    ln_c.exp()
}

/// Turns an arrival size and a per-raid combat power into a cutoff
#[derive(Debug, Clone, Copy)]
pub struct CutoffInterpolator<'a> {
    curve: &'a ReferenceCurve,
}

impl<'a> CutoffInterpolator<'a> {
    pub fn new(curve: &'a ReferenceCurve) -> Self {
        CutoffInterpolator { curve }
    }

    /// Index of the segment used for `arrival_size`
    ///
    /// The rightmost point not above the arrival size starts the segment.
    /// Sizes below the table use the first segment, sizes at or above the
    /// last point use the last segment.
    pub fn segment_index(&self, arrival_size: f64) -> usize {
        let at_or_below = self
            .curve
            .points()
            .partition_point(|point| point.input_size <= arrival_size);

        at_or_below
            .saturating_sub(1)
            .min(self.curve.segment_count() - 1)
    }

    /// Cutoff at the reference combat power
    pub fn reference_cutoff(&self, arrival_size: f64) -> Result<f64, DomainError> {
        check_arrival_size(arrival_size)?;

        let segment = self.segment_index(arrival_size);
        let (lo, hi) = self.curve.segment(segment);
        let cutoff = log_log_interpolate(lo, hi, arrival_size);

        tracing::debug!(
            arrival_size,
            segment,
            lo = lo.input_size,
            hi = hi.input_size,
            cutoff,
            "interpolated reference cutoff"
        );

        Ok(cutoff)
    }

    /// Cutoff rescaled linearly by the player's combat power per raid
    pub fn recommended_cutoff(
        &self,
        arrival_size: f64,
        combat_power_per_raid: f64,
    ) -> Result<f64, DomainError> {
        check_combat_power(combat_power_per_raid)?;
        let reference = self.reference_cutoff(arrival_size)?;

        Ok(reference * (combat_power_per_raid / self.curve.reference_combat_power()))
    }
}

fn check_arrival_size(arrival_size: f64) -> Result<(), DomainError> {
    if !arrival_size.is_finite() {
        return Err(DomainError::NonFinite {
            field: "arrival_size",
            value: arrival_size,
        });
    }
    if arrival_size <= 0.0 {
        return Err(DomainError::NonPositiveArrivalSize(arrival_size));
    }
    Ok(())
}

fn check_combat_power(combat_power: f64) -> Result<(), DomainError> {
    if !combat_power.is_finite() {
        return Err(DomainError::NonFinite {
            field: "combat_power_per_raid",
            value: combat_power,
        });
    }
    if combat_power < 0.0 {
        return Err(DomainError::NegativeCombatPower(combat_power));
    }
    Ok(())
}
