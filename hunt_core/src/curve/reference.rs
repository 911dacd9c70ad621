//! ReferenceCurve - Known cutoffs at one canonical combat power

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Target size on arrival
    pub input_size: f64,
    /// Recommended cutoff at the reference combat power
    pub cutoff: f64,
}

impl ReferencePoint {
    pub fn new(input_size: f64, cutoff: f64) -> Self {
        ReferencePoint { input_size, cutoff }
    }
}

/// Validated reference table
///
/// Invariants, checked once in [`ReferenceCurve::new`]:
/// - at least two points
/// - every input size and cutoff positive and finite
/// - input sizes strictly increasing
/// - reference combat power positive and finite
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    points: Vec<ReferencePoint>,
    reference_combat_power: f64,
}

impl ReferenceCurve {
    pub fn new(points: Vec<ReferencePoint>, reference_combat_power: f64) -> Result<Self, ConfigError> {
        if points.len() < 2 {
            return Err(ConfigError::CurveTooShort { len: points.len() });
        }

        check_positive("reference_combat_power", reference_combat_power)?;

        for (index, point) in points.iter().enumerate() {
            check_positive(&format!("reference_curve[{}].input_size", index), point.input_size)?;
            check_positive(&format!("reference_curve[{}].cutoff", index), point.cutoff)?;
        }

        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].input_size <= pair[0].input_size {
                return Err(ConfigError::CurveNotIncreasing {
                    index: index + 1,
                    previous: pair[0].input_size,
                    current: pair[1].input_size,
                });
            }
        }

        Ok(ReferenceCurve {
            points,
            reference_combat_power,
        })
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    /// Combat power at which the table cutoffs apply unscaled
    pub fn reference_combat_power(&self) -> f64 {
        self.reference_combat_power
    }

    /// Number of interpolation segments (always at least 1)
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Endpoints of segment `index`, clamped to the last segment
    pub fn segment(&self, index: usize) -> (ReferencePoint, ReferencePoint) {
        let index = index.min(self.segment_count() - 1);
        (self.points[index], self.points[index + 1])
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}
