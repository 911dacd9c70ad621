//! Reference curve and cutoff interpolation

mod interpolate;
mod reference;

pub use interpolate::{CutoffInterpolator, DomainError};
pub use reference::{ReferenceCurve, ReferencePoint};
