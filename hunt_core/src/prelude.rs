//! Prelude module for convenient imports
//!
//! ```rust
//! use hunt_core::prelude::*;
//! ```

// Inputs and outputs
pub use crate::types::{Advisory, CalculationInput, CalculationResult, UnitCount};

// Calculation
pub use crate::calculator::HuntCalculator;
pub use crate::curve::DomainError;

// Config
pub use crate::config::{default_config, ConfigError, HuntConfig, HuntModel};
