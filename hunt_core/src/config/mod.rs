//! Configuration loading from TOML and JSON files

mod constants;
mod hunt;

pub use constants::HuntConstants;
pub use hunt::{default_config, HuntConfig, HuntModel};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
///
/// Every variant is fatal: a config that fails to load or validate means the
/// static tables are corrupt, not that the player typed something odd.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Reference curve needs at least 2 points, got {len}")]
    CurveTooShort { len: usize },
    #[error("Reference curve input sizes must strictly increase: point {index} ({current}) follows {previous}")]
    CurveNotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: String, value: f64 },
    #[error("Unit defined twice: {0}")]
    DuplicateUnit(String),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

/// Load a config file, picking the parser from the file extension
pub fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("toml") => load_toml(path),
        Some("json") => {
            let content = fs::read_to_string(path)?;
            parse_json(&content)
        }
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unsupported_extension() {
        let result: Result<HuntConfig, _> = load_config(Path::new("hunt.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<HuntConfig, _> = load_config(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_shipped_config() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/hunt.toml");
        let config: HuntConfig = load_config(&path).unwrap();
        assert_eq!(config.units.len(), 3);
        assert_eq!(config.reference_curve.len(), 7);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result: Result<HuntConfig, _> = parse_toml("units = 3 = 4");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let result: Result<HuntConfig, _> = parse_json("{ \"units\": ");
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }
}
