//! UnitCatalog - Static combat attributes for every unit type

mod unit;

pub use unit::Unit;

use crate::config::ConfigError;
use std::collections::HashMap;
use thiserror::Error;

/// Unit lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Read-only table of unit definitions
///
/// Units keep the order they were defined in, which is the order the shell
/// lists them. Lookups accept either the id or the display name, compared
/// after [`normalize_key`].
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    index: HashMap<String, usize>,
}

impl UnitCatalog {
    /// Build a catalog, rejecting invalid stats and clashing identifiers
    pub fn new(units: Vec<Unit>) -> Result<Self, ConfigError> {
        let mut index = HashMap::new();

        for (position, unit) in units.iter().enumerate() {
            unit.validate()?;

            for key in [normalize_key(&unit.id), normalize_key(&unit.name)] {
                if key.is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "unit '{}' has an empty identifier",
                        unit.id
                    )));
                }
                // id and name of the same unit may normalize to one key
                let owner = *index.entry(key).or_insert(position);
                if owner != position {
                    return Err(ConfigError::DuplicateUnit(unit.id.clone()));
                }
            }
        }

        Ok(UnitCatalog { units, index })
    }

    /// Find a unit by id or display name
    pub fn lookup(&self, identifier: &str) -> Option<&Unit> {
        self.index
            .get(&normalize_key(identifier))
            .map(|&position| &self.units[position])
    }

    /// Find a unit by id or display name, failing on unknown identifiers
    pub fn require(&self, identifier: &str) -> Result<&Unit, CatalogError> {
        self.lookup(identifier)
            .ok_or_else(|| CatalogError::UnknownUnit(identifier.to_string()))
    }

    /// Units in definition order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Lowercase and drop everything that is not a letter or digit, so that
/// `petite_roussette`, `PetiteRoussette` and `Petite Roussette` all match.
pub fn normalize_key(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
