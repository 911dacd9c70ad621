//! Application state

use hunt_core::{
    default_config, CalculationInput, CalculationResult, ConfigError, DomainError, HuntConfig,
    HuntModel, UnitCount,
};
use std::path::{Path, PathBuf};

/// Arrival size is entered in millions within these bounds
pub const ARRIVAL_MILLIONS_MIN: u64 = 1;
pub const ARRIVAL_MILLIONS_MAX: u64 = 100;

/// Where to look for a hunt config when none is given on the command line
const CONFIG_PATHS: [&str; 3] = [
    "hunt_core/config/hunt.toml",
    "config/hunt.toml",
    "../hunt_core/config/hunt.toml",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Plan,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Plan, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Plan => "Plan",
            Tab::Help => "Help",
        }
    }
}

/// One editable input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Count of the catalog unit at this position
    Unit(usize),
    BiteLevel,
    HuntInstinct,
    ArrivalMillions,
}

pub struct App {
    pub model: HuntModel,
    pub current_tab: Tab,
    /// Owned units, in catalog order
    pub unit_counts: Vec<u64>,
    pub bite_level: u32,
    pub hunt_instinct: u32,
    pub arrival_millions: u64,
    pub selected: usize,
    pub result: Result<CalculationResult, DomainError>,
    /// Where the tables came from
    pub source: String,
}

impl App {
    pub fn new(model: HuntModel, source: String) -> Self {
        let unit_counts = vec![0; model.catalog.len()];
        // `result` is filled in by the first recalculation below
        let mut app = App {
            model,
            current_tab: Tab::Plan,
            unit_counts,
            bite_level: 1,
            hunt_instinct: 1,
            arrival_millions: ARRIVAL_MILLIONS_MIN,
            selected: 0,
            result: Err(DomainError::NonPositiveArrivalSize(0.0)),
            source,
        };
        app.recalculate();
        app
    }

    /// Load the hunt tables: explicit path, then well-known locations, then built-in
    pub fn load_model(path: Option<&Path>) -> Result<(HuntModel, String), ConfigError> {
        if let Some(path) = path {
            let model = HuntConfig::load(path)?.build()?;
            return Ok((model, path.display().to_string()));
        }

        for candidate in CONFIG_PATHS.iter().map(PathBuf::from) {
            if candidate.is_file() {
                let model = HuntConfig::load(&candidate)?.build()?;
                return Ok((model, candidate.display().to_string()));
            }
        }

        tracing::info!("no hunt config found, using shipped tables");
        Ok((default_config().build()?, "built-in".to_string()))
    }

    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = (0..self.unit_counts.len()).map(Field::Unit).collect();
        fields.extend([Field::BiteLevel, Field::HuntInstinct, Field::ArrivalMillions]);
        fields
    }

    pub fn selected_field(&self) -> Field {
        let fields = self.fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    pub fn label(&self, field: Field) -> String {
        match field {
            Field::Unit(i) => format!("{} owned", self.model.catalog.units()[i].name),
            Field::BiteLevel => "Bite level".to_string(),
            Field::HuntInstinct => "Hunt instinct".to_string(),
            Field::ArrivalMillions => "Size on arrival (M)".to_string(),
        }
    }

    pub fn value(&self, field: Field) -> u64 {
        match field {
            Field::Unit(i) => self.unit_counts[i],
            Field::BiteLevel => self.bite_level as u64,
            Field::HuntInstinct => self.hunt_instinct as u64,
            Field::ArrivalMillions => self.arrival_millions,
        }
    }

    /// Store a value, clamped to the field's bounds, and recalculate
    pub fn set_value(&mut self, field: Field, value: u64) {
        match field {
            Field::Unit(i) => self.unit_counts[i] = value,
            Field::BiteLevel => self.bite_level = clamp_level(value),
            Field::HuntInstinct => self.hunt_instinct = clamp_level(value),
            Field::ArrivalMillions => {
                self.arrival_millions = value.clamp(ARRIVAL_MILLIONS_MIN, ARRIVAL_MILLIONS_MAX)
            }
        }
        self.recalculate();
    }

    pub fn input(&self) -> CalculationInput {
        let unit_counts = self
            .model
            .catalog
            .units()
            .iter()
            .zip(&self.unit_counts)
            .map(|(unit, &count)| UnitCount::new(unit.id.clone(), count))
            .collect();

        CalculationInput::with_arrival_millions(
            unit_counts,
            self.bite_level,
            self.hunt_instinct,
            self.arrival_millions as f64,
        )
    }

    /// Every input change reruns the whole calculation
    pub fn recalculate(&mut self) {
        self.result = self.model.calculator().calculate(&self.input());
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Help => Tab::Plan,
            Tab::Plan => Tab::Help,
        };
    }

    pub fn on_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.selected + 1 < self.fields().len() {
            self.selected += 1;
        }
    }

    /// Add `delta` to the selected field
    pub fn adjust(&mut self, delta: i64) {
        if self.current_tab != Tab::Plan {
            return;
        }
        let field = self.selected_field();
        let current = self.value(field);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as u64)
        };
        self.set_value(field, next);
    }

    /// Append a typed digit to the selected field
    pub fn push_digit(&mut self, digit: u32) {
        if self.current_tab != Tab::Plan {
            return;
        }
        let field = self.selected_field();
        let next = self
            .value(field)
            .saturating_mul(10)
            .saturating_add(digit as u64);
        self.set_value(field, next);
    }

    /// Drop the last digit of the selected field
    pub fn pop_digit(&mut self) {
        if self.current_tab != Tab::Plan {
            return;
        }
        let field = self.selected_field();
        self.set_value(field, self.value(field) / 10);
    }

    /// Clear the army and put every level back to its minimum
    pub fn reset(&mut self) {
        self.unit_counts.iter_mut().for_each(|count| *count = 0);
        self.bite_level = 1;
        self.hunt_instinct = 1;
        self.arrival_millions = ARRIVAL_MILLIONS_MIN;
        self.recalculate();
    }

    /// Display name for a catalog unit id
    pub fn unit_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.model
            .catalog
            .lookup(id)
            .map(|unit| unit.name.as_str())
            .unwrap_or(id)
    }
}

/// Bite level and hunt instinct are at least 1
fn clamp_level(value: u64) -> u32 {
    value.clamp(1, u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(HuntConfig::default().build().unwrap(), "test".to_string())
    }

    #[test]
    fn test_starts_with_empty_army() {
        let app = app();
        assert_eq!(app.unit_counts, vec![0, 0, 0]);
        let result = app.result.as_ref().unwrap();
        assert!((result.total_combat_power - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.raid_count, 1);
    }

    #[test]
    fn test_field_order() {
        let app = app();
        assert_eq!(
            app.fields(),
            vec![
                Field::Unit(0),
                Field::Unit(1),
                Field::Unit(2),
                Field::BiteLevel,
                Field::HuntInstinct,
                Field::ArrivalMillions,
            ]
        );
        assert_eq!(app.label(Field::Unit(2)), "Requin Blanc owned");
    }

    #[test]
    fn test_typing_digits_recalculates() {
        let mut app = app();
        app.push_digit(1);
        app.push_digit(0);
        assert_eq!(app.unit_counts[0], 10);

        // 10 × 60 × 1.1
        let result = app.result.as_ref().unwrap();
        assert!((result.total_combat_power - 660.0).abs() < 1e-9);

        app.pop_digit();
        assert_eq!(app.unit_counts[0], 1);
    }

    #[test]
    fn test_levels_never_drop_below_one() {
        let mut app = app();
        app.selected = 3;
        app.adjust(-10);
        assert_eq!(app.bite_level, 1);

        app.selected = 4;
        app.pop_digit();
        assert_eq!(app.hunt_instinct, 1);
    }

    #[test]
    fn test_arrival_bounds() {
        let mut app = app();
        app.selected = 5;
        app.adjust(500);
        assert_eq!(app.arrival_millions, ARRIVAL_MILLIONS_MAX);
        app.adjust(-1000);
        assert_eq!(app.arrival_millions, ARRIVAL_MILLIONS_MIN);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut app = app();
        app.on_up();
        assert_eq!(app.selected, 0);
        for _ in 0..20 {
            app.on_down();
        }
        assert_eq!(app.selected, 5);
        assert_eq!(app.selected_field(), Field::ArrivalMillions);
    }

    #[test]
    fn test_per_raid_split() {
        let mut app = app();
        app.set_value(Field::Unit(2), 10);
        app.set_value(Field::HuntInstinct, 3);

        let result = app.result.as_ref().unwrap();
        assert_eq!(result.raid_count_for("requin_blanc"), Some(3));
        assert_eq!(app.unit_name("requin_blanc"), "Requin Blanc");
    }

    #[test]
    fn test_reset() {
        let mut app = app();
        app.set_value(Field::Unit(1), 42);
        app.set_value(Field::BiteLevel, 7);
        app.reset();
        assert_eq!(app.unit_counts, vec![0, 0, 0]);
        assert_eq!(app.bite_level, 1);
    }

    #[test]
    fn test_editing_ignored_on_help_tab() {
        let mut app = app();
        app.toggle_help();
        app.push_digit(5);
        assert_eq!(app.unit_counts[0], 0);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Plan);
    }

    #[test]
    fn test_load_missing_config_fails() {
        let result = App::load_model(Some(Path::new("nowhere/hunt.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
