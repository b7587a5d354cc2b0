//! Configuration system for RoomForge.
//!
//! Load engine configuration from TOML or YAML files to tune the workday,
//! the construction heuristic, the balancing phases and trolley handling
//! without code changes. Every section has defaults, so an empty file is a
//! valid configuration.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use roomforge_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [workday]
//!     day_start = "08:30"
//!     length_minutes = 420
//!
//!     [balance.constrained]
//!     iteration_limit = 20
//!
//!     [trolley]
//!     available = 3
//! "#).unwrap();
//!
//! assert_eq!(config.workday.length_minutes, 420.0);
//! assert_eq!(config.balance.constrained.iteration_limit, 20);
//! assert_eq!(config.balance.relaxed.iteration_limit, 10);
//! assert_eq!(config.trolley.available, 3);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use roomforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("roomforge.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use roomforge_core::Workday;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Shift start, length and break policy.
    pub workday: Workday,

    /// Greedy construction settings.
    pub construction: ConstructionConfig,

    /// Load balancing phases.
    pub balance: BalanceConfig,

    /// Trolley allocation.
    pub trolley: TrolleyConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, cannot be parsed, or holds
    /// values rejected by [`EngineConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the workday rules.
    pub fn with_workday(mut self, workday: Workday) -> Self {
        self.workday = workday;
        self
    }

    /// Sets the number of trolleys available for the day.
    pub fn with_trolleys(mut self, available: usize) -> Self {
        self.trolley.available = available;
        self
    }

    /// Sets the iteration limit of the constrained balancing phase.
    pub fn with_constrained_iterations(mut self, limit: usize) -> Self {
        self.balance.constrained.iteration_limit = limit;
        self
    }

    /// Sets the iteration limit of the relaxed balancing phase.
    pub fn with_relaxed_iterations(mut self, limit: usize) -> Self {
        self.balance.relaxed.iteration_limit = limit;
        self
    }

    /// Sets the minimum score a balancing move needs to be applied.
    pub fn with_min_improvement(mut self, min_improvement: f64) -> Self {
        self.balance.min_improvement = min_improvement;
        self
    }

    /// Checks values that would make the engine misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workday.length_minutes <= 0.0 {
            return Err(ConfigError::Invalid(
                "workday.length_minutes must be positive".to_string(),
            ));
        }

        let non_negative = [
            ("workday.break_minutes", self.workday.break_minutes),
            (
                "workday.break_threshold_minutes",
                self.workday.break_threshold_minutes,
            ),
            (
                "construction.transition_penalty_factor",
                self.construction.transition_penalty_factor,
            ),
            (
                "balance.constrained.spread_tolerance",
                self.balance.constrained.spread_tolerance,
            ),
            (
                "balance.constrained.room_placement_weight",
                self.balance.constrained.room_placement_weight,
            ),
            (
                "balance.constrained.corridor_integrity_weight",
                self.balance.constrained.corridor_integrity_weight,
            ),
            (
                "balance.relaxed.activation_spread",
                self.balance.relaxed.activation_spread,
            ),
            (
                "balance.relaxed.pair_tolerance",
                self.balance.relaxed.pair_tolerance,
            ),
            (
                "balance.relaxed.high_volume_task_minutes",
                self.balance.relaxed.high_volume_task_minutes,
            ),
            (
                "balance.relaxed.target_weight",
                self.balance.relaxed.target_weight,
            ),
            (
                "balance.final_pass.activation_spread",
                self.balance.final_pass.activation_spread,
            ),
            ("trolley.penalty_minutes", self.trolley.penalty_minutes),
        ];
        if let Some((key, value)) = non_negative
            .iter()
            .find(|(_, value)| *value < 0.0 || value.is_nan())
        {
            return Err(ConfigError::Invalid(format!(
                "{key} must not be negative, got {value}"
            )));
        }

        if self.construction.little_work_tasks_per_unit == 0 {
            return Err(ConfigError::Invalid(
                "construction.little_work_tasks_per_unit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Greedy construction settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConstructionConfig {
    /// With at most this many tasks per unit, corridor caps are ignored.
    pub little_work_tasks_per_unit: usize,

    /// Multiplier turning walking minutes into a dynamic penalty.
    pub transition_penalty_factor: f64,
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            little_work_tasks_per_unit: 5,
            transition_penalty_factor: 15.0,
        }
    }
}

/// Settings of the three balancing phases.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BalanceConfig {
    pub constrained: ConstrainedBalanceConfig,
    pub relaxed: RelaxedBalanceConfig,
    pub final_pass: FinalPassConfig,

    /// A move is applied only if its score is strictly greater than this.
    pub min_improvement: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            constrained: ConstrainedBalanceConfig::default(),
            relaxed: RelaxedBalanceConfig::default(),
            final_pass: FinalPassConfig::default(),
            min_improvement: 0.0,
        }
    }
}

/// Phase 1: moves that respect corridor caps and occupancy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConstrainedBalanceConfig {
    pub iteration_limit: usize,

    /// Stop once the spread between extremes is at most this many minutes.
    pub spread_tolerance: f64,

    pub room_placement_weight: f64,
    pub corridor_integrity_weight: f64,
}

impl Default for ConstrainedBalanceConfig {
    fn default() -> Self {
        Self {
            iteration_limit: 15,
            spread_tolerance: 10.0,
            room_placement_weight: 0.2,
            corridor_integrity_weight: 0.8,
        }
    }
}

/// Phase 2: looser caps, runs only when phase 1 left a wide spread.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RelaxedBalanceConfig {
    pub iteration_limit: usize,

    /// Minimum spread for the phase to run at all.
    pub activation_spread: f64,

    /// A source/target pair this close is considered balanced.
    pub pair_tolerance: f64,

    /// Tasks longer than this may open a third unit in a corridor.
    pub high_volume_task_minutes: f64,

    /// Weight of the distance-from-workday term in a move's score.
    pub target_weight: f64,
}

impl Default for RelaxedBalanceConfig {
    fn default() -> Self {
        Self {
            iteration_limit: 10,
            activation_spread: 30.0,
            pair_tolerance: 15.0,
            high_volume_task_minutes: 30.0,
            target_weight: 0.5,
        }
    }
}

/// Phase 3: a single unconstrained move.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FinalPassConfig {
    pub activation_spread: f64,
}

impl Default for FinalPassConfig {
    fn default() -> Self {
        Self {
            activation_spread: 30.0,
        }
    }
}

/// Trolley allocation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TrolleyConfig {
    /// Trolleys the hotel owns.
    pub available: usize,

    /// Extra minutes per no-storage room for units without a trolley.
    pub penalty_minutes: f64,
}

impl Default for TrolleyConfig {
    fn default() -> Self {
        Self {
            available: 2,
            penalty_minutes: 3.0,
        }
    }
}

#[cfg(test)]
mod tests;
