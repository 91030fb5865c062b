//! Configuration
//!
//! Groups the scheduler and advisor constants so a host can load them once and
//! pass them in explicitly. Sources, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A JSON file (missing fields keep their defaults)
//! 3. `CADENCE_*` environment variables
//!
//! Nothing here is global: the host owns the resulting value.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::advisor::{AdvisorConfig, DifficultyAdvisor};
use crate::error::{ConfigError, Result};
use crate::scheduler::{ReviewScheduler, SchedulerConfig};

/// Environment variable names for scheduler overrides
pub const ENV_RETRY_MINUTES: &str = "CADENCE_RETRY_MINUTES";
pub const ENV_BASE_INTERVAL_HOURS: &str = "CADENCE_BASE_INTERVAL_HOURS";
pub const ENV_GROWTH_FACTOR: &str = "CADENCE_GROWTH_FACTOR";
pub const ENV_MAX_INTERVAL_DAYS: &str = "CADENCE_MAX_INTERVAL_DAYS";
pub const ENV_MASTERY_THRESHOLD: &str = "CADENCE_MASTERY_THRESHOLD";
pub const ENV_MASTERY_STREAK: &str = "CADENCE_MASTERY_STREAK";

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CadenceConfig {
    pub scheduler: SchedulerConfig,
    pub advisor: AdvisorConfig,
}

impl CadenceConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Apply `CADENCE_*` variables from the process environment
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let s = &mut self.scheduler;
        if let Some(v) = parse_var(&lookup, ENV_RETRY_MINUTES)? {
            s.retry_interval_minutes = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_BASE_INTERVAL_HOURS)? {
            s.base_interval_hours = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_GROWTH_FACTOR)? {
            s.growth_factor = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MAX_INTERVAL_DAYS)? {
            s.max_interval_days = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MASTERY_THRESHOLD)? {
            s.mastery_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MASTERY_STREAK)? {
            s.mastery_streak = v;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<()> {
        self.scheduler.validate()?;
        self.advisor.validate()
    }

    /// Build a scheduler from this config
    pub fn scheduler(&self) -> ReviewScheduler {
        ReviewScheduler::with_config(self.scheduler.clone())
    }

    /// Build an advisor from this config
    pub fn advisor(&self) -> DifficultyAdvisor {
        DifficultyAdvisor::with_config(self.advisor.clone())
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { var, value: raw }),
    }
}
