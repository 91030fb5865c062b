//! Deck files
//!
//! A deck is a JSON array of `ReviewableItem`. The CLI is the host, so loading,
//! boundary validation, and write-back live here rather than in the core.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use cadence_core::{CadenceConfig, LearningMetrics, ReviewableItem};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;

/// Load and validate a deck
pub fn load_deck(path: &Path) -> anyhow::Result<Vec<ReviewableItem>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck {}", path.display()))?;
    let items: Vec<ReviewableItem> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse deck {}", path.display()))?;

    for item in &items {
        item.validate()
            .with_context(|| format!("Invalid item in deck {}", path.display()))?;
    }

    let mut seen = std::collections::HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            bail!("Duplicate item id {:?} in deck {}", item.id, path.display());
        }
    }

    tracing::debug!(path = %path.display(), items = items.len(), "Loaded deck");
    Ok(items)
}

/// Write a deck back atomically (temp file + rename)
pub fn save_deck(path: &Path, items: &[ReviewableItem]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");

    std::fs::write(&tmp, json)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace deck {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = items.len(), "Saved deck");
    Ok(())
}

/// Load and validate session metrics
pub fn load_metrics(path: &Path) -> anyhow::Result<LearningMetrics> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metrics {}", path.display()))?;
    let metrics: LearningMetrics = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse metrics {}", path.display()))?;
    metrics.validate()?;
    Ok(metrics)
}

/// Load a JSON array of RFC 3339 review timestamps
pub fn load_review_dates(path: &Path) -> anyhow::Result<Vec<DateTime<Utc>>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read review dates {}", path.display()))?;
    let dates = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse review dates {}", path.display()))?;
    Ok(dates)
}

/// Default config location: `<platform config dir>/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "cadence", "cadence").map(|dirs| dirs.config_dir().join("config.json"))
}

/// Resolve configuration: explicit file, else the default file if present, else defaults.
/// Environment overrides apply last.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<CadenceConfig> {
    let config = match explicit {
        Some(path) => CadenceConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => CadenceConfig::from_json_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => CadenceConfig::default(),
        },
    };

    Ok(config.apply_env_overrides()?)
}
