use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::AggregateOptions;

/// Optional per-channel settings file looked up inside the channel folder.
pub const CHANNEL_CONFIG_FILE: &str = "mixing.json";

// ---------------------------------------------------------------------------
// Analysis configuration
// ---------------------------------------------------------------------------

/// Settings for processing one channel directory.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "num_points": 400, "smoothing": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Lattice size (default: longest trimmed replicate in each group).
    pub num_points: Option<usize>,
    pub smoothing: bool,
    /// Triangle half-width (default: `num_points / 100`).
    pub smoothing_degree: Option<usize>,
    /// Profile file extension, without the dot.
    pub extension: String,
    /// Results file name inside the channel folder.
    pub results_file: String,
    /// Also write each aggregated curve to `profiles/<distance>mm_median.csv`.
    pub export_profiles: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_points: None,
            smoothing: false,
            smoothing_degree: None,
            extension: "hst".to_string(),
            results_file: "results.txt".to_string(),
            export_profiles: false,
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AnalysisConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the settings for a channel: an explicit file wins, then
    /// `<channel>/mixing.json`, then defaults.
    pub fn for_channel(channel: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let local = channel.join(CHANNEL_CONFIG_FILE);
        if local.is_file() {
            log::info!("using channel config {}", local.display());
            return Self::from_file(&local);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_points == Some(0) {
            bail!("num_points must be at least 1");
        }
        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        if self.extension.starts_with('.') {
            bail!("extension '{}' must be given without the leading dot", self.extension);
        }
        if self.results_file.is_empty() {
            bail!("results_file must not be empty");
        }
        Ok(())
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            num_points: self.num_points,
            smoothing: self.smoothing,
            smoothing_degree: self.smoothing_degree,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "num_points": 250, "smoothing": true }"#).unwrap();

        let cfg = AnalysisConfig::from_file(&path).unwrap();
        assert_eq!(cfg.num_points, Some(250));
        assert!(cfg.smoothing);
        assert_eq!(cfg.extension, "hst");
        assert_eq!(cfg.results_file, "results.txt");
    }

    #[test]
    fn channel_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CHANNEL_CONFIG_FILE), r#"{ "extension": "txt" }"#).unwrap();

        let cfg = AnalysisConfig::for_channel(dir.path(), None).unwrap();
        assert_eq!(cfg.extension, "txt");

        let empty = tempfile::tempdir().unwrap();
        assert_eq!(
            AnalysisConfig::for_channel(empty.path(), None).unwrap(),
            AnalysisConfig::default()
        );
    }

    #[test]
    fn rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");

        fs::write(&path, r#"{ "num_points": 0 }"#).unwrap();
        assert!(AnalysisConfig::from_file(&path).is_err());

        fs::write(&path, r#"{ "extension": ".hst" }"#).unwrap();
        assert!(AnalysisConfig::from_file(&path).is_err());

        fs::write(&path, r#"{ "num_point": 10 }"#).unwrap();
        assert!(AnalysisConfig::from_file(&path).is_err());
    }

    #[test]
    fn maps_onto_aggregate_options() {
        let cfg = AnalysisConfig {
            num_points: Some(64),
            smoothing: true,
            smoothing_degree: Some(3),
            ..Default::default()
        };
        let opts = cfg.aggregate_options();
        assert_eq!(opts.num_points, Some(64));
        assert!(opts.smoothing);
        assert_eq!(opts.smoothing_degree, Some(3));
    }
}
