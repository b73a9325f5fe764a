use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::{AggregatedProfile, GradientRecord};

// ---------------------------------------------------------------------------
// Gradient results
// ---------------------------------------------------------------------------

/// Write one `<distance> <gradient>` line per record, space separated.
pub fn write_results(path: &Path, records: &[GradientRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Aggregated profile export
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ProfileRow {
    position: f64,
    intensity: f64,
}

/// Write an aggregated profile as `position,intensity` CSV.
pub fn export_profile(path: &Path, profile: &AggregatedProfile) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for (&position, &intensity) in profile.position.iter().zip(&profile.intensity) {
        writer.serialize(ProfileRow {
            position,
            intensity,
        })?;
    }
    writer.flush()?;
    Ok(())
}
