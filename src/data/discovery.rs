use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::{Distance, DistanceGroup};

/// Separator between the distance label and the replicate id.
const DISTANCE_SUFFIX: &str = "mm_";

// ---------------------------------------------------------------------------
// File listing
// ---------------------------------------------------------------------------

/// List regular files in `dir` whose extension equals `ext` (no leading dot).
pub fn find_profile_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("listing channel directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Grouping by distance
// ---------------------------------------------------------------------------

/// Split a file stem like `12.5mm_3` into (`12.5`, `3`).
pub fn split_stem(stem: &str) -> Option<(&str, &str)> {
    let (distance, replicate) = stem.split_once(DISTANCE_SUFFIX)?;
    if distance.is_empty() || replicate.is_empty() {
        return None;
    }
    Some((distance, replicate))
}

/// Group profile files into distance groups ordered by numeric distance.
///
/// Files whose names don't follow `{distance}mm_{replicate}.{ext}` are
/// skipped with a warning.
pub fn group_by_distance(files: &[PathBuf]) -> Vec<DistanceGroup> {
    // label → (distance, [(replicate id, path)])
    let mut by_label: BTreeMap<String, (Distance, Vec<(String, PathBuf)>)> = BTreeMap::new();

    for path in files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("skipping {}: non-UTF-8 file name", path.display());
            continue;
        };
        let Some((label, replicate)) = split_stem(stem) else {
            log::warn!("skipping {}: expected {{distance}}mm_{{replicate}}", path.display());
            continue;
        };
        let Some(distance) = Distance::parse(label) else {
            log::warn!("skipping {}: distance '{label}' is not a number", path.display());
            continue;
        };
        by_label
            .entry(label.to_string())
            .or_insert_with(|| (distance, Vec::new()))
            .1
            .push((replicate.to_string(), path.clone()));
    }

    let mut groups: Vec<DistanceGroup> = by_label
        .into_values()
        .map(|(distance, mut replicates)| {
            replicates.sort_by(|a, b| natural_cmp(&a.0, &b.0));
            DistanceGroup {
                distance,
                files: replicates.into_iter().map(|(_, p)| p).collect(),
            }
        })
        .collect();
    groups.sort_by(|a, b| a.distance.value.total_cmp(&b.distance.value));
    groups
}

/// Numeric replicate ids sort numerically, everything else lexically.
fn natural_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Discover and group every profile in a channel directory.
pub fn discover_groups(dir: &Path, ext: &str) -> Result<Vec<DistanceGroup>> {
    let files = find_profile_files(dir, ext)?;
    let groups = group_by_distance(&files);
    log::info!(
        "{}: {} profile files in {} distance groups",
        dir.display(),
        files.len(),
        groups.len()
    );
    Ok(groups)
}
