use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::analysis::aggregate::aggregate_replicates;
use crate::analysis::gradient::gradient_record;
use crate::config::AnalysisConfig;
use crate::data::discovery::discover_groups;
use crate::data::loader::load_profile;
use crate::data::model::{AggregatedProfile, Distance, DistanceGroup, GradientRecord, RawProfile};
use crate::data::output::{export_profile, write_results};
use crate::picker::PointPicker;

/// Aggregated curve for one distance group.
#[derive(Debug, Clone)]
pub struct DistanceCurve {
    pub distance: Distance,
    pub profile: AggregatedProfile,
}

// ---------------------------------------------------------------------------
// Aggregation of every group in a channel
// ---------------------------------------------------------------------------

fn load_group(group: &DistanceGroup) -> Result<Vec<RawProfile>> {
    group
        .files
        .iter()
        .map(|path| {
            load_profile(path).with_context(|| {
                format!("distance {}: loading {}", group.distance, path.display())
            })
        })
        .collect()
}

/// Load and combine every distance group found in `dir`, in distance order.
pub fn aggregate_channel(dir: &Path, config: &AnalysisConfig) -> Result<Vec<DistanceCurve>> {
    let groups = discover_groups(dir, &config.extension)?;
    if groups.is_empty() {
        bail!(
            "no `{{distance}}mm_{{replicate}}.{}` files in {}",
            config.extension,
            dir.display()
        );
    }

    let options = config.aggregate_options();
    let mut curves = Vec::with_capacity(groups.len());
    for group in &groups {
        let raws = load_group(group)?;
        let profile = aggregate_replicates(&raws, &options)
            .with_context(|| format!("distance {}", group.distance))?;
        log::info!(
            "{}: {} replicates → {} points",
            group.distance,
            raws.len(),
            profile.num_points
        );
        curves.push(DistanceCurve {
            distance: group.distance.clone(),
            profile,
        });
    }
    Ok(curves)
}

// ---------------------------------------------------------------------------
// Full channel run
// ---------------------------------------------------------------------------

/// Aggregate every group, collect two points per curve from `picker`,
/// and write the gradients to the channel's results file.
pub fn process_channel(
    dir: &Path,
    config: &AnalysisConfig,
    picker: &mut dyn PointPicker,
) -> Result<Vec<GradientRecord>> {
    let curves = aggregate_channel(dir, config)?;

    if config.export_profiles {
        for curve in &curves {
            let path = dir
                .join("profiles")
                .join(format!("{}mm_median.csv", curve.distance.label));
            export_profile(&path, &curve.profile)?;
            log::debug!("exported {}", path.display());
        }
    }

    let mut records = Vec::with_capacity(curves.len());
    for curve in &curves {
        let points = picker
            .request_two_points(&curve.distance, &curve.profile)
            .with_context(|| format!("selecting points for {}", curve.distance))?;
        let record = gradient_record(curve.distance.value, points)
            .with_context(|| format!("distance {}", curve.distance))?;
        log::info!("{}: gradient {:.4}", curve.distance, record.gradient);
        records.push(record);
    }

    let results = dir.join(&config.results_file);
    write_results(&results, &records)?;
    log::info!("wrote {} gradients to {}", records.len(), results.display());
    Ok(records)
}
