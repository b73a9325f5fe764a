use crate::data::model::{AggregatedProfile, Lattice, RawProfile, ResampledReplicate};
use crate::error::{ProfileError, ReplicateError};

use super::interpolate::linear_interpolate;
use super::normalize::normalize;
use super::smooth::triangular_smooth;
use super::trim::{trim_to_channel, EdgePolicy};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Knobs for combining one distance group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateOptions {
    /// Lattice size; `None` uses the longest trimmed replicate.
    pub num_points: Option<usize>,
    /// Smooth the median curve afterwards.
    pub smoothing: bool,
    /// Triangle half-width; `None` means `num_points / 100`.
    pub smoothing_degree: Option<usize>,
    pub edge_policy: EdgePolicy,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Trim, normalise and resample every replicate onto a shared lattice,
/// then take the per-point median.
pub fn aggregate_replicates(
    replicates: &[RawProfile],
    options: &AggregateOptions,
) -> Result<AggregatedProfile, ReplicateError> {
    if replicates.is_empty() {
        return Err(ReplicateError::new("<none>", ProfileError::NoReplicates));
    }

    let mut normalized = Vec::with_capacity(replicates.len());
    let mut longest = 0;
    for raw in replicates {
        let tag = |e: ProfileError| ReplicateError::new(raw.name.clone(), e);
        let trimmed = trim_to_channel(raw, options.edge_policy).map_err(tag)?;
        log::debug!(
            "{}: channel walls at {:.3} and {:.3}",
            raw.name,
            trimmed.edges.start,
            trimmed.edges.stop
        );
        longest = longest.max(trimmed.len());
        normalized.push(normalize(&trimmed).map_err(tag)?);
    }

    let num_points = options.num_points.unwrap_or(longest);
    let lattice = Lattice::new(num_points)
        .ok_or_else(|| ReplicateError::new("<lattice>", ProfileError::EmptyLattice))?;
    log::debug!(
        "combining {} replicates on a {num_points}-point lattice",
        replicates.len()
    );

    let mut resampled = Vec::with_capacity(replicates.len());
    for (raw, norm) in replicates.iter().zip(&normalized) {
        let intensity = lattice
            .points()
            .iter()
            .map(|&x| linear_interpolate(&norm.position, &norm.intensity, x))
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| ReplicateError::new(raw.name.clone(), e))?;
        resampled.push(ResampledReplicate {
            name: raw.name.clone(),
            intensity,
        });
    }

    let mut intensity = pointwise_median(&resampled, num_points);

    if options.smoothing {
        let degree = options.smoothing_degree.unwrap_or(num_points / 100);
        intensity = triangular_smooth(&intensity, degree)
            .map_err(|e| ReplicateError::new("<median>", e))?;
    }

    Ok(AggregatedProfile {
        position: lattice.into_points(),
        intensity,
        num_points,
        replicates: resampled,
    })
}

/// Median across replicates at each lattice index.
fn pointwise_median(replicates: &[ResampledReplicate], num_points: usize) -> Vec<f64> {
    let mut column = Vec::with_capacity(replicates.len());
    (0..num_points)
        .map(|n| {
            column.clear();
            column.extend(replicates.iter().map(|r| r.intensity[n]));
            median(&mut column)
        })
        .collect()
}

/// Median of a non-empty slice; even lengths average the two middle values.
pub fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Bright channel between two dark walls, with a falling ramp inside.
    fn walled_ramp(name: &str, shift: f64) -> RawProfile {
        let position: Vec<f64> = (0..12).map(|i| i as f64 + shift).collect();
        let intensity = vec![
            90.0, 10.0, 200.0, 180.0, 160.0, 140.0, 120.0, 100.0, 80.0, 60.0, 5.0, 90.0,
        ];
        RawProfile::new(name, position, intensity).unwrap()
    }

    #[test]
    fn median_of_odd_and_even() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&mut [7.0]), 7.0);
    }

    #[test]
    fn lattice_defaults_to_longest_trimmed_replicate() {
        let mut short = walled_ramp("short", 0.0);
        // Move the second wall inwards: trimmed length 8 instead of 10.
        short.intensity[10] = 50.0;
        short.intensity[8] = 1.0;
        let reps = [walled_ramp("a", 0.0), short];
        let agg = aggregate_replicates(&reps, &AggregateOptions::default()).unwrap();
        assert_eq!(agg.num_points, 10);
        assert_eq!(agg.position.len(), 10);
        assert_eq!(agg.intensity.len(), 10);
        assert_relative_eq!(agg.position[1], 0.1);
    }

    #[test]
    fn single_replicate_equals_plain_resampling() {
        let rep = walled_ramp("only", 0.0);
        let options = AggregateOptions {
            num_points: Some(7),
            ..Default::default()
        };
        let agg = aggregate_replicates(std::slice::from_ref(&rep), &options).unwrap();

        let trimmed = trim_to_channel(&rep, EdgePolicy::HalfMinimum).unwrap();
        let norm = normalize(&trimmed).unwrap();
        let lattice = Lattice::new(7).unwrap();
        for (x, y) in lattice.points().iter().zip(&agg.intensity) {
            let expected = linear_interpolate(&norm.position, &norm.intensity, *x).unwrap();
            assert_relative_eq!(*y, expected);
        }
        assert_eq!(agg.replicates.len(), 1);
        assert_eq!(agg.replicates[0].intensity, agg.intensity);
    }

    #[test]
    fn median_suppresses_single_outlier() {
        let a = walled_ramp("a", 0.0);
        let b = walled_ramp("b", 3.5);
        let mut c = walled_ramp("c", -1.25);
        // Spike on the sample that lands exactly on lattice point 4 (x = 4/9).
        c.intensity[5] = 5000.0;

        let options = AggregateOptions {
            num_points: Some(9),
            ..Default::default()
        };
        let clean = aggregate_replicates(&[a.clone(), b.clone()], &options).unwrap();
        let agg = aggregate_replicates(&[a, b, c], &options).unwrap();

        assert_relative_eq!(agg.replicates[2].intensity[4], 5000.0);
        // Shifted copies agree once normalised, so the clean value is
        // every non-outlier replicate's value at that point.
        assert_relative_eq!(agg.intensity[4], clean.intensity[4]);
        assert_relative_eq!(agg.intensity[4], 140.0);
        let mean: f64 = agg.replicates.iter().map(|r| r.intensity[4]).sum::<f64>() / 3.0;
        assert!(mean > 1000.0);
    }

    #[test]
    fn explicit_lattice_wider_than_data_still_resamples() {
        let options = AggregateOptions {
            num_points: Some(40),
            ..Default::default()
        };
        let agg = aggregate_replicates(&[walled_ramp("a", 0.0)], &options).unwrap();
        assert_eq!(agg.intensity.len(), 40);
        assert!(agg.intensity.iter().all(|&v| (5.0..=200.0).contains(&v)));
    }

    #[test]
    fn smoothing_keeps_length() {
        let options = AggregateOptions {
            num_points: Some(30),
            smoothing: true,
            smoothing_degree: Some(2),
            ..Default::default()
        };
        let agg = aggregate_replicates(&[walled_ramp("a", 0.0)], &options).unwrap();
        assert_eq!(agg.intensity.len(), 30);
    }

    #[test]
    fn errors_name_the_replicate() {
        let bad = RawProfile::new("5mm_9.hst", vec![0.0, 1.0, 2.0, 3.0], vec![0.0; 4]).unwrap();
        let err =
            aggregate_replicates(&[walled_ramp("a", 0.0), bad], &AggregateOptions::default())
                .unwrap_err();
        assert_eq!(err.replicate, "5mm_9.hst");
        assert!(matches!(err.source, ProfileError::EmptyProfile));
    }

    #[test]
    fn resampling_failure_names_the_replicate() {
        // Walls at 2.0 and 4.0. Trimmed positions are [2, 0, 3, 4], which
        // normalise to [0.5, 0, 0.75, 1]: lattice point 0 has no bracket.
        let unordered = RawProfile::new(
            "5mm_2.hst",
            vec![0.0, 2.0, 1.0, 3.0, 4.0, 5.0],
            vec![9.0, 1.0, 5.0, 6.0, 1.0, 9.0],
        )
        .unwrap();
        let err = aggregate_replicates(
            &[walled_ramp("5mm_1.hst", 0.0), unordered],
            &AggregateOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.replicate, "5mm_2.hst");
        assert!(matches!(err.source, ProfileError::OutOfRange { .. }));
    }

    #[test]
    fn smoothing_window_wider_than_curve_fails() {
        let options = AggregateOptions {
            smoothing: true,
            smoothing_degree: Some(5),
            ..Default::default()
        };
        let err = aggregate_replicates(&[walled_ramp("a", 0.0)], &options).unwrap_err();
        assert_eq!(err.replicate, "<median>");
        assert!(matches!(
            err.source,
            ProfileError::SmoothingWindowTooWide { len: 10, degree: 5 }
        ));
    }

    #[test]
    fn empty_group_and_zero_lattice_fail() {
        let err = aggregate_replicates(&[], &AggregateOptions::default()).unwrap_err();
        assert!(matches!(err.source, ProfileError::NoReplicates));

        let options = AggregateOptions {
            num_points: Some(0),
            ..Default::default()
        };
        let err = aggregate_replicates(&[walled_ramp("a", 0.0)], &options).unwrap_err();
        assert!(matches!(err.source, ProfileError::EmptyLattice));
    }
}
