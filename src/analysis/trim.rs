use crate::data::model::{ChannelEdges, RawProfile, TrimmedProfile};
use crate::error::ProfileError;

// ---------------------------------------------------------------------------
// Edge detection policy
// ---------------------------------------------------------------------------

/// How the channel walls are located in a raw profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// The walls are the darkest sample in each half of the scan: the first
    /// half is `[0, len / 2)`, the second `[len / 2, len)`. When a minimum
    /// value repeats within a half, its first occurrence wins.
    #[default]
    HalfMinimum,
}

impl EdgePolicy {
    pub fn detect(self, profile: &RawProfile) -> Result<ChannelEdges, ProfileError> {
        match self {
            EdgePolicy::HalfMinimum => half_minimum_edges(profile),
        }
    }
}

fn half_minimum_edges(profile: &RawProfile) -> Result<ChannelEdges, ProfileError> {
    let mid = profile.len() / 2;
    if mid == 0 {
        return Err(ProfileError::EmptyProfile);
    }
    let start = argmin(&profile.intensity[..mid]);
    let stop = mid + argmin(&profile.intensity[mid..]);
    Ok(ChannelEdges {
        start: profile.position[start],
        stop: profile.position[stop],
    })
}

/// Index of the first minimum. Slice must be non-empty.
fn argmin(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0, |best, (i, &v)| if v < values[best] { i } else { best })
}

// ---------------------------------------------------------------------------
// Trimming
// ---------------------------------------------------------------------------

/// Cut a raw profile down to the span between its channel walls.
///
/// Samples whose position falls outside `[start, stop]` are zeroed, then
/// the leading and trailing zero-intensity runs are stripped from both
/// arrays together. Interior zeros are kept.
pub fn trim_to_channel(
    profile: &RawProfile,
    policy: EdgePolicy,
) -> Result<TrimmedProfile, ProfileError> {
    let edges = policy.detect(profile)?;

    let mut position = profile.position.clone();
    let mut intensity = profile.intensity.clone();
    for (p, v) in position.iter_mut().zip(intensity.iter_mut()) {
        if *p < edges.start || *p > edges.stop {
            *p = 0.0;
            *v = 0.0;
        }
    }

    let first = intensity.iter().position(|&v| v != 0.0);
    let last = intensity.iter().rposition(|&v| v != 0.0);
    let (Some(first), Some(last)) = (first, last) else {
        return Err(ProfileError::EmptyProfile);
    };

    log::trace!(
        "{}: {} of {} samples inside the channel",
        profile.name,
        last - first + 1,
        profile.len()
    );

    Ok(TrimmedProfile {
        position: position[first..=last].to_vec(),
        intensity: intensity[first..=last].to_vec(),
        edges,
    })
}
