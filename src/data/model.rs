use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

// ---------------------------------------------------------------------------
// Profiles at successive stages of the pipeline
// ---------------------------------------------------------------------------

/// One replicate cross-section exactly as read from disk.
///
/// Pairs are kept in file order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProfile {
    /// Label used in error messages (usually the file name).
    pub name: String,
    /// Physical or pixel coordinate across the channel.
    pub position: Vec<f64>,
    /// Grey value at each position – same length as `position`.
    pub intensity: Vec<f64>,
}

impl RawProfile {
    pub fn new(
        name: impl Into<String>,
        position: Vec<f64>,
        intensity: Vec<f64>,
    ) -> Result<Self, ProfileError> {
        if position.len() != intensity.len() {
            return Err(ProfileError::LengthMismatch {
                positions: position.len(),
                intensities: intensity.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            position,
            intensity,
        })
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }
}

/// The part of a [`RawProfile`] lying between the detected channel walls.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedProfile {
    pub position: Vec<f64>,
    pub intensity: Vec<f64>,
    /// Wall positions reported by the edge policy.
    pub edges: ChannelEdges,
}

impl TrimmedProfile {
    pub fn len(&self) -> usize {
        self.position.len()
    }
}

/// Detected channel walls in raw position units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelEdges {
    pub start: f64,
    pub stop: f64,
}

/// A trimmed profile with its position axis rescaled onto `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub position: Vec<f64>,
    pub intensity: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Lattice – shared resampling grid for one distance group
// ---------------------------------------------------------------------------

/// `num_points` evenly spaced values `n / num_points` for `n` in `0..num_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    points: Vec<f64>,
}

impl Lattice {
    /// Returns `None` for an empty lattice.
    pub fn new(num_points: usize) -> Option<Self> {
        if num_points == 0 {
            return None;
        }
        let points = (0..num_points)
            .map(|n| n as f64 / num_points as f64)
            .collect();
        Some(Self { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn into_points(self) -> Vec<f64> {
        self.points
    }
}

// ---------------------------------------------------------------------------
// AggregatedProfile – median of all replicates on the lattice
// ---------------------------------------------------------------------------

/// One replicate resampled onto the group lattice (kept for display).
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledReplicate {
    pub name: String,
    pub intensity: Vec<f64>,
}

/// The representative curve for one distance.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedProfile {
    /// Lattice positions in `[0, 1)`.
    pub position: Vec<f64>,
    /// Per-point median (optionally smoothed) – same length as `position`.
    pub intensity: Vec<f64>,
    /// Number of lattice points used.
    pub num_points: usize,
    pub replicates: Vec<ResampledReplicate>,
}

// ---------------------------------------------------------------------------
// Distance groups and gradient records
// ---------------------------------------------------------------------------

/// Channel distance parsed from a `{distance}mm_{replicate}` file name.
///
/// Keeps the original label for output and sorts numerically.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    pub label: String,
    pub value: f64,
}

impl Distance {
    pub fn parse(label: &str) -> Option<Self> {
        let value = label.parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self {
            label: label.to_string(),
            value,
        })
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.label)
    }
}

/// All replicate files measured at one distance.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceGroup {
    pub distance: Distance,
    /// Replicate files, sorted by replicate id.
    pub files: Vec<PathBuf>,
}

/// A point on a plotted curve, in plot coordinates.
///
/// Deserializes from an `[x, y]` pair, the form used by recorded clicks.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for PlotPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Gradient of the steep mixing region at one distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientRecord {
    pub distance: f64,
    pub gradient: f64,
}
