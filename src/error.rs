use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Core error taxonomy
// ---------------------------------------------------------------------------

/// Failures raised while reading, trimming, normalising or resampling a
/// single cross-section profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Nothing non-zero survived edge trimming.
    #[error("profile is empty after trimming to the channel edges")]
    EmptyProfile,

    /// All trimmed positions coincide, so there is no axis to rescale.
    #[error("profile spans a zero-width position range ({value})")]
    DegenerateRange { value: f64 },

    /// Interpolation target not bracketed by the profile's positions.
    #[error("position {target} lies outside the profile range [{min}, {max})")]
    OutOfRange { target: f64, min: f64, max: f64 },

    /// First line matched neither the PMCapture marker nor ImageJ data.
    #[error("unrecognized profile format (first line: {first_line:?})")]
    UnrecognizedFormat { first_line: String },

    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Position and intensity columns differ in length.
    #[error("{positions} positions but {intensities} intensities")]
    LengthMismatch {
        positions: usize,
        intensities: usize,
    },

    /// Curve too short to hold one triangle window of the requested degree.
    #[error("{len} points is too short to smooth with degree {degree}")]
    SmoothingWindowTooWide { len: usize, degree: usize },

    #[error("no replicate profiles to combine")]
    NoReplicates,

    #[error("lattice must contain at least one point")]
    EmptyLattice,

    /// The two selected points share an x coordinate.
    #[error("selected points share x = {x}; gradient is undefined")]
    DegenerateSelection { x: f64 },

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A [`ProfileError`] tagged with the replicate it came from.
#[derive(Debug, thiserror::Error)]
#[error("replicate {replicate}: {source}")]
pub struct ReplicateError {
    pub replicate: String,
    #[source]
    pub source: ProfileError,
}

impl ReplicateError {
    pub fn new(replicate: impl Into<String>, source: ProfileError) -> Self {
        Self {
            replicate: replicate.into(),
            source,
        }
    }
}
