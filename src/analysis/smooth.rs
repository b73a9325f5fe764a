use crate::error::ProfileError;

/// How the smoothed interior is stretched back to the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePadding {
    /// Prepend `lead` copies of the first smoothed value, then repeat the
    /// last smoothed value until the input length is reached. Boundary
    /// values are copies, not filtered samples.
    ClampThenRepeat { lead: usize },
}

impl EdgePadding {
    /// Padding used by [`triangular_smooth`]: `degree + degree / 2` leading copies.
    pub fn for_degree(degree: usize) -> Self {
        EdgePadding::ClampThenRepeat {
            lead: degree + degree / 2,
        }
    }

    pub fn apply(self, core: &[f64], len: usize) -> Vec<f64> {
        let (Some(&first), Some(&last)) = (core.first(), core.last()) else {
            return Vec::new();
        };
        match self {
            EdgePadding::ClampThenRepeat { lead } => {
                let mut out = Vec::with_capacity(len.max(lead + core.len()));
                out.resize(lead, first);
                out.extend_from_slice(core);
                out.resize(len.max(out.len()), last);
                out
            }
        }
    }
}

/// Triangle weights `1, 2, …, degree, degree + 1, degree, …, 1`.
pub fn triangle_weights(degree: usize) -> Vec<f64> {
    (1..=degree + 1)
        .chain((1..=degree).rev())
        .map(|w| w as f64)
        .collect()
}

/// Moving triangular-window average of half-width `degree`.
///
/// Windows start at `degree` and stop `2 * degree` short of the end; the
/// result is padded back to `data.len()` with [`EdgePadding::for_degree`].
/// Input too short to hold one window (`len <= 3 * degree`) is an error.
pub fn triangular_smooth(data: &[f64], degree: usize) -> Result<Vec<f64>, ProfileError> {
    let weights = triangle_weights(degree);
    let total: f64 = weights.iter().sum();

    let end = data.len().saturating_sub(2 * degree);
    if end <= degree {
        return Err(ProfileError::SmoothingWindowTooWide {
            len: data.len(),
            degree,
        });
    }

    let core: Vec<f64> = (degree..end)
        .map(|i| {
            data[i..i + weights.len()]
                .iter()
                .zip(&weights)
                .map(|(v, w)| v * w)
                .sum::<f64>()
                / total
        })
        .collect();

    log::trace!("smoothed {} points with degree {degree}", data.len());
    Ok(EdgePadding::for_degree(degree).apply(&core, data.len()))
}
