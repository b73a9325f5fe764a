use std::path::Path;

use crate::error::ProfileError;

use super::model::RawProfile;

/// First line written by the fluorescence microscope capture software.
pub const PMCAPTURE_MARKER: &str = "# PMCapture Pro Profile Data";

// ---------------------------------------------------------------------------
// Format detection
// ---------------------------------------------------------------------------

/// The two tabular layouts a cross-section file can come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// Fluorescence microscope export: position/intensity in columns 3 and 4.
    PmCapture,
    /// ImageJ line profile: position/intensity in columns 0 and 1.
    ImageJ,
}

impl ProfileFormat {
    /// Zero-based (position, intensity) column indices.
    pub fn columns(self) -> (usize, usize) {
        match self {
            ProfileFormat::PmCapture => (3, 4),
            ProfileFormat::ImageJ => (0, 1),
        }
    }

    /// Decide the format from the first line of a file.
    ///
    /// Anything other than the PMCapture marker is ImageJ, provided the line
    /// could plausibly start an ImageJ file: blank, a comment, or a row
    /// whose leading token is numeric.
    pub fn sniff(first_line: Option<&str>) -> Result<Self, ProfileError> {
        let Some(line) = first_line else {
            return Err(ProfileError::UnrecognizedFormat {
                first_line: String::new(),
            });
        };
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if line == PMCAPTURE_MARKER {
            return Ok(ProfileFormat::PmCapture);
        }
        let trimmed = line.trim();
        let numeric_row = trimmed
            .split_whitespace()
            .next()
            .is_some_and(|tok| tok.parse::<f64>().is_ok());
        if trimmed.is_empty() || trimmed.starts_with('#') || numeric_row {
            Ok(ProfileFormat::ImageJ)
        } else {
            Err(ProfileError::UnrecognizedFormat {
                first_line: line.to_string(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Load one replicate profile from disk.
pub fn load_profile(path: &Path) -> Result<RawProfile, ProfileError> {
    let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_profile(&name, &text)
}

/// Parse profile text, sniffing the format from its first line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_profile(name: &str, text: &str) -> Result<RawProfile, ProfileError> {
    let format = ProfileFormat::sniff(text.lines().next())?;
    let (pos_col, val_col) = format.columns();

    let mut position = Vec::new();
    let mut intensity = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let line_no = idx + 1;
        position.push(parse_column(&tokens, pos_col, line_no)?);
        intensity.push(parse_column(&tokens, val_col, line_no)?);
    }

    log::debug!("{name}: {format:?}, {} samples", position.len());
    RawProfile::new(name, position, intensity)
}

fn parse_column(tokens: &[&str], col: usize, line: usize) -> Result<f64, ProfileError> {
    let tok = tokens.get(col).ok_or_else(|| ProfileError::MalformedLine {
        line,
        reason: format!("expected at least {} columns, found {}", col + 1, tokens.len()),
    })?;
    tok.parse::<f64>().map_err(|_| ProfileError::MalformedLine {
        line,
        reason: format!("column {col}: '{tok}' is not a number"),
    })
}
