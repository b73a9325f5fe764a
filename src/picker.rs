use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::{AggregatedProfile, Distance, PlotPoint};

// ---------------------------------------------------------------------------
// Point picking seam
// ---------------------------------------------------------------------------

/// Source of the two points bounding the steep mixing region of a curve.
///
/// Called once per distance with the finished curve; blocks until both
/// points are known. The first point is the bottom-left end of the steep
/// section, the second the top-right end.
pub trait PointPicker {
    fn request_two_points(
        &mut self,
        distance: &Distance,
        curve: &AggregatedProfile,
    ) -> Result<[PlotPoint; 2]>;
}

// ---------------------------------------------------------------------------
// Scripted picker – pre-recorded clicks for headless runs
// ---------------------------------------------------------------------------

/// Serves clicks recorded in a JSON file keyed by distance label:
///
/// ```json
/// { "0": [[0.30, 160.0], [0.70, 60.0]], "5": [[0.25, 150.0], [0.75, 70.0]] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    clicks: BTreeMap<String, [PlotPoint; 2]>,
}

impl ScriptedPicker {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading clicks file {}", path.display()))?;
        let clicks = serde_json::from_str(&text)
            .with_context(|| format!("parsing clicks file {}", path.display()))?;
        Ok(Self { clicks })
    }

    /// Exact label first, then any key with the same numeric value (`5` vs `5.0`).
    fn lookup(&self, distance: &Distance) -> Option<[PlotPoint; 2]> {
        self.clicks.get(&distance.label).copied().or_else(|| {
            self.clicks
                .iter()
                .find(|(k, _)| k.parse::<f64>().ok() == Some(distance.value))
                .map(|(_, v)| *v)
        })
    }
}

impl PointPicker for ScriptedPicker {
    fn request_two_points(
        &mut self,
        distance: &Distance,
        _curve: &AggregatedProfile,
    ) -> Result<[PlotPoint; 2]> {
        self.lookup(distance)
            .with_context(|| format!("no recorded clicks for distance {distance}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn curve() -> AggregatedProfile {
        AggregatedProfile {
            position: vec![0.0, 0.5],
            intensity: vec![1.0, 0.0],
            num_points: 2,
            replicates: Vec::new(),
        }
    }

    #[test]
    fn loads_clicks_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clicks.json");
        fs::write(&path, r#"{ "5": [[0.3, 160.0], [0.7, 60.0]] }"#).unwrap();

        let mut picker = ScriptedPicker::from_file(&path).unwrap();
        let distance = Distance::parse("5").unwrap();
        let [a, b] = picker.request_two_points(&distance, &curve()).unwrap();
        assert_eq!(a, PlotPoint::new(0.3, 160.0));
        assert_eq!(b, PlotPoint::new(0.7, 60.0));
    }

    #[test]
    fn rejects_clicks_that_are_not_xy_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clicks.json");
        fs::write(&path, r#"{ "5": [[0.3, 160.0, 1.0], [0.7, 60.0]] }"#).unwrap();
        let err = ScriptedPicker::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing clicks file"));
    }

    #[test]
    fn matches_numerically_equal_labels() {
        let mut picker = ScriptedPicker::default();
        picker
            .clicks
            .insert("5.0".into(), [PlotPoint::new(0.1, 1.0), PlotPoint::new(0.2, 2.0)]);
        let distance = Distance::parse("5").unwrap();
        assert!(picker.request_two_points(&distance, &curve()).is_ok());
    }

    #[test]
    fn missing_distance_is_an_error() {
        let mut picker = ScriptedPicker::default();
        let distance = Distance::parse("10").unwrap();
        let err = picker.request_two_points(&distance, &curve()).unwrap_err();
        assert!(err.to_string().contains("10 mm"));
    }
}
