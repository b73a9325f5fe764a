use crate::analysis::gradient::gradient_between;
use crate::color::ColorMap;
use crate::data::model::{AggregatedProfile, Distance, PlotPoint};

// ---------------------------------------------------------------------------
// Picker state
// ---------------------------------------------------------------------------

/// The full state of one point-picking window, independent of rendering.
pub struct PickerState {
    /// Distance group being shown.
    pub distance: Distance,

    /// Median curve plus the resampled replicates behind it.
    pub curve: AggregatedProfile,

    /// Points clicked so far (at most two).
    pub clicks: Vec<PlotPoint>,

    /// Whether replicate curves are drawn behind the median.
    pub show_replicates: bool,

    /// Colour per replicate.
    pub color_map: ColorMap,

    /// Status / hint message shown in the UI.
    pub status_message: Option<String>,
}

impl PickerState {
    pub fn new(distance: Distance, curve: AggregatedProfile) -> Self {
        let color_map = ColorMap::new(curve.replicates.iter().map(|r| r.name.as_str()));
        Self {
            distance,
            curve,
            clicks: Vec::with_capacity(2),
            show_replicates: true,
            color_map,
            status_message: None,
        }
    }

    /// Record a plot click. Returns `false` once two points are already held.
    pub fn record_click(&mut self, point: PlotPoint) -> bool {
        if self.clicks.len() >= 2 {
            self.status_message = Some("Two points already selected – Reset to start over".into());
            return false;
        }
        log::debug!("{}: click at ({:.4}, {:.2})", self.distance, point.x, point.y);
        self.clicks.push(point);
        self.status_message = None;
        true
    }

    /// Discard the current selection.
    pub fn reset(&mut self) {
        self.clicks.clear();
        self.status_message = None;
    }

    /// Both points, once selected.
    pub fn selection(&self) -> Option<[PlotPoint; 2]> {
        match self.clicks.as_slice() {
            [a, b] => Some([*a, *b]),
            _ => None,
        }
    }

    /// Gradient of the current selection, if it defines one.
    pub fn preview_gradient(&self) -> Option<f64> {
        let [a, b] = self.selection()?;
        gradient_between(a, b).ok()
    }

    /// Hint for the next action.
    pub fn prompt(&self) -> &'static str {
        match self.clicks.len() {
            0 => "Click the bottom-left end of the steep section",
            1 => "Click the top-right end of the steep section",
            _ => "Accept, or Reset to pick again",
        }
    }
}
