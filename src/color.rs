use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Above this many replicates, neighbouring hues alternate in lightness.
const HUE_CROWDING: usize = 6;

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// Replicate lines sit under the median curve, so saturation falls as the
/// group grows. Large groups alternate light and dark shades so adjacent
/// hues stay apart.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let saturation = (0.85 - 0.03 * n as f32).max(0.45);
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let lightness = if n > HUE_CROWDING && i % 2 == 1 {
                0.40
            } else {
                0.58
            };
            let hsl = Hsl::new(hue, saturation, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: replicate name → Color32
// ---------------------------------------------------------------------------

/// Assigns each replicate of a distance group its own colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        let palette = generate_palette(names.len());
        let mapping = names
            .into_iter()
            .zip(palette)
            .map(|(name, c)| (name.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a replicate.
    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping
            .get(name)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (replicate name → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(name, c)| (name.clone(), *c))
            .collect()
    }
}
