use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::data::model::PlotPoint;
use crate::state::PickerState;

// ---------------------------------------------------------------------------
// Profile plot (central panel)
// ---------------------------------------------------------------------------

/// Render the aggregated profile and turn plot clicks into selected points.
pub fn profile_plot(ui: &mut Ui, state: &mut PickerState) {
    let curve = &state.curve;

    let response = Plot::new("profile_plot")
        .legend(Legend::default())
        .x_axis_label("Position across channel")
        .y_axis_label("Pixel value")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if state.show_replicates {
                for rep in &curve.replicates {
                    let points: PlotPoints = curve
                        .position
                        .iter()
                        .zip(&rep.intensity)
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .name(&rep.name)
                            .color(state.color_map.color_for(&rep.name))
                            .width(1.0),
                    );
                }
            }

            let median: PlotPoints = curve
                .position
                .iter()
                .zip(&curve.intensity)
                .map(|(&x, &y)| [x, y])
                .collect();
            plot_ui.line(
                Line::new(median)
                    .name("median")
                    .color(Color32::BLACK)
                    .width(2.0),
            );

            if !state.clicks.is_empty() {
                let marks: PlotPoints = state.clicks.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(marks)
                        .name("selection")
                        .color(Color32::RED)
                        .radius(5.0),
                );
            }
            if let Some([a, b]) = state.selection() {
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[a.x, a.y], [b.x, b.y]]))
                        .color(Color32::RED)
                        .width(1.0),
                );
            }
        });

    if response.response.clicked() {
        if let Some(pos) = response.response.interact_pointer_pos() {
            let value = response.transform.value_from_position(pos);
            state.record_click(PlotPoint::new(value.x, value.y));
        }
    }
}
