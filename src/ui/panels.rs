use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::PickerState;

/// What the top bar asked the app to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAction {
    None,
    Accept,
}

// ---------------------------------------------------------------------------
// Left side panel – replicates and selection
// ---------------------------------------------------------------------------

/// Render the left panel: replicate legend and the current selection.
pub fn side_panel(ui: &mut Ui, state: &mut PickerState) {
    ui.heading(state.distance.to_string());
    ui.label(format!(
        "{} replicates, {} points",
        state.curve.replicates.len(),
        state.curve.num_points
    ));
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.checkbox(&mut state.show_replicates, "Show replicates");
            if state.show_replicates {
                for (name, colour) in state.color_map.legend_entries() {
                    ui.label(RichText::new(name).color(colour));
                }
            }
            ui.separator();

            ui.strong("Selection");
            if state.clicks.is_empty() {
                ui.label("none");
            }
            for (i, p) in state.clicks.iter().enumerate() {
                ui.label(format!("{}: ({:.4}, {:.2})", i + 1, p.x, p.y));
            }
            if let Some(g) = state.preview_gradient() {
                ui.label(RichText::new(format!("gradient {g:.4}")).strong());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: prompt, Reset and Accept.
pub fn top_bar(ui: &mut Ui, state: &mut PickerState) -> BarAction {
    let mut action = BarAction::None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(state.prompt());

        ui.separator();

        if ui
            .add_enabled(!state.clicks.is_empty(), egui::Button::new("Reset"))
            .clicked()
        {
            state.reset();
        }

        let ready = state.selection().is_some();
        if ui
            .add_enabled(ready, egui::Button::new("Accept"))
            .clicked()
        {
            action = BarAction::Accept;
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    action
}
