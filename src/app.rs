use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use eframe::egui;

use crate::data::model::{AggregatedProfile, Distance, PlotPoint};
use crate::picker::PointPicker;
use crate::state::PickerState;
use crate::ui::panels::{self, BarAction};
use crate::ui::plot;

/// Selection handed back once the window closes.
type Outcome = Rc<RefCell<Option<[PlotPoint; 2]>>>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MixingApp {
    pub state: PickerState,
    outcome: Outcome,
}

impl MixingApp {
    fn new(state: PickerState, outcome: Outcome) -> Self {
        Self { state, outcome }
    }

    fn finish(&mut self, ctx: &egui::Context) {
        *self.outcome.borrow_mut() = self.state.selection();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for MixingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: prompt and actions ----
        let action = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| panels::top_bar(ui, &mut self.state))
            .inner;

        // ---- Left side panel: replicates and selection ----
        egui::SidePanel::left("selection_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::profile_plot(ui, &mut self.state);
        });

        if action == BarAction::Accept {
            self.finish(ctx);
        } else if ctx.input(|i| i.viewport().close_requested()) {
            // Closing the window keeps a complete selection.
            *self.outcome.borrow_mut() = self.state.selection();
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive picker
// ---------------------------------------------------------------------------

/// Opens one plot window per distance and waits for two clicks.
#[derive(Debug, Default)]
pub struct GuiPicker;

impl PointPicker for GuiPicker {
    fn request_two_points(
        &mut self,
        distance: &Distance,
        curve: &AggregatedProfile,
    ) -> Result<[PlotPoint; 2]> {
        let outcome: Outcome = Rc::new(RefCell::new(None));
        let app = MixingApp::new(
            PickerState::new(distance.clone(), curve.clone()),
            Rc::clone(&outcome),
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 650.0])
                .with_min_inner_size([500.0, 350.0]),
            ..Default::default()
        };

        log::info!("{distance}: waiting for two points");
        eframe::run_native(
            &format!("Mixing gradient – {distance}"),
            options,
            Box::new(|_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow!("plot window for {distance} failed: {e}"))?;

        let selection = outcome.borrow_mut().take();
        selection.with_context(|| {
            format!("plot window for {distance} closed before two points were selected")
        })
    }
}
