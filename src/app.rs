use eframe::egui::{self, ScrollArea, Ui};

use crate::color;
use crate::state::AppState;
use crate::ui::{panels, plot, summary};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct QuakescopeApp {
    pub state: AppState,
}

impl eframe::App for QuakescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: map, charts, summary ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_view(ui, &self.state);
        });
    }
}

/// The scrollable dashboard body.
fn central_view(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore earthquakes  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Earthquake map");
            plot::quake_map(ui, state);

            ui.separator();
            ui.heading("Top 10 regions by event count");
            summary::top_locations_table(ui, state);

            ui.separator();
            ui.heading("Magnitude and depth distribution");
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].strong("Magnitude");
                plot::histogram_chart(
                    &mut cols[0],
                    "magnitude_histogram",
                    &state.magnitude_histogram,
                    color::MAGNITUDE_BAR,
                    "Magnitude",
                );
                cols[1].strong("Depth");
                plot::histogram_chart(
                    &mut cols[1],
                    "depth_histogram",
                    &state.depth_histogram,
                    color::DEPTH_BAR,
                    "Depth (km)",
                );
            });

            ui.separator();
            ui.heading("Correlation between depth and magnitude");
            plot::correlation_scatter(ui, state);

            ui.separator();
            ui.heading("Overview");
            summary::summary_section(ui, state);
        });
}
