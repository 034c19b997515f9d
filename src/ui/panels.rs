use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: year selection and minimum magnitude.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => Arc::clone(ds),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };
    if dataset.is_empty() {
        ui.label("Dataset contains no events.");
        return;
    }

    // ---- Year selection (one of the dataset's distinct years) ----
    ui.strong("Year");
    for &year in &dataset.years {
        if ui
            .radio(state.criteria.year == year, year.to_string())
            .clicked()
        {
            state.set_year(year);
        }
    }
    ui.separator();

    // ---- Minimum magnitude slider, bounded by the observed range ----
    ui.strong("Minimum magnitude");
    let (mag_min, mag_max) = dataset.magnitude_range;
    let mut min_magnitude = state.criteria.min_magnitude;
    let slider = egui::Slider::new(&mut min_magnitude, mag_min..=mag_max)
        .fixed_decimals(1)
        .text("Mw");
    if ui.add(slider).changed() {
        state.set_min_magnitude(min_magnitude);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} events loaded, {} match the filters",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open earthquake data")
        .add_filter("Supported files", &["parquet", "pq", "csv", "json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_cached(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} events spanning years {:?}",
                    dataset.len(),
                    dataset.years
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
