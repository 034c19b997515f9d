use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

/// Mean magnitude above this renders the elevated-severity note.
pub const ELEVATED_MAGNITUDE_THRESHOLD: f64 = 6.5;

// ---------------------------------------------------------------------------
// Top locations table
// ---------------------------------------------------------------------------

/// Render the location frequency table (descending by event count).
pub fn top_locations_table(ui: &mut Ui, state: &AppState) {
    if state.top_locations.is_empty() {
        ui.label("No events to tabulate.");
        return;
    }

    egui::Grid::new("top_locations")
        .striped(true)
        .min_col_width(160.0)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Location");
            ui.strong("Events");
            ui.end_row();

            for (location, count) in &state.top_locations {
                ui.label(location);
                ui.label(count.to_string());
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Textual summary and conditional messaging
// ---------------------------------------------------------------------------

/// Render the overview: scalar stats plus one of three status notes.
pub fn summary_section(ui: &mut Ui, state: &AppState) {
    let stats = &state.summary;
    let criteria = &state.criteria;

    ui.label(format!(
        "Total earthquakes recorded in {} with magnitude ≥ {:.1}: {}",
        criteria.year, criteria.min_magnitude, stats.count
    ));

    match stats.mean_magnitude {
        Some(mean) => {
            ui.label(format!("Mean magnitude of the filtered events: {mean:.2}"));
        }
        None => {
            ui.label("Mean magnitude: n/a");
        }
    }

    match &stats.top_location {
        Some((location, count)) => {
            ui.label(format!(
                "Most affected region: {location} with {count} occurrences"
            ));
        }
        None => {
            ui.label("Most affected region: n/a");
        }
    }

    ui.add_space(6.0);
    status_note(ui, state);
}

/// Zero results is a valid state, shown as a warning rather than an error.
fn status_note(ui: &mut Ui, state: &AppState) {
    let stats = &state.summary;
    if stats.count == 0 {
        ui.label(
            RichText::new("⚠ No earthquakes match these criteria. Try adjusting the filters.")
                .color(Color32::YELLOW),
        );
    } else if stats.mean_magnitude.unwrap_or(0.0) > ELEVATED_MAGNITUDE_THRESHOLD {
        ui.label(
            RichText::new("✔ Elevated magnitudes predominate, indicating more severe events.")
                .color(Color32::LIGHT_GREEN),
        );
    } else {
        ui.label(
            RichText::new("ℹ Most of the events show a moderate magnitude.")
                .color(Color32::LIGHT_BLUE),
        );
    }
}
