use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::color::magnitude_color;
use crate::data::aggregate::HistogramBucket;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Geographic scatter map (longitude × latitude)
// ---------------------------------------------------------------------------

/// Render the earthquake map: one point per filtered event, coloured and
/// sized by magnitude.
pub fn quake_map(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    // Colour scale spans the filtered set, like the point sizes.
    let mag_range = state
        .visible_indices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &i| {
            let m = dataset.records[i].magnitude;
            (lo.min(m), hi.max(m))
        });

    Plot::new("quake_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .data_aspect(1.0)
        .height(420.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for &idx in &state.visible_indices {
                let r = &dataset.records[idx];
                let points = Points::new(PlotPoints::from(vec![[r.longitude, r.latitude]]))
                    .color(magnitude_color(r.magnitude, mag_range))
                    .radius(point_radius(r.magnitude, mag_range))
                    .filled(true);
                plot_ui.points(points);
            }
        });
}

/// Scale a magnitude to a marker radius in the 2.5–7.0 pixel band.
fn point_radius(magnitude: f64, range: (f64, f64)) -> f32 {
    let (min, max) = range;
    let t = if max > min {
        ((magnitude - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    2.5 + 4.5 * t as f32
}

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

/// Render one histogram as a bar chart.
pub fn histogram_chart(
    ui: &mut Ui,
    id: &str,
    buckets: &[HistogramBucket],
    color: Color32,
    x_label: &str,
) {
    let bars: Vec<Bar> = buckets
        .iter()
        .map(|b| {
            let center = (b.lo + b.hi) / 2.0;
            Bar::new(center, b.count as f64).width(b.hi - b.lo)
        })
        .collect();

    Plot::new(id)
        .x_axis_label(x_label)
        .y_axis_label("Count")
        .height(220.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color));
        });
}

// ---------------------------------------------------------------------------
// Depth vs magnitude correlation scatter
// ---------------------------------------------------------------------------

/// Render the depth-vs-magnitude scatter over the filtered set.
pub fn correlation_scatter(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let mag_range = state
        .visible_indices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &i| {
            let m = dataset.records[i].magnitude;
            (lo.min(m), hi.max(m))
        });

    Plot::new("depth_magnitude")
        .x_axis_label("Depth (km)")
        .y_axis_label("Magnitude")
        .height(260.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for &idx in &state.visible_indices {
                let r = &dataset.records[idx];
                let points = Points::new(PlotPoints::from(vec![[r.depth_km, r.magnitude]]))
                    .color(magnitude_color(r.magnitude, mag_range))
                    .radius(3.0)
                    .filled(true);
                plot_ui.points(points);
            }
        });
}
