use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color scale: magnitude → Color32
// ---------------------------------------------------------------------------

/// Fill colour of the magnitude histogram bars (sandy brown).
pub const MAGNITUDE_BAR: Color32 = Color32::from_rgb(244, 164, 96);

/// Fill colour of the depth histogram bars (sky blue).
pub const DEPTH_BAR: Color32 = Color32::from_rgb(135, 206, 235);

/// Map a magnitude within `range` to a continuous yellow→red scale:
/// the weakest event in range renders yellow, the strongest deep red.
pub fn magnitude_color(magnitude: f64, range: (f64, f64)) -> Color32 {
    let (min, max) = range;
    let t = if max > min {
        (((magnitude - min) / (max - min)).clamp(0.0, 1.0)) as f32
    } else {
        1.0
    };

    // Hue 55° (yellow) down to 0° (red), darkening toward the strong end.
    let hsl = Hsl::new(55.0 * (1.0 - t), 0.9, 0.55 - 0.12 * t);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
