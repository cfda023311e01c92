use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use reality_check::verdict::Verdict;

// ---------------------------------------------------------------------------
// HSL helpers
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees) to an egui colour.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Hue running from red (0) to green (120) as `fraction` goes 0 → 1.
fn ramp_hue(fraction: f64) -> f32 {
    fraction.clamp(0.0, 1.0) as f32 * 120.0
}

// ---------------------------------------------------------------------------
// Result colours
// ---------------------------------------------------------------------------

/// Banner colour for each verdict, from red (ultra selective) to green.
pub fn verdict_color(verdict: Verdict) -> Color32 {
    let step = match verdict {
        Verdict::UltraSelective => 0.0,
        Verdict::QuiteSelective => 0.33,
        Verdict::Reasonable => 0.66,
        Verdict::PlentyOfOptions => 1.0,
    };
    hsl(ramp_hue(step), 0.70, 0.45)
}

/// Colour for a single factor in the breakdown: the smaller the factor,
/// the redder it is drawn.
pub fn factor_color(factor: f64) -> Color32 {
    hsl(ramp_hue(factor), 0.60, 0.55)
}

/// Fill colour for matching grid cells and the probability bar.
pub fn match_color() -> Color32 {
    hsl(330.0, 0.75, 0.55)
}

/// Fill colour for non-matching grid cells.
pub fn no_match_color() -> Color32 {
    Color32::from_gray(70)
}
