//! Farbtypen und die Konvertierung zwischen Float-Vektoren und 0-255-RGB.
//!
//! Intern rechnet alles in [0,1]-Floats (`VecRGB`/`VecRGBA`); nur die
//! UI-Grenze (Color-Picker) spricht 0-255. `rgb_to_vec`/`vec_to_rgb` sind
//! die einzigen Übergänge zwischen beiden Welten.

use serde::{Deserialize, Serialize};

/// RGB-Farbe, Kanäle als Float in [0,1].
pub type VecRGB = [f32; 3];
/// RGBA-Farbe, Kanäle als Float in [0,1].
pub type VecRGBA = [f32; 4];

/// 0-255-RGB mit Float-Alpha, wie vom Color-Picker geliefert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha bleibt in [0,1] (Picker-Konvention).
    pub a: f32,
}

/// Konvertiert 0-255-RGB in einen [0,1]-Float-Vektor.
pub fn rgb_to_vec(rgb: Rgb) -> VecRGBA {
    [
        f32::from(rgb.r) / 255.0,
        f32::from(rgb.g) / 255.0,
        f32::from(rgb.b) / 255.0,
        rgb.a.clamp(0.0, 1.0),
    ]
}

/// Konvertiert einen [0,1]-Float-Vektor zurück in 0-255-RGB.
pub fn vec_to_rgb(vec: VecRGBA) -> Rgb {
    Rgb {
        r: (vec[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        g: (vec[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        b: (vec[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        a: vec[3].clamp(0.0, 1.0),
    }
}
