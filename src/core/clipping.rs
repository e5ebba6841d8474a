//! Clipping-Einstellungen (Ebenen und Volumen) der Render-Engine.

use serde::{Deserialize, Serialize};

/// Kombinationsmodus der Clipping-Ebenen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClippingMode {
    /// Schnittmenge der Halbräume.
    #[default]
    Intersection,
    /// Vereinigung der Halbräume.
    Union,
}

/// Clipping-Ebenen als Ebenengleichungen `[nx, ny, nz, d]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClippingPlanes {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub planes: Vec<[f32; 4]>,
}

/// Clipping-Volumen (begrenzter Render-Bereich).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClippingVolume {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mode: ClippingMode,
    #[serde(default)]
    pub planes: Vec<[f32; 4]>,
}

/// Gesamter Clipping-Zustand, wie er im Bookmark landet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClippingState {
    pub planes: ClippingPlanes,
    pub volume: ClippingVolume,
}
