//! Kamera-Parameter, wie sie die externe Render-Engine liefert und konsumiert.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Pinhole-Kamera (Perspektiv-Projektion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinholeCamera {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertikales Sichtfeld in Grad.
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            field_of_view: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Nativer Parameterblock des Orthographie-Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrthoParams {
    /// Referenz-Koordinatensystem des Controllers.
    pub reference_coord_sys: Mat4,
    /// Sichtbare Höhe in Welt-Einheiten.
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoParams {
    fn default() -> Self {
        Self {
            reference_coord_sys: Mat4::IDENTITY,
            field_of_view: 100.0,
            near: -0.1,
            far: 1000.0,
        }
    }
}

/// Kind-spezifische Kamera-Parameter für Bookmark-Capture/-Restore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CameraState {
    Pinhole(PinholeCamera),
    Orthographic(OrthoParams),
}

impl Default for CameraState {
    fn default() -> Self {
        Self::Pinhole(PinholeCamera::default())
    }
}
