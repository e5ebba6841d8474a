//! Referenz-Raster (Grid) der Ansicht.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Konfiguration des Referenz-Rasters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    #[serde(default)]
    pub enabled: bool,
    pub origin: Vec3,
    pub axis_x: Vec3,
    pub axis_y: Vec3,
    /// Anzahl Major-Linien je Richtung.
    #[serde(default = "default_major_line_count")]
    pub major_line_count: u32,
}

fn default_major_line_count() -> u32 {
    1001
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            origin: Vec3::ZERO,
            axis_x: Vec3::X,
            axis_y: Vec3::Y,
            major_line_count: default_major_line_count(),
        }
    }
}
