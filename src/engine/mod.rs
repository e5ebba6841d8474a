//! Schnittstellen zur externen Render-Engine und zu ihren Daten-Diensten.
//!
//! Die eigentliche Engine (Rendering, Octree-Streaming, Picking) ist kein
//! Teil dieses Crates; der Kern pusht abgeleitete `{ids, color}`-Tupel
//! hinein und liest Kamera-/Clipping-Zustand für das Bookmark-Capture.

mod guid;

pub use guid::resolve_guids;

use crate::app::state::{BasketMode, DefaultVisibility, HighlightCollection};
use crate::core::{
    CameraState, ClippingState, GridSettings, ObjectId, OrthoParams, PinholeCamera, VecRGBA,
};
use glam::Vec3;

/// Ziel-Puffer eines Highlight-Pushes in die Engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTarget {
    /// Primäre Selektion.
    Primary,
    /// Benannte Highlight-Collection.
    Collection(HighlightCollection),
    /// Gruppen-Overlay (Index in der Push-Reihenfolge des Render-Syncs).
    Group(usize),
}

/// Roher Canvas-Inhalt für das Bookmark-Thumbnail.
#[derive(Debug, Clone)]
pub struct CanvasImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, zeilenweise, `width * height * 4` Bytes.
    pub rgba: Vec<u8>,
}

/// Kurvendaten eines Follow-Path-Pfads aus der externen Data-API.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCurve {
    /// Gültiger Profil-Bereich entlang der Kurve.
    pub profile_range: [f32; 2],
    /// Stützpunkte der Kurve.
    pub positions: Vec<Vec3>,
}

/// Handle auf die externe Render-Engine (View + Szene + Canvas).
pub trait RenderEngine: Send + Sync {
    /// Schreibt einen Highlight-Puffer (IDs + Overlay-Farbe).
    fn set_highlight(&self, target: HighlightTarget, ids: &[ObjectId], color: VecRGBA);
    /// Schreibt die Hidden-Menge.
    fn set_hidden(&self, ids: &[ObjectId]);
    /// Schreibt den Selection-Basket.
    fn set_basket(&self, ids: &[ObjectId], mode: BasketMode);
    /// Setzt den Default-Sichtbarkeitsmodus.
    fn set_default_visibility(&self, mode: DefaultVisibility);

    /// Animierter Kameraflug zu Pinhole-Parametern.
    fn fly_to(&self, camera: &PinholeCamera);
    /// Setzt den nativen Parameterblock des Ortho-Controllers.
    fn set_ortho(&self, params: &OrthoParams);
    /// Wendet Clipping-Ebenen und -Volumen an.
    fn apply_clipping(&self, clipping: &ClippingState);
    /// Konfiguriert das Referenz-Raster.
    fn apply_grid(&self, grid: &GridSettings);

    /// Aktuelle Kamera-Parameter (für Capture).
    fn camera(&self) -> CameraState;
    /// Aktueller Clipping-Zustand (für Capture).
    fn clipping(&self) -> ClippingState;
    /// Aktuelle Raster-Konfiguration (für Capture).
    fn grid(&self) -> GridSettings;
    /// Canvas-Inhalt für das Thumbnail; None wenn kein Canvas verfügbar.
    fn canvas_snapshot(&self) -> Option<CanvasImage>;
}

/// Objekt-Datenbank der geladenen Szene (Metadaten-Queries).
pub trait ObjectDb: Send + Sync {
    /// Löst Objekt-IDs zu IFC-GUIDs auf (für BCF-Viewpoints).
    /// Reihenfolge der Ergebnisse entspricht der Eingabe.
    fn guids(&self, ids: &[ObjectId]) -> anyhow::Result<Vec<String>>;
}

/// Quelle für Follow-Path-Kurvendaten.
pub trait PathDataSource: Send + Sync {
    /// Lädt die Kurvendaten eines Pfads. Netzwerk-Call, kann fehlschlagen.
    fn load_curve(&self, path_id: u64) -> anyhow::Result<PathCurve>;
}
