//! Serde-Modell des persistierten Bookmark-Dokuments.
//!
//! Die Feldnamen bleiben camelCase-kompatibel zu den vom Web-Client
//! geschriebenen JSON-Dokumenten. Legacy-Felder (`selectedOnly`,
//! `measurement`) bleiben neben ihren neueren Äquivalenten
//! (`defaultVisibility`, `objectMeasurement`) les- und schreibbar.

use crate::app::state::{BasketMode, DefaultVisibility, FollowPathViewMode};
use crate::core::{
    ClippingPlanes, ClippingVolume, GridSettings, MeasureEntity, ObjectId, OrthoParams,
    PinholeCamera,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gruppen-Eintrag im Bookmark: persistierte Gruppe oder Pseudo-Gruppe.
///
/// Die beiden synthetischen Pseudo-Gruppen tragen `id = ""` (reservierter
/// Sentinel): eine mit `selected = true` für die Highlight-Menge plus
/// Main-Objekt, eine mit `hidden = true` für die Hidden-Menge. Beide sind
/// zum Capture-Zeitpunkt disjunkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkGroup {
    pub id: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub hidden: bool,
    /// IDs nur für Gruppen ohne dynamische Such-Definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<ObjectId>>,
}

impl BookmarkGroup {
    /// IDs als Slice, leere Liste wenn keine persistiert wurden.
    pub fn ids(&self) -> &[ObjectId] {
        self.ids.as_deref().unwrap_or_default()
    }
}

/// Selection-Basket-Block im Bookmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkBasket {
    pub ids: Vec<ObjectId>,
    #[serde(default)]
    pub mode: BasketMode,
}

/// Follow-Path-Block im Bookmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkFollowPath {
    /// ID des verfolgten Pfads in der Data-API.
    pub id: u64,
    pub profile: f32,
    #[serde(default)]
    pub view_mode: FollowPathViewMode,
    #[serde(default)]
    pub clipping: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_center: Option<Vec3>,
}

/// Persistierbarer Schnappschuss von Kamera, Clipping, Highlight-/Hidden-/
/// Gruppen-Zustand und Messung.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// PNG-Thumbnail (nominale Höhe 350 px, Seitenverhältnis erhalten).
    /// Die Transport-Kodierung (z.B. Data-URL) ist Sache des Hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<Vec<u8>>,

    /// Persistierte Custom-Gruppen plus die beiden Pseudo-Gruppen.
    #[serde(default)]
    pub object_groups: Vec<BookmarkGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_visibility: Option<DefaultVisibility>,
    /// Legacy-Äquivalent von `defaultVisibility`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_basket: Option<BookmarkBasket>,

    /// Pinhole-Kamera; `ortho` hat beim Restore Vorrang.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<PinholeCamera>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ortho: Option<OrthoParams>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipping_planes: Option<ClippingPlanes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipping_volume: Option<ClippingVolume>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_measurement: Option<Vec<MeasureEntity>>,
    /// Legacy-Messpunkte (nur Positionen).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<Vec<Vec3>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_path: Option<BookmarkFollowPath>,
}

impl Bookmark {
    /// Synthetische "Selected"-Pseudo-Gruppe, falls vorhanden.
    pub fn synthetic_selected(&self) -> Option<&BookmarkGroup> {
        self.object_groups
            .iter()
            .find(|g| g.id.is_empty() && g.selected)
    }

    /// Synthetische "Hidden"-Pseudo-Gruppe, falls vorhanden.
    pub fn synthetic_hidden(&self) -> Option<&BookmarkGroup> {
        self.object_groups
            .iter()
            .find(|g| g.id.is_empty() && g.hidden)
    }
}
