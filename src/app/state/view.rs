//! View-bezogener Zustand: Main-Objekt, Default-Visibility, Follow-Path.

use crate::core::{MeasureEntity, ObjectId};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Globaler Default-Sichtbarkeitsmodus nicht hervorgehobener Objekte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultVisibility {
    /// Alles normal sichtbar.
    #[default]
    Neutral,
    /// Nicht hervorgehobene Objekte halbtransparent.
    SemiTransparent,
    /// Nicht hervorgehobene Objekte unsichtbar.
    Transparent,
}

impl DefaultVisibility {
    /// Ableitung aus dem Legacy-Bookmark-Feld `selectedOnly`.
    pub fn from_legacy_selected_only(selected_only: bool) -> Self {
        if selected_only {
            DefaultVisibility::SemiTransparent
        } else {
            DefaultVisibility::Neutral
        }
    }
}

/// Ansichtsmodus des Follow-Path-Features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FollowPathViewMode {
    #[default]
    Follow,
    CrossSection,
}

/// Zustand des Follow-Path-Features (Kamera folgt einer Kurve).
///
/// Wird beim Bookmark-Restore asynchron aus der externen Data-API befüllt
/// und bleibt bei Fetch-Fehlern leer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FollowPathState {
    /// ID des verfolgten Pfads.
    pub path_id: Option<u64>,
    /// Aktuelle Profil-Position entlang der Kurve.
    pub profile: f32,
    /// Gültiger Profil-Bereich (aus der gefetchten Kurve).
    pub profile_range: Option<[f32; 2]>,
    pub view_mode: FollowPathViewMode,
    /// Clipping entlang des Pfads aktiv?
    pub clipping: bool,
    /// Höhe/Zentrum der aktuellen Profil-Position.
    pub current_center: Option<Vec3>,
}

/// View-Zustand der Session.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Fokussiertes "Main"-Objekt (zuletzt angeklickt).
    pub main_object: Option<ObjectId>,
    pub default_visibility: DefaultVisibility,
    /// Aktuelle Mess-Selektion (leer = keine Messung aktiv).
    pub measurement: Vec<MeasureEntity>,
    pub follow_path: FollowPathState,
}
