//! Objekt-Gruppen: benannte, persistierbare Sammlungen von Szene-Objekten.
//!
//! Gruppen werden als Teil des Szenen-Dokuments über die externe Data-API
//! gespeichert; die Serde-Namen bleiben camelCase-kompatibel zu den vom
//! Web-Client geschriebenen Dokumenten.

use super::color::VecRGBA;
use super::id_set::IdSet;
use crate::shared::GROUP_COLOR_DEFAULT;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reserviertes Grouping-Präfix für systemverwaltete Gruppen
/// (z.B. Checklisten-verknüpfte Gruppen). Lesbar wie normale Gruppen,
/// aber von Snapshot- und Duplizier-Operationen ausgeschlossen.
pub const SYSTEM_GROUPING_PREFIX: &str = "__system/";

/// Reserviertes Grouping-Präfix für temporäre Gruppen einer Session.
/// Werden beim Status-Reset vollständig verworfen.
pub const TEMPORARY_GROUPING_PREFIX: &str = "__temp/";

/// Sichtbarkeits-/Selektions-Status einer Gruppe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupStatus {
    #[default]
    None,
    Selected,
    Hidden,
    Frozen,
}

/// Ein Suchmuster, das die Gruppen-Mitgliedschaft dynamisch definiert.
/// Gruppen mit nicht-leerem `search` persistieren ihre `ids` nicht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPattern {
    /// Property-Pfad im Objekt-Metadatenbaum.
    pub property: String,
    /// Gesuchter Wert.
    pub value: String,
    /// Exakter Match statt Substring.
    #[serde(default)]
    pub exact: bool,
}

/// Benannte, persistierbare Objekt-Gruppe.
///
/// `ids` ist nach Zuweisung unveränderlich (Arc): UI-Code erkennt
/// Änderungen über Referenz-Gleichheit, Mutationen laufen deshalb immer
/// über ein `Update` mit frischem Set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectGroup {
    /// UUID der Gruppe. Der leere String ist als Sentinel für die
    /// ephemeren Bookmark-Pseudo-Gruppen reserviert.
    pub id: String,
    pub name: String,
    /// Collection-Label; leer = ungruppiert.
    #[serde(default)]
    pub grouping: String,
    #[serde(default)]
    pub ids: Arc<IdSet>,
    /// Overlay-Farbe; alte Dokumente ohne Farbe erhalten den Gruppen-Default.
    #[serde(default = "default_color")]
    pub color: VecRGBA,
    #[serde(default)]
    pub status: GroupStatus,
    /// Deckkraft in [0,1].
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub search: Vec<SearchPattern>,
    #[serde(default)]
    pub include_descendants: bool,
}

fn default_opacity() -> f32 {
    1.0
}

fn default_color() -> VecRGBA {
    GROUP_COLOR_DEFAULT
}

impl ObjectGroup {
    /// Erstellt eine neue, leere Gruppe mit frischer UUID.
    pub fn new(name: impl Into<String>, color: VecRGBA) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            grouping: String::new(),
            ids: Arc::new(IdSet::new()),
            color,
            status: GroupStatus::None,
            opacity: 1.0,
            search: Vec::new(),
            include_descendants: false,
        }
    }

    /// Systemverwaltete Gruppe (reserviertes Grouping-Präfix)?
    pub fn is_system_managed(&self) -> bool {
        self.grouping.starts_with(SYSTEM_GROUPING_PREFIX)
    }

    /// Temporäre Session-Gruppe (wird beim Reset verworfen)?
    pub fn is_temporary(&self) -> bool {
        self.grouping.starts_with(TEMPORARY_GROUPING_PREFIX)
    }

    /// `true` wenn die Mitgliedschaft dynamisch über Suchmuster definiert ist.
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }
}

/// Partielles Update einer Gruppe; `None`-Felder bleiben unberührt.
#[derive(Debug, Clone, Default)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub grouping: Option<String>,
    pub ids: Option<Arc<IdSet>>,
    pub color: Option<VecRGBA>,
    pub status: Option<GroupStatus>,
    pub opacity: Option<f32>,
    pub search: Option<Vec<SearchPattern>>,
    pub include_descendants: Option<bool>,
}

impl GroupUpdate {
    /// Update, das nur den Status setzt.
    pub fn status(status: GroupStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
