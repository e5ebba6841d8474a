use crate::app::state::{BasketMode, DefaultVisibility, HighlightCollection};
use crate::bookmark::Bookmark;
use crate::core::{GroupUpdate, MeasureEntity, ObjectGroup, ObjectId, VecRGBA};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum ExplorerCommand {
    // === Primäre Highlight-Selektion ===
    /// IDs zur Selektion hinzufügen
    HighlightAdd { ids: Vec<ObjectId> },
    /// IDs aus der Selektion entfernen
    HighlightRemove { ids: Vec<ObjectId> },
    /// Selektion vollständig ersetzen
    SetHighlightIds { ids: Vec<ObjectId> },
    /// Overlay-Farbe der Selektion setzen
    SetHighlightColor { color: VecRGBA },

    // === Highlight-Collections ===
    /// IDs zu einer Collection hinzufügen
    CollectionAdd {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    /// IDs aus einer Collection entfernen
    CollectionRemove {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    /// Collection-Inhalt vollständig ersetzen
    CollectionSetIds {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    /// Farbe einer Collection setzen
    CollectionSetColor {
        collection: HighlightCollection,
        color: VecRGBA,
    },
    /// IDs atomar zwischen Collections verschieben
    CollectionMove {
        from: HighlightCollection,
        to: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    /// Alle Collection-Inhalte leeren (Farben bleiben)
    CollectionsClear,

    // === Hidden-Menge ===
    /// IDs verstecken
    HideIds { ids: Vec<ObjectId> },
    /// IDs wieder anzeigen
    ShowIds { ids: Vec<ObjectId> },
    /// Hidden-Menge vollständig ersetzen
    SetHiddenIds { ids: Vec<ObjectId> },

    // === Selection-Basket ===
    /// IDs zum Basket hinzufügen
    BasketAdd { ids: Vec<ObjectId> },
    /// IDs aus dem Basket entfernen
    BasketRemove { ids: Vec<ObjectId> },
    /// Basket-Inhalt vollständig ersetzen
    SetBasketIds { ids: Vec<ObjectId> },
    /// Basket-Auswertungsmodus setzen
    SetBasketMode { mode: BasketMode },

    // === View ===
    /// Fokussiertes Main-Objekt setzen (None = keins)
    SetMainObject { id: Option<ObjectId> },
    /// Default-Sichtbarkeitsmodus setzen
    SetDefaultVisibility { mode: DefaultVisibility },
    /// Mess-Selektion ersetzen (leer = Messung beenden)
    SetMeasurement { entities: Vec<MeasureEntity> },

    // === Objekt-Gruppen ===
    /// Gruppe ans Ende der Liste anhängen
    AddGroup { group: ObjectGroup },
    /// Gruppe patchen (sortiert sie ans Listen-Ende)
    UpdateGroup { id: String, patch: GroupUpdate },
    /// Gruppe löschen
    DeleteGroup { id: String },
    /// Gruppenliste vollständig ersetzen (Szenen-Load)
    SetGroups { groups: Vec<ObjectGroup> },
    /// Gruppe duplizieren (" - COPY N"-Namensschema)
    CopyGroup { id: String },
    /// Ungruppierte selektierte Gruppen unter "Collection N" sammeln
    GroupSelected,
    /// Status aller Gruppen zurücksetzen, temporäre Gruppen verwerfen
    ResetGroupsStatus,

    // === Bookmarks ===
    /// Bookmark auf alle Stores anwenden
    ApplyBookmark { bookmark: Bookmark },
}
