use crate::app::state::HighlightCollection;
use crate::bookmark::Bookmark;
use crate::core::ObjectId;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Ein Intent kann auf mehrere Commands abbilden; das Intent-Mapping stellt
/// dabei die Store-übergreifende Konsistenz her (z.B. entfernt Verstecken
/// die betroffenen IDs aus Selektion, Collections und Basket).
#[derive(Debug, Clone)]
pub enum ExplorerIntent {
    /// Objekt wurde im Viewport angeklickt (additive = Strg gehalten)
    ObjectPicked { id: ObjectId, additive: bool },
    /// Aktuell selektierte Objekte verstecken
    HideSelectedRequested,
    /// Selektion (primär + Collections + Main-Objekt) aufheben
    ClearSelectionRequested,
    /// Selektierte Objekte in den Basket übernehmen
    AddSelectedToBasketRequested,
    /// Formular-Objekt hat den Lifecycle-Bucket gewechselt; Highlight
    /// wandert flickerfrei mit
    FormLifecycleChanged {
        from: HighlightCollection,
        to: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    /// Ungruppierte selektierte Gruppen einsammeln
    GroupSelectedRequested,
    /// Bookmark wurde in der UI ausgewählt
    BookmarkSelected { bookmark: Bookmark },
}
