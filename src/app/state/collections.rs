//! Benannte Highlight-Collections neben der primären Selektion.
//!
//! Der Schlüssel ist als Enum angelegt, damit weitere Collections ohne
//! Strukturänderung dazukommen können. `Move` verschiebt IDs atomar zwischen zwei
//! Collections: es gibt keinen beobachtbaren Zwischenzustand, in dem eine
//! ID in keiner oder in beiden liegt (ein Commit pro Action).

use super::highlight::HighlightedState;
use super::store::{Reducer, Store};
use crate::core::{ObjectId, VecRGBA};
use crate::shared::options::{
    FORMS_COMPLETED_COLOR_DEFAULT, FORMS_NEW_COLOR_DEFAULT, FORMS_ONGOING_COLOR_DEFAULT,
    SECONDARY_HIGHLIGHT_COLOR_DEFAULT,
};
use std::collections::BTreeMap;

/// Schlüssel einer Highlight-Collection.
///
/// Die Forms-Collections bilden die Lifecycle-Buckets verknüpfter
/// Formular-Objekte ab; wechselt ein Objekt den Bucket, wandert sein
/// Highlight per `Move` flickerfrei mit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HighlightCollection {
    SecondaryHighlight,
    FormsNew,
    FormsOngoing,
    FormsCompleted,
}

impl HighlightCollection {
    /// Alle bekannten Collections.
    pub const ALL: [HighlightCollection; 4] = [
        HighlightCollection::SecondaryHighlight,
        HighlightCollection::FormsNew,
        HighlightCollection::FormsOngoing,
        HighlightCollection::FormsCompleted,
    ];

    fn default_color(self) -> VecRGBA {
        match self {
            HighlightCollection::SecondaryHighlight => SECONDARY_HIGHLIGHT_COLOR_DEFAULT,
            HighlightCollection::FormsNew => FORMS_NEW_COLOR_DEFAULT,
            HighlightCollection::FormsOngoing => FORMS_ONGOING_COLOR_DEFAULT,
            HighlightCollection::FormsCompleted => FORMS_COMPLETED_COLOR_DEFAULT,
        }
    }
}

/// Zustand aller Highlight-Collections.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightCollectionsState {
    collections: BTreeMap<HighlightCollection, HighlightedState>,
}

impl Default for HighlightCollectionsState {
    fn default() -> Self {
        let collections = HighlightCollection::ALL
            .into_iter()
            .map(|key| {
                (
                    key,
                    HighlightedState {
                        ids: Default::default(),
                        color: key.default_color(),
                    },
                )
            })
            .collect();
        Self { collections }
    }
}

impl HighlightCollectionsState {
    /// Zustand einer Collection. Alle Schlüssel sind immer belegt.
    pub fn get(&self, key: HighlightCollection) -> &HighlightedState {
        // Default::default() belegt jeden Enum-Schlüssel.
        &self.collections[&key]
    }

    /// Iteriert über alle Collections.
    pub fn iter(&self) -> impl Iterator<Item = (HighlightCollection, &HighlightedState)> {
        self.collections.iter().map(|(k, v)| (*k, v))
    }

    fn get_mut(&mut self, key: HighlightCollection) -> &mut HighlightedState {
        self.collections.entry(key).or_default()
    }
}

/// Actions auf den Highlight-Collections.
#[derive(Debug, Clone)]
pub enum CollectionAction {
    Add {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    Remove {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    SetIds {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    SetColor {
        collection: HighlightCollection,
        color: VecRGBA,
    },
    /// Ersetzt IDs und Farbe einer Collection in einem Schritt.
    Replace {
        collection: HighlightCollection,
        ids: Vec<ObjectId>,
        color: VecRGBA,
    },
    /// Verschiebt IDs atomar von einer Collection in eine andere;
    /// nicht gelistete IDs bleiben unberührt.
    Move {
        from: HighlightCollection,
        to: HighlightCollection,
        ids: Vec<ObjectId>,
    },
    /// Leert alle ID-Mengen, Farben bleiben erhalten.
    ClearAll,
}

impl Reducer for HighlightCollectionsState {
    type Action = CollectionAction;

    fn reduce(&self, action: CollectionAction) -> Self {
        let mut next = self.clone();
        match action {
            CollectionAction::Add { collection, ids } => next.get_mut(collection).ids.add(ids),
            CollectionAction::Remove { collection, ids } => {
                next.get_mut(collection).ids.remove(ids)
            }
            CollectionAction::SetIds { collection, ids } => next.get_mut(collection).ids.set(ids),
            CollectionAction::SetColor { collection, color } => {
                next.get_mut(collection).color = color
            }
            CollectionAction::Replace {
                collection,
                ids,
                color,
            } => {
                let entry = next.get_mut(collection);
                entry.ids.set(ids);
                entry.color = color;
            }
            CollectionAction::Move { from, to, ids } => {
                next.get_mut(from).ids.remove(ids.iter().copied());
                next.get_mut(to).ids.add(ids);
            }
            CollectionAction::ClearAll => {
                for entry in next.collections.values_mut() {
                    entry.ids.clear();
                }
            }
        }
        next
    }
}

/// Store der Highlight-Collections.
pub type HighlightCollectionsStore = Store<HighlightCollectionsState>;
