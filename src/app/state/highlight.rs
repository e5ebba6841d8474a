//! Primäre Highlight-Selektion: ID-Menge plus Overlay-Farbe.

use super::store::{Reducer, Store};
use crate::core::{IdSet, ObjectId, VecRGBA};
use crate::shared::HIGHLIGHT_COLOR_DEFAULT;

/// Zustand der primären Highlight-Selektion.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedState {
    pub ids: IdSet,
    pub color: VecRGBA,
}

impl Default for HighlightedState {
    fn default() -> Self {
        Self {
            ids: IdSet::new(),
            color: HIGHLIGHT_COLOR_DEFAULT,
        }
    }
}

/// Actions auf der primären Highlight-Selektion.
#[derive(Debug, Clone)]
pub enum HighlightAction {
    Add { ids: Vec<ObjectId> },
    Remove { ids: Vec<ObjectId> },
    SetIds { ids: Vec<ObjectId> },
    SetColor { color: VecRGBA },
    /// Ersetzt IDs und Farbe in einem Schritt.
    Replace { ids: Vec<ObjectId>, color: VecRGBA },
}

impl Reducer for HighlightedState {
    type Action = HighlightAction;

    fn reduce(&self, action: HighlightAction) -> Self {
        let mut next = self.clone();
        match action {
            HighlightAction::Add { ids } => next.ids.add(ids),
            HighlightAction::Remove { ids } => next.ids.remove(ids),
            HighlightAction::SetIds { ids } => next.ids.set(ids),
            HighlightAction::SetColor { color } => next.color = color,
            HighlightAction::Replace { ids, color } => {
                next.ids.set(ids);
                next.color = color;
            }
        }
        next
    }
}

/// Store der primären Highlight-Selektion.
pub type HighlightedStore = Store<HighlightedState>;
