//! Explizit vom Rendering ausgeschlossene Objekte.

use super::store::{Reducer, Store};
use crate::core::{IdSet, ObjectId};

/// Zustand der Hidden-Menge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HiddenState {
    pub ids: IdSet,
}

/// Actions auf der Hidden-Menge.
#[derive(Debug, Clone)]
pub enum HiddenAction {
    Add { ids: Vec<ObjectId> },
    Remove { ids: Vec<ObjectId> },
    SetIds { ids: Vec<ObjectId> },
}

impl Reducer for HiddenState {
    type Action = HiddenAction;

    fn reduce(&self, action: HiddenAction) -> Self {
        let mut next = self.clone();
        match action {
            HiddenAction::Add { ids } => next.ids.add(ids),
            HiddenAction::Remove { ids } => next.ids.remove(ids),
            HiddenAction::SetIds { ids } => next.ids.set(ids),
        }
        next
    }
}

/// Store der Hidden-Menge.
pub type HiddenStore = Store<HiddenState>;
