//! Selection-Basket: explizite Allow-List sichtbarer Objekte.
//!
//! Wird nur konsultiert, wenn der globale Default-Visibility-Modus das
//! Rendering auf eine Teilmenge einschränkt.

use super::store::{Reducer, Store};
use crate::core::{IdSet, ObjectId};
use serde::{Deserialize, Serialize};

/// Auswertungsmodus des Baskets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasketMode {
    /// Basket-Inhalt plus normale Sichtbarkeitsregeln.
    #[default]
    Loose,
    /// Ausschließlich Basket-Inhalt.
    Strict,
}

/// Zustand des Selection-Baskets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionBasketState {
    pub ids: IdSet,
    pub mode: BasketMode,
}

/// Actions auf dem Selection-Basket.
#[derive(Debug, Clone)]
pub enum BasketAction {
    Add { ids: Vec<ObjectId> },
    Remove { ids: Vec<ObjectId> },
    SetIds { ids: Vec<ObjectId> },
    SetMode { mode: BasketMode },
}

impl Reducer for SelectionBasketState {
    type Action = BasketAction;

    fn reduce(&self, action: BasketAction) -> Self {
        let mut next = self.clone();
        match action {
            BasketAction::Add { ids } => next.ids.add(ids),
            BasketAction::Remove { ids } => next.ids.remove(ids),
            BasketAction::SetIds { ids } => next.ids.set(ids),
            BasketAction::SetMode { mode } => next.mode = mode,
        }
        next
    }
}

/// Store des Selection-Baskets.
pub type SelectionBasketStore = Store<SelectionBasketState>;
