//! Handler für Selektions-, Collection-, Hidden- und Basket-Commands.

use crate::app::state::{
    BasketAction, BasketMode, CollectionAction, ExplorerState, HiddenAction, HighlightAction,
    HighlightCollection,
};
use crate::core::{ObjectId, VecRGBA};

pub fn highlight_add(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.highlighted.dispatch(HighlightAction::Add { ids });
}

pub fn highlight_remove(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.highlighted.dispatch(HighlightAction::Remove { ids });
}

pub fn set_highlight_ids(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.highlighted.dispatch(HighlightAction::SetIds { ids });
}

pub fn set_highlight_color(state: &mut ExplorerState, color: VecRGBA) {
    state
        .highlighted
        .dispatch(HighlightAction::SetColor { color });
}

pub fn collection_add(
    state: &mut ExplorerState,
    collection: HighlightCollection,
    ids: Vec<ObjectId>,
) {
    state
        .highlight_collections
        .dispatch(CollectionAction::Add { collection, ids });
}

pub fn collection_remove(
    state: &mut ExplorerState,
    collection: HighlightCollection,
    ids: Vec<ObjectId>,
) {
    state
        .highlight_collections
        .dispatch(CollectionAction::Remove { collection, ids });
}

pub fn collection_set_ids(
    state: &mut ExplorerState,
    collection: HighlightCollection,
    ids: Vec<ObjectId>,
) {
    state
        .highlight_collections
        .dispatch(CollectionAction::SetIds { collection, ids });
}

pub fn collection_set_color(
    state: &mut ExplorerState,
    collection: HighlightCollection,
    color: VecRGBA,
) {
    state
        .highlight_collections
        .dispatch(CollectionAction::SetColor { collection, color });
}

pub fn collection_move(
    state: &mut ExplorerState,
    from: HighlightCollection,
    to: HighlightCollection,
    ids: Vec<ObjectId>,
) {
    state
        .highlight_collections
        .dispatch(CollectionAction::Move { from, to, ids });
}

pub fn collections_clear(state: &mut ExplorerState) {
    state
        .highlight_collections
        .dispatch(CollectionAction::ClearAll);
}

pub fn hide_ids(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    log::debug!("{} Objekte versteckt", ids.len());
    state.hidden.dispatch(HiddenAction::Add { ids });
}

pub fn show_ids(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.hidden.dispatch(HiddenAction::Remove { ids });
}

pub fn set_hidden_ids(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.hidden.dispatch(HiddenAction::SetIds { ids });
}

pub fn basket_add(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.selection_basket.dispatch(BasketAction::Add { ids });
}

pub fn basket_remove(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.selection_basket.dispatch(BasketAction::Remove { ids });
}

pub fn set_basket_ids(state: &mut ExplorerState, ids: Vec<ObjectId>) {
    state.selection_basket.dispatch(BasketAction::SetIds { ids });
}

pub fn set_basket_mode(state: &mut ExplorerState, mode: BasketMode) {
    state
        .selection_basket
        .dispatch(BasketAction::SetMode { mode });
}
