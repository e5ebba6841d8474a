//! Application State: per-Concern-Stores plus View-Zustand.
//!
//! Jeder Store ist eine eigenständige State-Machine (purer Reducer +
//! Observer); siehe `store.rs` für den Mechanismus.

pub mod app_state;
pub mod basket;
pub mod collections;
pub mod groups;
pub mod hidden;
pub mod highlight;
pub mod store;
pub mod view;

pub use app_state::{ExplorerGlobals, ExplorerState};
pub use basket::{BasketAction, BasketMode, SelectionBasketState, SelectionBasketStore};
pub use collections::{
    CollectionAction, HighlightCollection, HighlightCollectionsState, HighlightCollectionsStore,
};
pub use groups::{GroupsAction, GroupsState, GroupsStore};
pub use hidden::{HiddenAction, HiddenState, HiddenStore};
pub use highlight::{HighlightAction, HighlightedState, HighlightedStore};
pub use store::{Reducer, Store, StoreReader, Subscriber};
pub use view::{DefaultVisibility, FollowPathState, FollowPathViewMode, ViewState};
