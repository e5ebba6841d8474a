//! Handler für View-Commands: Main-Objekt, Default-Visibility, Messung.

use crate::app::state::{DefaultVisibility, ExplorerState};
use crate::core::{MeasureEntity, ObjectId};

pub fn set_main_object(state: &mut ExplorerState, id: Option<ObjectId>) {
    state.view.main_object = id;
}

pub fn set_default_visibility(state: &mut ExplorerState, mode: DefaultVisibility) {
    state.view.default_visibility = mode;
}

pub fn set_measurement(state: &mut ExplorerState, entities: Vec<MeasureEntity>) {
    state.view.measurement = entities;
}
