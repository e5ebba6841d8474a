//! Handler für Objekt-Gruppen-Commands.

use crate::app::state::{ExplorerState, GroupsAction};
use crate::core::{GroupUpdate, ObjectGroup};

pub fn add(state: &mut ExplorerState, group: ObjectGroup) {
    log::info!("Gruppe '{}' angelegt", group.name);
    state.groups.dispatch(GroupsAction::Add { group });
}

pub fn update(state: &mut ExplorerState, id: String, patch: GroupUpdate) {
    state.groups.dispatch(GroupsAction::Update { id, patch });
}

pub fn delete(state: &mut ExplorerState, id: String) {
    state.groups.dispatch(GroupsAction::Delete { id });
}

pub fn set(state: &mut ExplorerState, groups: Vec<ObjectGroup>) {
    log::info!("Gruppenliste ersetzt ({} Gruppen)", groups.len());
    state.groups.dispatch(GroupsAction::Set { groups });
}

pub fn copy(state: &mut ExplorerState, id: String) {
    state.groups.dispatch(GroupsAction::Copy { id });
}

pub fn group_selected(state: &mut ExplorerState) {
    state.groups.dispatch(GroupsAction::GroupSelected);
}

pub fn reset_status(state: &mut ExplorerState) {
    state.groups.dispatch(GroupsAction::ResetStatus);
}
