//! Geordnete Liste der Objekt-Gruppen mit Duplizier-/Sammel-Operationen.

use super::store::{Reducer, Store};
use crate::core::{GroupStatus, GroupUpdate, ObjectGroup};

/// Zustand der Objekt-Gruppenliste.
#[derive(Debug, Clone, Default)]
pub struct GroupsState {
    groups: Vec<ObjectGroup>,
}

impl GroupsState {
    /// Alle Gruppen in Listen-Reihenfolge.
    pub fn groups(&self) -> &[ObjectGroup] {
        &self.groups
    }

    /// Gruppe per ID.
    pub fn by_id(&self, id: &str) -> Option<&ObjectGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Nutzer-sichtbare Gruppen (ohne systemverwaltete).
    pub fn custom_groups(&self) -> impl Iterator<Item = &ObjectGroup> {
        self.groups.iter().filter(|g| !g.is_system_managed())
    }
}

/// Actions auf der Gruppenliste.
#[derive(Debug, Clone)]
pub enum GroupsAction {
    /// Hängt eine Gruppe ans Ende der Liste.
    Add { group: ObjectGroup },
    /// Merged das Patch in die passende Gruppe und sortiert sie ans Ende
    /// (zuletzt bearbeitete Gruppen liegen konsistent hinten).
    /// Unbekannte ID: Liste bleibt unverändert.
    Update { id: String, patch: GroupUpdate },
    /// Entfernt die Gruppe mit der ID.
    Delete { id: String },
    /// Ersetzt die Liste vollständig (Szenen-Load, Bookmark-Restore).
    Set { groups: Vec<ObjectGroup> },
    /// Dupliziert eine Gruppe: frische UUID, Name mit " - COPY N"-Suffix
    /// (kleinstes eindeutiges N), leere IDs, Status None.
    /// Systemverwaltete Gruppen werden nicht dupliziert.
    Copy { id: String },
    /// Vergibt an alle ungruppierten Gruppen mit Status Selected das Label
    /// "Collection N" (kleinstes noch unbenutztes N); bereits gruppierte
    /// Gruppen bleiben unberührt.
    GroupSelected,
    /// Setzt den Status aller Gruppen auf None; temporäre Session-Gruppen
    /// werden dabei vollständig verworfen.
    ResetStatus,
}

impl Reducer for GroupsState {
    type Action = GroupsAction;

    fn reduce(&self, action: GroupsAction) -> Self {
        let mut next = self.clone();
        match action {
            GroupsAction::Add { group } => next.groups.push(group),
            GroupsAction::Update { id, patch } => apply_update(&mut next.groups, &id, patch),
            GroupsAction::Delete { id } => next.groups.retain(|g| g.id != id),
            GroupsAction::Set { groups } => next.groups = groups,
            GroupsAction::Copy { id } => copy_group(&mut next.groups, &id),
            GroupsAction::GroupSelected => group_selected(&mut next.groups),
            GroupsAction::ResetStatus => {
                next.groups.retain(|g| !g.is_temporary());
                for group in &mut next.groups {
                    group.status = GroupStatus::None;
                }
            }
        }
        next
    }
}

/// Store der Objekt-Gruppen.
pub type GroupsStore = Store<GroupsState>;

fn apply_update(groups: &mut Vec<ObjectGroup>, id: &str, patch: GroupUpdate) {
    let Some(index) = groups.iter().position(|g| g.id == id) else {
        return;
    };
    let mut group = groups.remove(index);

    if let Some(name) = patch.name {
        group.name = name;
    }
    if let Some(grouping) = patch.grouping {
        group.grouping = grouping;
    }
    if let Some(ids) = patch.ids {
        group.ids = ids;
    }
    if let Some(color) = patch.color {
        group.color = color;
    }
    if let Some(status) = patch.status {
        group.status = status;
    }
    if let Some(opacity) = patch.opacity {
        group.opacity = opacity.clamp(0.0, 1.0);
    }
    if let Some(search) = patch.search {
        group.search = search;
    }
    if let Some(include_descendants) = patch.include_descendants {
        group.include_descendants = include_descendants;
    }

    groups.push(group);
}

/// Basisname ohne bereits vorhandenes " - COPY N"-Suffix.
fn copy_base_name(name: &str) -> &str {
    if let Some(pos) = name.rfind(" - COPY ") {
        let suffix = &name[pos + " - COPY ".len()..];
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return &name[..pos];
        }
    }
    name
}

fn copy_group(groups: &mut Vec<ObjectGroup>, id: &str) {
    let Some(source) = groups.iter().find(|g| g.id == id) else {
        return;
    };
    if source.is_system_managed() {
        log::debug!("Duplizieren systemverwalteter Gruppe '{}' ignoriert", id);
        return;
    }

    let base = copy_base_name(&source.name).to_string();
    let mut n = 1u32;
    let name = loop {
        let candidate = format!("{base} - COPY {n}");
        if !groups.iter().any(|g| g.name == candidate) {
            break candidate;
        }
        n += 1;
    };

    let mut copy = ObjectGroup::new(name, source.color);
    copy.grouping = source.grouping.clone();
    copy.opacity = source.opacity;
    copy.search = source.search.clone();
    copy.include_descendants = source.include_descendants;

    groups.push(copy);
}

fn group_selected(groups: &mut [ObjectGroup]) {
    let mut n = 1u32;
    let label = loop {
        let candidate = format!("Collection {n}");
        if !groups.iter().any(|g| g.grouping == candidate) {
            break candidate;
        }
        n += 1;
    };

    for group in groups
        .iter_mut()
        .filter(|g| g.grouping.is_empty() && g.status == GroupStatus::Selected)
    {
        group.grouping = label.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdSet, TEMPORARY_GROUPING_PREFIX};
    use std::sync::Arc;

    fn group(name: &str) -> ObjectGroup {
        ObjectGroup::new(name, [1.0, 0.0, 0.0, 1.0])
    }

    fn state_of(groups: Vec<ObjectGroup>) -> GroupsState {
        GroupsState::default().reduce(GroupsAction::Set { groups })
    }

    #[test]
    fn test_copy_findet_kleinstes_freies_suffix() {
        let beams = group("Beams");
        let beams_id = beams.id.clone();
        let state = state_of(vec![beams, group("Beams - COPY 1")])
            .reduce(GroupsAction::Copy { id: beams_id });

        assert_eq!(state.groups().len(), 3);
        let copy = state.groups().last().expect("Kopie muss existieren");
        assert_eq!(copy.name, "Beams - COPY 2");
        assert!(copy.ids.is_empty());
        assert_eq!(copy.status, GroupStatus::None);
    }

    #[test]
    fn test_copy_einer_kopie_nutzt_basisnamen() {
        let copy1 = group("Beams - COPY 1");
        let copy1_id = copy1.id.clone();
        let state =
            state_of(vec![group("Beams"), copy1]).reduce(GroupsAction::Copy { id: copy1_id });

        assert_eq!(
            state.groups().last().map(|g| g.name.as_str()),
            Some("Beams - COPY 2")
        );
    }

    #[test]
    fn test_group_selected_nummeriert_nur_ungruppierte() {
        let mut a = group("A");
        a.status = GroupStatus::Selected;
        let mut b = group("B");
        b.status = GroupStatus::Selected;
        let mut c = group("C");
        c.status = GroupStatus::Selected;
        c.grouping = "X".to_string();

        let state = state_of(vec![a, b, c]).reduce(GroupsAction::GroupSelected);

        assert_eq!(state.groups()[0].grouping, "Collection 1");
        assert_eq!(state.groups()[1].grouping, "Collection 1");
        assert_eq!(state.groups()[2].grouping, "X");
    }

    #[test]
    fn test_group_selected_ueberspringt_belegte_nummern() {
        let mut a = group("A");
        a.grouping = "Collection 1".to_string();
        let mut b = group("B");
        b.status = GroupStatus::Selected;

        let state = state_of(vec![a, b]).reduce(GroupsAction::GroupSelected);

        assert_eq!(state.groups()[1].grouping, "Collection 2");
    }

    #[test]
    fn test_update_sortiert_gruppe_ans_ende() {
        let a = group("A");
        let a_id = a.id.clone();
        let state = state_of(vec![a, group("B")]).reduce(GroupsAction::Update {
            id: a_id,
            patch: GroupUpdate::status(GroupStatus::Hidden),
        });

        assert_eq!(state.groups()[0].name, "B");
        assert_eq!(state.groups()[1].name, "A");
        assert_eq!(state.groups()[1].status, GroupStatus::Hidden);
    }

    #[test]
    fn test_update_mit_unbekannter_id_laesst_liste_unveraendert() {
        let state = state_of(vec![group("A")]).reduce(GroupsAction::Update {
            id: "gibt-es-nicht".to_string(),
            patch: GroupUpdate::status(GroupStatus::Selected),
        });

        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.groups()[0].status, GroupStatus::None);
    }

    #[test]
    fn test_update_ersetzt_id_set_als_ganzes() {
        let a = group("A");
        let a_id = a.id.clone();
        let before = state_of(vec![a]);
        let old_ids = before.groups()[0].ids.clone();

        let state = before.reduce(GroupsAction::Update {
            id: a_id,
            patch: GroupUpdate {
                ids: Some(Arc::new(IdSet::from(vec![1, 2, 3]))),
                ..GroupUpdate::default()
            },
        });

        // Referenz-Gleichheit: Konsumenten erkennen die Änderung am Arc.
        assert!(!Arc::ptr_eq(&old_ids, &state.groups()[0].ids));
        assert_eq!(state.groups()[0].ids.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reset_verwirft_temporaere_gruppen() {
        let mut keep = group("Keep");
        keep.status = GroupStatus::Selected;
        let mut temp = group("Temp");
        temp.grouping = format!("{TEMPORARY_GROUPING_PREFIX}forms");

        let state = state_of(vec![keep, temp]).reduce(GroupsAction::ResetStatus);

        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.groups()[0].name, "Keep");
        assert_eq!(state.groups()[0].status, GroupStatus::None);
    }
}
