//! Render-Sync: pusht abgeleiteten Store-Zustand in die externe Engine.
//!
//! Wird vom Controller genau einmal pro Intent- bzw. Command-Batch gerufen,
//! nachdem alle Store-Mutationen abgeschlossen sind — der Renderer sieht
//! dadurch nie einen Teilzustand einer logischen Operation.

use super::state::ExplorerState;
use crate::core::{GroupStatus, IdSet};
use crate::engine::HighlightTarget;

/// Leitet die Renderer-Puffer aus dem aktuellen Zustand ab und pusht sie.
/// Ohne geladene Engine ein No-op.
pub fn push(state: &ExplorerState) {
    let Some(engine) = state.globals.engine.as_ref() else {
        return;
    };

    let highlighted = state.highlighted.get();
    engine.set_highlight(
        HighlightTarget::Primary,
        &highlighted.ids.to_vec(),
        highlighted.color,
    );

    let collections = state.highlight_collections.get();
    for (key, entry) in collections.iter() {
        engine.set_highlight(
            HighlightTarget::Collection(key),
            &entry.ids.to_vec(),
            entry.color,
        );
    }

    // Gruppen mit Status Selected bekommen eigene Overlay-Puffer; Gruppen
    // mit Status Hidden erweitern die Hidden-Menge.
    let groups = state.groups.get();
    let mut hidden: IdSet = state.hidden.get().ids.clone();
    let mut overlay_index = 0usize;
    for group in groups.groups() {
        match group.status {
            GroupStatus::Selected => {
                engine.set_highlight(
                    HighlightTarget::Group(overlay_index),
                    &group.ids.to_vec(),
                    group.color,
                );
                overlay_index += 1;
            }
            GroupStatus::Hidden => hidden.add(group.ids.iter()),
            GroupStatus::None | GroupStatus::Frozen => {}
        }
    }
    engine.set_hidden(&hidden.to_vec());

    let basket = state.selection_basket.get();
    engine.set_basket(&basket.ids.to_vec(), basket.mode);
    engine.set_default_visibility(state.view.default_visibility);
}
