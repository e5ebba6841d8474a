//! Intent→Command-Mapping.
//!
//! Hier entsteht die Store-übergreifende Konsistenz: ein User-Intent wird
//! in die vollständige Command-Folge übersetzt, die alle betroffenen Stores
//! abdeckt. Der Controller führt die Folge aus, bevor der Renderer den
//! nächsten Sync sieht — Zwischenstände sind damit nie beobachtbar.

use super::events::{ExplorerCommand, ExplorerIntent};
use super::state::{ExplorerState, HighlightCollection};

#[cfg(test)]
mod tests;

/// Übersetzt einen Intent in die auszuführende Command-Folge.
pub fn map_intent_to_commands(
    state: &ExplorerState,
    intent: ExplorerIntent,
) -> Vec<ExplorerCommand> {
    match intent {
        ExplorerIntent::ObjectPicked { id, additive } => {
            let highlighted = state.highlighted.get();
            if additive && highlighted.ids.has(id) {
                // Additiver Klick auf bereits selektiertes Objekt: abwählen.
                let mut commands = vec![ExplorerCommand::HighlightRemove { ids: vec![id] }];
                if state.view.main_object == Some(id) {
                    commands.push(ExplorerCommand::SetMainObject { id: None });
                }
                commands
            } else if additive {
                vec![
                    ExplorerCommand::HighlightAdd { ids: vec![id] },
                    ExplorerCommand::SetMainObject { id: Some(id) },
                ]
            } else {
                vec![
                    ExplorerCommand::SetHighlightIds { ids: vec![id] },
                    ExplorerCommand::SetMainObject { id: Some(id) },
                ]
            }
        }

        ExplorerIntent::HideSelectedRequested => {
            // Verstecken berührt vier Stores in einer logischen Operation:
            // Hidden, Highlighted, alle Collections, Basket — plus Main-Objekt.
            let mut ids = state.highlighted.get().ids.to_vec();
            if let Some(main) = state.view.main_object {
                if !ids.contains(&main) {
                    ids.push(main);
                }
            }
            if ids.is_empty() {
                return Vec::new();
            }

            let mut commands = vec![
                ExplorerCommand::HideIds { ids: ids.clone() },
                ExplorerCommand::SetHighlightIds { ids: Vec::new() },
            ];
            for collection in HighlightCollection::ALL {
                commands.push(ExplorerCommand::CollectionRemove {
                    collection,
                    ids: ids.clone(),
                });
            }
            commands.push(ExplorerCommand::BasketRemove { ids });
            commands.push(ExplorerCommand::SetMainObject { id: None });
            commands
        }

        ExplorerIntent::ClearSelectionRequested => vec![
            ExplorerCommand::SetHighlightIds { ids: Vec::new() },
            ExplorerCommand::CollectionsClear,
            ExplorerCommand::SetMainObject { id: None },
        ],

        ExplorerIntent::AddSelectedToBasketRequested => {
            let ids = state.highlighted.get().ids.to_vec();
            if ids.is_empty() {
                Vec::new()
            } else {
                vec![ExplorerCommand::BasketAdd { ids }]
            }
        }

        ExplorerIntent::FormLifecycleChanged { from, to, ids } => {
            vec![ExplorerCommand::CollectionMove { from, to, ids }]
        }

        ExplorerIntent::GroupSelectedRequested => vec![ExplorerCommand::GroupSelected],

        ExplorerIntent::BookmarkSelected { bookmark } => {
            vec![ExplorerCommand::ApplyBookmark { bookmark }]
        }
    }
}
