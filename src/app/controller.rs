//! Application Controller für zentrale Event-Verarbeitung.

use super::render_sync;
use super::{ExplorerCommand, ExplorerIntent, ExplorerState};
use crate::bookmark::Bookmark;
use crate::engine::PathDataSource;
use crate::shared::AbortSignal;

/// Orchestriert UI-Events und Store-Mutationen auf dem ExplorerState.
#[derive(Default)]
pub struct ExplorerController {
    /// Follow-Path-Datenquelle für Bookmark-Restores (None = Feature aus).
    paths: Option<Box<dyn PathDataSource>>,
}

impl ExplorerController {
    /// Erstellt einen neuen Controller ohne Follow-Path-Datenquelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hinterlegt die Follow-Path-Datenquelle.
    pub fn with_path_source(paths: Box<dyn PathDataSource>) -> Self {
        Self { paths: Some(paths) }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die gesamte Command-Folge läuft vor dem Render-Sync; der Renderer
    /// beobachtet eine logische Operation nie teilweise.
    pub fn handle_intent(
        &mut self,
        state: &mut ExplorerState,
        intent: ExplorerIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.run_command(state, command)?;
        }
        render_sync::push(state);

        Ok(())
    }

    /// Führt einen einzelnen Command aus und synct anschließend den Renderer.
    pub fn handle_command(
        &mut self,
        state: &mut ExplorerState,
        command: ExplorerCommand,
    ) -> anyhow::Result<()> {
        self.run_command(state, command)?;
        render_sync::push(state);
        Ok(())
    }

    /// Erstellt ein Bookmark aus dem aktuellen Zustand (kein Command, weil
    /// es einen Wert produziert statt Zustand zu mutieren).
    pub fn create_bookmark(
        &self,
        state: &ExplorerState,
        name: impl Into<String>,
        abort: &AbortSignal,
    ) -> anyhow::Result<Option<Bookmark>> {
        crate::bookmark::create_bookmark(state, name, abort)
    }

    fn run_command(
        &mut self,
        state: &mut ExplorerState,
        command: ExplorerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Primäre Highlight-Selektion ===
            ExplorerCommand::HighlightAdd { ids } => handlers::selection::highlight_add(state, ids),
            ExplorerCommand::HighlightRemove { ids } => {
                handlers::selection::highlight_remove(state, ids)
            }
            ExplorerCommand::SetHighlightIds { ids } => {
                handlers::selection::set_highlight_ids(state, ids)
            }
            ExplorerCommand::SetHighlightColor { color } => {
                handlers::selection::set_highlight_color(state, color)
            }

            // === Highlight-Collections ===
            ExplorerCommand::CollectionAdd { collection, ids } => {
                handlers::selection::collection_add(state, collection, ids)
            }
            ExplorerCommand::CollectionRemove { collection, ids } => {
                handlers::selection::collection_remove(state, collection, ids)
            }
            ExplorerCommand::CollectionSetIds { collection, ids } => {
                handlers::selection::collection_set_ids(state, collection, ids)
            }
            ExplorerCommand::CollectionSetColor { collection, color } => {
                handlers::selection::collection_set_color(state, collection, color)
            }
            ExplorerCommand::CollectionMove { from, to, ids } => {
                handlers::selection::collection_move(state, from, to, ids)
            }
            ExplorerCommand::CollectionsClear => handlers::selection::collections_clear(state),

            // === Hidden-Menge ===
            ExplorerCommand::HideIds { ids } => handlers::selection::hide_ids(state, ids),
            ExplorerCommand::ShowIds { ids } => handlers::selection::show_ids(state, ids),
            ExplorerCommand::SetHiddenIds { ids } => handlers::selection::set_hidden_ids(state, ids),

            // === Selection-Basket ===
            ExplorerCommand::BasketAdd { ids } => handlers::selection::basket_add(state, ids),
            ExplorerCommand::BasketRemove { ids } => handlers::selection::basket_remove(state, ids),
            ExplorerCommand::SetBasketIds { ids } => handlers::selection::set_basket_ids(state, ids),
            ExplorerCommand::SetBasketMode { mode } => {
                handlers::selection::set_basket_mode(state, mode)
            }

            // === View ===
            ExplorerCommand::SetMainObject { id } => handlers::view::set_main_object(state, id),
            ExplorerCommand::SetDefaultVisibility { mode } => {
                handlers::view::set_default_visibility(state, mode)
            }
            ExplorerCommand::SetMeasurement { entities } => {
                handlers::view::set_measurement(state, entities)
            }

            // === Objekt-Gruppen ===
            ExplorerCommand::AddGroup { group } => handlers::groups::add(state, group),
            ExplorerCommand::UpdateGroup { id, patch } => {
                handlers::groups::update(state, id, patch)
            }
            ExplorerCommand::DeleteGroup { id } => handlers::groups::delete(state, id),
            ExplorerCommand::SetGroups { groups } => handlers::groups::set(state, groups),
            ExplorerCommand::CopyGroup { id } => handlers::groups::copy(state, id),
            ExplorerCommand::GroupSelected => handlers::groups::group_selected(state),
            ExplorerCommand::ResetGroupsStatus => handlers::groups::reset_status(state),

            // === Bookmarks ===
            ExplorerCommand::ApplyBookmark { bookmark } => {
                handlers::bookmark::apply(state, &bookmark, self.paths.as_deref())?
            }
        }

        Ok(())
    }
}
