//! Hauptzustand der Explorer-Session.

use super::basket::SelectionBasketStore;
use super::collections::HighlightCollectionsStore;
use super::groups::GroupsStore;
use super::hidden::HiddenStore;
use super::highlight::HighlightedStore;
use super::view::ViewState;
use crate::app::CommandLog;
use crate::engine::RenderEngine;
use std::sync::Arc;

/// Live-Handles auf die externen Kollaborateure der Session.
///
/// Entspricht dem "Globals"-Container: die Render-Engine (View, Szene,
/// Canvas, Objekt-DB) wird hier gehalten und von Handlern konsultiert,
/// wenn abgeleiteter Zustand in den Renderer gepusht wird.
#[derive(Default)]
pub struct ExplorerGlobals {
    /// Engine-Handle (None = Szene noch nicht geladen).
    pub engine: Option<Arc<dyn RenderEngine>>,
}

/// Hauptzustand der Anwendung: die fünf Stores plus View-Zustand.
///
/// Die Stores sind voneinander unabhängig; Konsistenz über Store-Grenzen
/// (z.B. "Verstecken entfernt aus der Selektion") stellen die Intent-
/// Mappings her, nie die Stores selbst.
pub struct ExplorerState {
    pub highlighted: HighlightedStore,
    pub highlight_collections: HighlightCollectionsStore,
    pub hidden: HiddenStore,
    pub selection_basket: SelectionBasketStore,
    pub groups: GroupsStore,
    pub view: ViewState,
    pub globals: ExplorerGlobals,
    /// Verlauf ausgeführter Commands.
    pub command_log: CommandLog,
}

impl ExplorerState {
    /// Erstellt einen neuen, leeren Session-Zustand.
    pub fn new() -> Self {
        Self {
            highlighted: HighlightedStore::default(),
            highlight_collections: HighlightCollectionsStore::default(),
            hidden: HiddenStore::default(),
            selection_basket: SelectionBasketStore::default(),
            groups: GroupsStore::default(),
            view: ViewState::default(),
            globals: ExplorerGlobals::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Setzt alle Stores auf den Zustand eines frischen Szenen-Starts
    /// zurück. Engine-Handle und Command-Log bleiben erhalten.
    pub fn reset_scene(&mut self) {
        self.highlighted = HighlightedStore::default();
        self.highlight_collections = HighlightCollectionsStore::default();
        self.hidden = HiddenStore::default();
        self.selection_basket = SelectionBasketStore::default();
        self.groups = GroupsStore::default();
        self.view = ViewState::default();
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}
