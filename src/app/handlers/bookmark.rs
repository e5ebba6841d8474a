//! Handler für Bookmark-Commands.

use crate::app::state::ExplorerState;
use crate::bookmark::{self, Bookmark};
use crate::engine::PathDataSource;

/// Wendet ein Bookmark auf alle Stores an.
///
/// `paths` ist die optionale Follow-Path-Datenquelle; ohne sie wird ein
/// Follow-Path-Block im Bookmark ignoriert (geloggt, kein Fehler).
pub fn apply(
    state: &mut ExplorerState,
    bookmark: &Bookmark,
    paths: Option<&dyn PathDataSource>,
) -> anyhow::Result<()> {
    log::info!("Bookmark '{}' wird angewendet", bookmark.name);
    bookmark::select_bookmark(state, bookmark, paths)
}
