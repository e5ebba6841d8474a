//! Bookmark-Capture: konsistenter Schnappschuss über alle Stores.

use super::model::{Bookmark, BookmarkBasket, BookmarkFollowPath, BookmarkGroup};
use super::thumbnail;
use crate::app::state::{DefaultVisibility, ExplorerState};
use crate::core::{CameraState, GroupStatus};
use crate::shared::{AbortSignal, THUMBNAIL_HEIGHT};
use anyhow::Context;

/// Erstellt ein persistierbares Bookmark aus dem aktuellen Session-Zustand.
///
/// Der Schnappschuss ist konsistent, weil alle Store-Snapshots synchron am
/// Anfang gezogen werden. Das Abort-Signal wird vor der Rückgabe geprüft:
/// ein abgebrochenes Capture liefert `Ok(None)` und hat keinerlei Effekt.
pub fn create_bookmark(
    state: &ExplorerState,
    name: impl Into<String>,
    abort: &AbortSignal,
) -> anyhow::Result<Option<Bookmark>> {
    let engine = state
        .globals
        .engine
        .as_ref()
        .context("Bookmark-Capture ohne geladene Engine")?;

    let highlighted = state.highlighted.get();
    let hidden = state.hidden.get();
    let basket = state.selection_basket.get();
    let groups = state.groups.get();

    // Thumbnail ist Best-Effort: ohne Canvas oder bei Encode-Fehlern
    // entsteht ein Bookmark ohne Bild.
    let img = match engine.canvas_snapshot() {
        Some(canvas) => match thumbnail::encode_png_scaled(&canvas, THUMBNAIL_HEIGHT) {
            Ok(png) => Some(png),
            Err(err) => {
                log::warn!("Thumbnail-Erzeugung fehlgeschlagen: {err:#}");
                None
            }
        },
        None => None,
    };

    let (camera, ortho) = match engine.camera() {
        CameraState::Pinhole(pinhole) => (Some(pinhole), None),
        CameraState::Orthographic(params) => (None, Some(params)),
    };
    let clipping = engine.clipping();
    let grid = engine.grid();

    // Persistierte Custom-Gruppen (ohne systemverwaltete); IDs nur für
    // Gruppen ohne dynamische Such-Definition.
    let mut object_groups: Vec<BookmarkGroup> = groups
        .custom_groups()
        .map(|group| BookmarkGroup {
            id: group.id.clone(),
            selected: group.status == GroupStatus::Selected,
            hidden: group.status == GroupStatus::Hidden,
            ids: (!group.has_search()).then(|| group.ids.to_vec()),
        })
        .collect();

    // Synthetische Pseudo-Gruppen (id = ""): Highlight-Menge plus
    // Main-Objekt, und die Hidden-Menge. Zum Capture-Zeitpunkt disjunkt.
    let mut selected_ids = highlighted.ids.to_vec();
    if let Some(main) = state.view.main_object {
        if !highlighted.ids.has(main) {
            selected_ids.push(main);
        }
    }
    object_groups.push(BookmarkGroup {
        id: String::new(),
        selected: true,
        hidden: false,
        ids: Some(selected_ids),
    });
    object_groups.push(BookmarkGroup {
        id: String::new(),
        selected: false,
        hidden: true,
        ids: Some(hidden.ids.to_vec()),
    });

    let measurement = &state.view.measurement;
    let follow = &state.view.follow_path;

    let bookmark = Bookmark {
        name: name.into(),
        description: None,
        img,
        object_groups,
        default_visibility: Some(state.view.default_visibility),
        // Legacy-Feld für alte Clients mitschreiben.
        selected_only: Some(
            state.view.default_visibility != DefaultVisibility::Neutral,
        ),
        selection_basket: Some(BookmarkBasket {
            ids: basket.ids.to_vec(),
            mode: basket.mode,
        }),
        camera,
        ortho,
        clipping_planes: Some(clipping.planes),
        clipping_volume: Some(clipping.volume),
        object_measurement: (!measurement.is_empty()).then(|| measurement.clone()),
        measurement: (!measurement.is_empty())
            .then(|| measurement.iter().map(|e| e.pos).collect()),
        grid: grid.enabled.then_some(grid),
        follow_path: follow.path_id.map(|id| BookmarkFollowPath {
            id,
            profile: follow.profile,
            view_mode: follow.view_mode,
            clipping: follow.clipping,
            current_center: follow.current_center,
        }),
    };

    // Abbruch-Konvention: Prüfung vor dem Commit des Ergebnisses.
    if abort.aborted() {
        log::debug!("Bookmark-Capture '{}' abgebrochen", bookmark.name);
        return Ok(None);
    }
    Ok(Some(bookmark))
}
