//! Bookmark-Restore: spielt einen Schnappschuss in alle Stores zurück.
//!
//! Die Schritte laufen best-effort sequenziell (kein Rollback): schlägt ein
//! späterer Schritt fehl, bleiben frühere Store-Mutationen bestehen. Das
//! entspricht bewusst dem Verhalten des ursprünglichen Web-Clients.
//! Fehlende optionale Felder bedeuten "auf Default zurücksetzen", nie Fehler.

use super::model::Bookmark;
use crate::app::state::{
    BasketAction, BasketMode, DefaultVisibility, ExplorerState, FollowPathState, GroupsAction,
    HiddenAction, HighlightAction,
};
use crate::core::{ClippingState, GroupStatus, MeasureEntity, ObjectGroup};
use crate::engine::PathDataSource;

/// Wendet ein Bookmark auf den Session-Zustand an.
///
/// Für den Renderer ist die Wiederherstellung erst nach dem anschließenden
/// Render-Sync sichtbar; Zwischenstände der Stores werden nie gepusht.
pub fn select_bookmark(
    state: &mut ExplorerState,
    bookmark: &Bookmark,
    paths: Option<&dyn PathDataSource>,
) -> anyhow::Result<()> {
    // 1. Primäre Selektion aus der "Selected"-Pseudo-Gruppe.
    let selected_ids: Vec<_> = bookmark
        .synthetic_selected()
        .map(|g| g.ids().to_vec())
        .unwrap_or_default();
    state.highlighted.dispatch(HighlightAction::SetIds {
        ids: selected_ids.clone(),
    });

    // 2. Hidden-Menge aus der "Hidden"-Pseudo-Gruppe.
    let hidden_ids = bookmark
        .synthetic_hidden()
        .map(|g| g.ids().to_vec())
        .unwrap_or_default();
    state.hidden.dispatch(HiddenAction::SetIds { ids: hidden_ids });

    // 3. Status-Flags der Custom-Gruppen übernehmen; Reihenfolge folgt dem
    // Bookmark für Gruppen, die in beiden vorkommen.
    let merged = merge_groups(state, bookmark);
    state.groups.dispatch(GroupsAction::Set { groups: merged });

    // 4. Main-Objekt: letzte ID der Selected-Pseudo-Gruppe.
    state.view.main_object = selected_ids.last().copied();

    // 5. Default-Visibility: explizites Feld vor Legacy-`selectedOnly`.
    state.view.default_visibility = bookmark
        .default_visibility
        .or_else(|| {
            bookmark
                .selected_only
                .map(DefaultVisibility::from_legacy_selected_only)
        })
        .unwrap_or_default();

    // 6. Selection-Basket; ohne Block leer im Loose-Modus.
    match &bookmark.selection_basket {
        Some(basket) => {
            state.selection_basket.dispatch(BasketAction::SetIds {
                ids: basket.ids.clone(),
            });
            state
                .selection_basket
                .dispatch(BasketAction::SetMode { mode: basket.mode });
        }
        None => {
            state
                .selection_basket
                .dispatch(BasketAction::SetIds { ids: Vec::new() });
            state.selection_basket.dispatch(BasketAction::SetMode {
                mode: BasketMode::Loose,
            });
        }
    }

    // 7. Mess-Selektion: modern vor Legacy (erste zwei Punkte, negative
    // Platzhalter-IDs), sonst leer.
    state.view.measurement = match (&bookmark.object_measurement, &bookmark.measurement) {
        (Some(entities), _) => entities.clone(),
        (None, Some(points)) => points
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, pos)| MeasureEntity::from_legacy_point(i, *pos))
            .collect(),
        (None, None) => Vec::new(),
    };

    // 8.–10. Engine-seitige Schritte: Clipping, Kamera, Grid.
    if let Some(engine) = state.globals.engine.as_ref() {
        let clipping = ClippingState {
            planes: bookmark.clipping_planes.clone().unwrap_or_default(),
            volume: bookmark.clipping_volume.clone().unwrap_or_default(),
        };
        engine.apply_clipping(&clipping);

        if let Some(ortho) = &bookmark.ortho {
            engine.set_ortho(ortho);
        } else if let Some(camera) = &bookmark.camera {
            engine.fly_to(camera);
        }

        if let Some(grid) = &bookmark.grid {
            engine.apply_grid(grid);
        }
    } else {
        log::debug!("Bookmark-Restore ohne Engine: Kamera/Clipping uebersprungen");
    }

    // 11. Follow-Path: asynchroner Fetch, Fehler werden geloggt und
    // ignoriert; der betroffene Teilzustand bleibt dann leer.
    state.view.follow_path = FollowPathState::default();
    if let Some(block) = &bookmark.follow_path {
        if let Some(paths) = paths {
            match paths.load_curve(block.id) {
                // Invertierter (oder NaN-)Bereich aus der Data-API wird wie
                // ein Fetch-Fehler behandelt, sonst panikt `clamp`.
                Ok(curve) if !(curve.profile_range[0] <= curve.profile_range[1]) => {
                    log::warn!(
                        "Follow-Path {}: ungueltiger Profil-Bereich {:?}",
                        block.id,
                        curve.profile_range
                    );
                }
                Ok(curve) => {
                    state.view.follow_path = FollowPathState {
                        path_id: Some(block.id),
                        profile: block.profile.clamp(
                            curve.profile_range[0],
                            curve.profile_range[1],
                        ),
                        profile_range: Some(curve.profile_range),
                        view_mode: block.view_mode,
                        clipping: block.clipping,
                        current_center: block.current_center,
                    };
                }
                Err(err) => {
                    log::warn!("Follow-Path {} nicht ladbar: {err:#}", block.id);
                }
            }
        } else {
            log::debug!("Follow-Path-Block ohne Datenquelle ignoriert");
        }
    }

    Ok(())
}

/// Merged die aktuelle Gruppenliste mit den Status-Flags des Bookmarks.
fn merge_groups(state: &ExplorerState, bookmark: &Bookmark) -> Vec<ObjectGroup> {
    let current = state.groups.get();
    let mut merged: Vec<ObjectGroup> = Vec::with_capacity(current.groups().len());

    // Zuerst die Gruppen in Bookmark-Reihenfolge, mit übernommenen Flags.
    for entry in bookmark.object_groups.iter().filter(|g| !g.id.is_empty()) {
        if let Some(group) = current.by_id(&entry.id) {
            let mut group = group.clone();
            group.status = if entry.selected {
                GroupStatus::Selected
            } else if entry.hidden {
                GroupStatus::Hidden
            } else {
                GroupStatus::None
            };
            merged.push(group);
        }
    }

    // Dann alle Gruppen ohne Bookmark-Eintrag: bleiben erhalten, Flags
    // werden zurückgesetzt.
    for group in current.groups() {
        if !bookmark
            .object_groups
            .iter()
            .any(|entry| !entry.id.is_empty() && entry.id == group.id)
        {
            let mut group = group.clone();
            group.status = GroupStatus::None;
            merged.push(group);
        }
    }

    merged
}
