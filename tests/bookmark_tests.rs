//! Integrationstests: Bookmark-Capture und -Restore über den Controller.

mod common;

use common::{init_test_logging, MockEngine, MockPathSource};
use explorer_scene_state::app::state::{
    BasketAction, BasketMode, FollowPathState, HiddenAction, HighlightAction,
};
use explorer_scene_state::bookmark::{BookmarkBasket, BookmarkFollowPath};
use explorer_scene_state::{
    AbortSignal, Bookmark, ClippingState, DefaultVisibility, ExplorerCommand, ExplorerController,
    ExplorerIntent, ExplorerState, GroupStatus, ObjectGroup, PathCurve, PathDataSource,
};
use glam::Vec3;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn state_with_engine(engine: Arc<MockEngine>) -> ExplorerState {
    init_test_logging();
    let mut state = ExplorerState::new();
    state.globals.engine = Some(engine);
    state
}

#[test]
fn test_roundtrip_stellt_selektion_sichtbarkeit_und_basket_wieder_her() {
    let mut source = state_with_engine(Arc::new(MockEngine::new()));
    source.highlighted.dispatch(HighlightAction::SetIds { ids: vec![5] });
    source.hidden.dispatch(HiddenAction::SetIds { ids: vec![2] });
    source.view.main_object = Some(9);
    source.view.default_visibility = DefaultVisibility::SemiTransparent;
    source
        .selection_basket
        .dispatch(BasketAction::SetIds { ids: vec![7] });
    source
        .selection_basket
        .dispatch(BasketAction::SetMode {
            mode: BasketMode::Strict,
        });

    let controller = ExplorerController::new();
    let bookmark = controller
        .create_bookmark(&source, "Runde 1", &AbortSignal::new())
        .unwrap()
        .expect("Capture ohne Abort muss ein Bookmark liefern");

    // Legacy-Feld wird für alte Clients mitgeschrieben.
    assert_eq!(bookmark.selected_only, Some(true));

    // Über das persistierte JSON, wie es die Data-API speichern würde.
    let json = serde_json::to_string(&bookmark).unwrap();
    let bookmark: Bookmark = serde_json::from_str(&json).unwrap();

    let engine = Arc::new(MockEngine::new());
    let mut target = state_with_engine(engine.clone());
    let mut controller = ExplorerController::new();
    controller
        .handle_intent(&mut target, ExplorerIntent::BookmarkSelected { bookmark })
        .unwrap();

    // Main-Objekt hängt als letzte ID an der Selected-Pseudo-Gruppe.
    assert_eq!(target.highlighted.get().ids.to_vec(), vec![5, 9]);
    assert_eq!(target.view.main_object, Some(9));
    assert_eq!(target.hidden.get().ids.to_vec(), vec![2]);
    assert_eq!(target.view.default_visibility, DefaultVisibility::SemiTransparent);

    let basket = target.selection_basket.get();
    assert_eq!(basket.ids.to_vec(), vec![7]);
    assert_eq!(basket.mode, BasketMode::Strict);

    // Engine-seitig: Clipping angewandt, Kameraflug zur Pinhole-Kamera.
    assert!(engine.applied_clipping.lock().unwrap().is_some());
    assert!(engine.flown_to.lock().unwrap().is_some());
    assert!(engine.ortho_set.lock().unwrap().is_none());
}

#[test]
fn test_fehlende_optionale_bloecke_setzen_defaults_statt_zu_fehlen() {
    let engine = Arc::new(MockEngine::new());
    let mut state = state_with_engine(engine.clone());
    state.highlighted.dispatch(HighlightAction::SetIds { ids: vec![1] });
    state
        .selection_basket
        .dispatch(BasketAction::SetIds { ids: vec![8] });

    let bookmark = Bookmark {
        name: "Kahl".into(),
        ..Bookmark::default()
    };

    let mut controller = ExplorerController::new();
    controller
        .handle_intent(&mut state, ExplorerIntent::BookmarkSelected { bookmark })
        .unwrap();

    // Fehlende Felder heißen "Default", nie Fehler.
    assert!(state.highlighted.get().ids.is_empty());
    assert!(state.hidden.get().ids.is_empty());
    assert!(state.selection_basket.get().ids.is_empty());
    assert_eq!(state.selection_basket.get().mode, BasketMode::Loose);
    assert_eq!(state.view.default_visibility, DefaultVisibility::Neutral);
    assert_eq!(
        *engine.applied_clipping.lock().unwrap(),
        Some(ClippingState::default())
    );
}

#[test]
fn test_legacy_felder_werden_abgeleitet() {
    init_test_logging();
    let json = r#"{
        "name": "Alt",
        "selectedOnly": true,
        "measurement": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]
    }"#;
    let bookmark: Bookmark = serde_json::from_str(json).unwrap();

    let mut state = ExplorerState::new();
    let mut controller = ExplorerController::new();
    controller
        .handle_intent(&mut state, ExplorerIntent::BookmarkSelected { bookmark })
        .unwrap();

    assert_eq!(
        state.view.default_visibility,
        DefaultVisibility::SemiTransparent
    );
    // Legacy-Messung: erste zwei Punkte, negative Platzhalter-IDs.
    assert_eq!(state.view.measurement.len(), 2);
    assert_eq!(state.view.measurement[0].id, -1);
    assert_eq!(state.view.measurement[1].id, -2);
    assert_eq!(state.view.measurement[1].pos, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_gruppen_flags_und_reihenfolge_folgen_dem_bookmark() {
    let mut state = ExplorerState::new();
    let mut controller = ExplorerController::new();
    for name in ["A", "B", "C"] {
        controller
            .handle_command(
                &mut state,
                ExplorerCommand::AddGroup {
                    group: ObjectGroup::new(name, [0.5, 0.5, 0.5, 1.0]),
                },
            )
            .unwrap();
    }
    let (id_a, id_c) = {
        let groups = state.groups.get();
        (
            groups.groups()[0].id.clone(),
            groups.groups()[2].id.clone(),
        )
    };

    let engine = Arc::new(MockEngine::new());
    state.globals.engine = Some(engine);
    let bookmark = controller
        .create_bookmark(&state, "Gruppen", &AbortSignal::new())
        .unwrap()
        .unwrap();
    let mut bookmark = bookmark;
    bookmark.object_groups.retain(|g| !g.id.is_empty());
    bookmark.object_groups.retain(|g| g.id != id_a);
    // C zuerst und selektiert, B versteckt, A fehlt im Bookmark.
    bookmark.object_groups.sort_by_key(|g| g.id != id_c);
    bookmark.object_groups[0].selected = true;
    bookmark.object_groups[1].hidden = true;

    controller
        .handle_intent(&mut state, ExplorerIntent::BookmarkSelected { bookmark })
        .unwrap();

    let groups = state.groups.get();
    let names: Vec<_> = groups.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
    assert_eq!(groups.groups()[0].status, GroupStatus::Selected);
    assert_eq!(groups.groups()[1].status, GroupStatus::Hidden);
    // A war nicht im Bookmark: bleibt erhalten, Flags zurückgesetzt.
    assert_eq!(groups.groups()[2].status, GroupStatus::None);
}

#[test]
fn test_capture_ohne_engine_ist_fehler() {
    init_test_logging();
    let state = ExplorerState::new();
    let controller = ExplorerController::new();

    let result = controller.create_bookmark(&state, "Ohne Engine", &AbortSignal::new());
    assert!(result.is_err());
}

#[test]
fn test_abgebrochenes_capture_liefert_none_und_keinen_teilzustand() {
    let state = state_with_engine(Arc::new(MockEngine::with_canvas(640, 480)));
    let controller = ExplorerController::new();

    let abort = AbortSignal::new();
    abort.abort();
    let result = controller.create_bookmark(&state, "Abbruch", &abort).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_thumbnail_wird_auf_nominale_hoehe_skaliert() {
    let state = state_with_engine(Arc::new(MockEngine::with_canvas(1600, 900)));
    let controller = ExplorerController::new();

    let bookmark = controller
        .create_bookmark(&state, "Mit Bild", &AbortSignal::new())
        .unwrap()
        .unwrap();

    let png = bookmark.img.expect("Canvas vorhanden, Bild erwartet");
    let decoded = image::load_from_memory(&png).expect("PNG muss dekodierbar sein");
    assert_eq!(decoded.height(), 350);
    // Seitenverhältnis 16:9 bleibt erhalten.
    assert_eq!(decoded.width(), 622);
}

#[test]
fn test_follow_path_fetch_fehler_wird_toleriert() {
    init_test_logging();
    let bookmark = Bookmark {
        name: "Pfad".into(),
        follow_path: Some(BookmarkFollowPath {
            id: 42,
            profile: 12.0,
            view_mode: Default::default(),
            clipping: true,
            current_center: None,
        }),
        selection_basket: Some(BookmarkBasket {
            ids: vec![3],
            mode: BasketMode::Loose,
        }),
        ..Bookmark::default()
    };

    let mut state = ExplorerState::new();
    let source = MockPathSource::failing();
    let calls = Arc::new(source);
    let mut controller = ExplorerController::with_path_source(Box::new(SharedSource(calls.clone())));
    controller
        .handle_intent(
            &mut state,
            ExplorerIntent::BookmarkSelected {
                bookmark: bookmark.clone(),
            },
        )
        .unwrap();

    // Fetch-Fehler lässt genau den Follow-Path-Teil leer, der Rest steht.
    assert_eq!(calls.calls.load(Ordering::Relaxed), 1);
    assert_eq!(state.view.follow_path.path_id, None);
    assert_eq!(state.selection_basket.get().ids.to_vec(), vec![3]);
}

/// Wrapper, um eine geteilte Pfad-Quelle in den Controller zu geben.
struct SharedSource(Arc<MockPathSource>);

impl PathDataSource for SharedSource {
    fn load_curve(&self, path_id: u64) -> anyhow::Result<PathCurve> {
        self.0.load_curve(path_id)
    }
}

#[test]
fn test_follow_path_profil_wird_in_den_kurvenbereich_geklemmt() {
    init_test_logging();
    let bookmark = Bookmark {
        name: "Pfad".into(),
        follow_path: Some(BookmarkFollowPath {
            id: 7,
            profile: 99.0,
            view_mode: Default::default(),
            clipping: false,
            current_center: Some(Vec3::new(0.0, 0.0, 3.0)),
        }),
        ..Bookmark::default()
    };

    let source = MockPathSource::with_curve(PathCurve {
        profile_range: [0.0, 40.0],
        positions: vec![Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0)],
    });
    let mut state = ExplorerState::new();
    let mut controller = ExplorerController::with_path_source(Box::new(source));
    controller
        .handle_intent(&mut state, ExplorerIntent::BookmarkSelected { bookmark })
        .unwrap();

    let follow = &state.view.follow_path;
    assert_eq!(follow.path_id, Some(7));
    assert_eq!(follow.profile, 40.0);
    assert_eq!(follow.profile_range, Some([0.0, 40.0]));
    assert_eq!(follow.current_center, Some(Vec3::new(0.0, 0.0, 3.0)));
}

#[test]
fn test_pseudo_gruppen_sind_zum_capture_zeitpunkt_disjunkt() {
    let mut state = state_with_engine(Arc::new(MockEngine::new()));
    state
        .highlighted
        .dispatch(HighlightAction::SetIds { ids: vec![1, 2] });
    state.hidden.dispatch(HiddenAction::SetIds { ids: vec![9] });

    let controller = ExplorerController::new();
    let bookmark = controller
        .create_bookmark(&state, "Disjunkt", &AbortSignal::new())
        .unwrap()
        .unwrap();

    let selected = bookmark.synthetic_selected().unwrap().ids().to_vec();
    let hidden = bookmark.synthetic_hidden().unwrap().ids().to_vec();
    assert_eq!(selected, vec![1, 2]);
    assert_eq!(hidden, vec![9]);
    assert!(selected.iter().all(|id| !hidden.contains(id)));
}

#[test]
fn test_follow_path_mit_invertiertem_profil_bereich_wird_verworfen() {
    init_test_logging();
    let bookmark = Bookmark {
        name: "Pfad".into(),
        follow_path: Some(BookmarkFollowPath {
            id: 13,
            profile: 5.0,
            view_mode: Default::default(),
            clipping: false,
            current_center: None,
        }),
        ..Bookmark::default()
    };

    // Data-API liefert einen Bereich mit min > max.
    let source = MockPathSource::with_curve(PathCurve {
        profile_range: [10.0, 0.0],
        positions: vec![Vec3::ZERO],
    });
    let mut state = ExplorerState::new();
    let mut controller = ExplorerController::with_path_source(Box::new(source));
    controller
        .handle_intent(&mut state, ExplorerIntent::BookmarkSelected { bookmark })
        .expect("ungueltige Kurvendaten duerfen nicht paniken");

    assert_eq!(state.view.follow_path, FollowPathState::default());
}

#[test]
fn test_follow_path_ohne_datenquelle_wird_ignoriert() {
    init_test_logging();
    let bookmark = Bookmark {
        name: "Pfad".into(),
        follow_path: Some(BookmarkFollowPath {
            id: 1,
            profile: 0.0,
            view_mode: Default::default(),
            clipping: false,
            current_center: None,
        }),
        ..Bookmark::default()
    };

    let mut state = ExplorerState::new();
    let mut controller = ExplorerController::new();
    controller
        .handle_intent(&mut state, ExplorerIntent::BookmarkSelected { bookmark })
        .unwrap();
    assert_eq!(state.view.follow_path.path_id, None);
}
