use crate::app::events::{ExplorerCommand, ExplorerIntent};
use crate::app::intent_mapping::map_intent_to_commands;
use crate::app::state::{ExplorerState, HighlightAction, HighlightCollection};

#[test]
fn test_hide_selected_deckt_alle_vier_stores_ab() {
    let mut state = ExplorerState::new();
    state
        .highlighted
        .dispatch(HighlightAction::SetIds { ids: vec![1, 2] });
    state.view.main_object = Some(3);

    let commands = map_intent_to_commands(&state, ExplorerIntent::HideSelectedRequested);

    // Hidden + Highlight-Clear + eine Entfernung pro Collection + Basket + Main.
    assert_eq!(commands.len(), 4 + HighlightCollection::ALL.len());
    assert!(matches!(
        &commands[0],
        ExplorerCommand::HideIds { ids } if ids == &vec![1, 2, 3]
    ));
    assert!(matches!(
        &commands[1],
        ExplorerCommand::SetHighlightIds { ids } if ids.is_empty()
    ));
    assert!(matches!(
        commands.last(),
        Some(ExplorerCommand::SetMainObject { id: None })
    ));
}

#[test]
fn test_hide_selected_ohne_selektion_ist_leer() {
    let state = ExplorerState::new();
    let commands = map_intent_to_commands(&state, ExplorerIntent::HideSelectedRequested);
    assert!(commands.is_empty());
}

#[test]
fn test_additiver_pick_auf_selektiertes_objekt_waehlt_ab() {
    let mut state = ExplorerState::new();
    state
        .highlighted
        .dispatch(HighlightAction::SetIds { ids: vec![7] });
    state.view.main_object = Some(7);

    let commands = map_intent_to_commands(
        &state,
        ExplorerIntent::ObjectPicked {
            id: 7,
            additive: true,
        },
    );

    assert!(matches!(
        &commands[0],
        ExplorerCommand::HighlightRemove { ids } if ids == &vec![7]
    ));
    assert!(matches!(
        &commands[1],
        ExplorerCommand::SetMainObject { id: None }
    ));
}

#[test]
fn test_nicht_additiver_pick_ersetzt_selektion() {
    let mut state = ExplorerState::new();
    state
        .highlighted
        .dispatch(HighlightAction::SetIds { ids: vec![1, 2] });

    let commands = map_intent_to_commands(
        &state,
        ExplorerIntent::ObjectPicked {
            id: 9,
            additive: false,
        },
    );

    assert!(matches!(
        &commands[0],
        ExplorerCommand::SetHighlightIds { ids } if ids == &vec![9]
    ));
    assert!(matches!(
        &commands[1],
        ExplorerCommand::SetMainObject { id: Some(9) }
    ));
}
