use playdeck::ui::mvi::Reducer;
use playdeck::ui::settings::{SettingsIntent, SettingsReducer, SettingsScreenState, SliderDraft};

fn mounted() -> SettingsScreenState {
    SettingsReducer::reduce(
        SettingsScreenState::default(),
        SettingsIntent::Mount {
            focusable: vec![1, 2, 4],
            sliders: vec![(4, 3)],
        },
    )
}

#[test]
fn mount_focuses_first_focusable_row() {
    let state = mounted();
    assert_eq!(state.focused, Some(1));
    assert_eq!(
        state.draft(4),
        Some(&SliderDraft {
            value: 3,
            dragging: false
        })
    );
}

#[test]
fn mount_without_focusable_rows_has_no_focus() {
    let state = SettingsReducer::reduce(
        SettingsScreenState::default(),
        SettingsIntent::Mount {
            focusable: vec![],
            sliders: vec![],
        },
    );
    assert_eq!(state.focused, None);
    let state = SettingsReducer::reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused, None);
}

#[test]
fn move_down_skips_to_next_focusable() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::MoveDown);
    assert_eq!(state.focused, Some(2));
    let state = SettingsReducer::reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused, Some(4));
}

#[test]
fn move_wraps_at_both_ends() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::MoveUp);
    assert_eq!(state.focused, Some(4));
    let state = SettingsReducer::reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused, Some(1));
}

#[test]
fn drag_marks_draft_as_dragging() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::Drag { index: 4, value: 7 });
    assert_eq!(state.dragging(), Some(4));
    assert_eq!(state.draft(4).map(|d| d.value), Some(7));
}

#[test]
fn release_keeps_value_and_clears_dragging() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::Drag { index: 4, value: 7 });
    let state = SettingsReducer::reduce(state, SettingsIntent::Release { index: 4 });
    assert_eq!(state.dragging(), None);
    assert_eq!(state.draft(4).map(|d| d.value), Some(7));
}

#[test]
fn reconcile_leaves_dragged_draft_alone() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::Drag { index: 4, value: 7 });
    let state = SettingsReducer::reduce(
        state,
        SettingsIntent::Reconcile {
            sliders: vec![(4, 0)],
        },
    );
    assert_eq!(state.draft(4).map(|d| d.value), Some(7));
    assert!(state.draft(4).is_some_and(|d| d.dragging));
}

#[test]
fn reconcile_overwrites_released_draft() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::Drag { index: 4, value: 7 });
    let state = SettingsReducer::reduce(state, SettingsIntent::Release { index: 4 });
    let state = SettingsReducer::reduce(
        state,
        SettingsIntent::Reconcile {
            sliders: vec![(4, 5)],
        },
    );
    assert_eq!(state.draft(4).map(|d| d.value), Some(5));
}

#[test]
fn reconcile_preserves_focus() {
    let state = SettingsReducer::reduce(mounted(), SettingsIntent::MoveDown);
    let state = SettingsReducer::reduce(
        state,
        SettingsIntent::Reconcile {
            sliders: vec![(4, 1)],
        },
    );
    assert_eq!(state.focused, Some(2));
}
