use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{SettingsScreenState, SliderDraft};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsScreenState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Mount { focusable, sliders } => SettingsScreenState {
                focused: focusable.first().copied(),
                focusable,
                drafts: sliders
                    .into_iter()
                    .map(|(index, value)| {
                        (
                            index,
                            SliderDraft {
                                value,
                                dragging: false,
                            },
                        )
                    })
                    .collect(),
            },
            SettingsIntent::MoveUp => move_focus(state, -1),
            SettingsIntent::MoveDown => move_focus(state, 1),
            SettingsIntent::Drag { index, value } => {
                let mut state = state;
                state.drafts.insert(
                    index,
                    SliderDraft {
                        value,
                        dragging: true,
                    },
                );
                state
            }
            SettingsIntent::Release { index } => {
                let mut state = state;
                if let Some(draft) = state.drafts.get_mut(&index) {
                    draft.dragging = false;
                }
                state
            }
            SettingsIntent::Reconcile { sliders } => {
                let mut state = state;
                for (index, confirmed) in sliders {
                    let draft = state.drafts.entry(index).or_insert(SliderDraft {
                        value: confirmed,
                        dragging: false,
                    });
                    if !draft.dragging {
                        draft.value = confirmed;
                    }
                }
                state
            }
        }
    }
}

/// Move focus by one focusable row, wrapping at both ends.
fn move_focus(state: SettingsScreenState, delta: isize) -> SettingsScreenState {
    let len = state.focusable.len();
    if len == 0 {
        return state;
    }
    let position = state
        .focused
        .and_then(|focused| state.focusable.iter().position(|&i| i == focused))
        .unwrap_or(0);
    let next = if delta < 0 {
        if position == 0 {
            len - 1
        } else {
            position - 1
        }
    } else if position + 1 >= len {
        0
    } else {
        position + 1
    };
    SettingsScreenState {
        focused: Some(state.focusable[next]),
        ..state
    }
}
