use std::collections::BTreeMap;

use crate::ui::mvi::UiState;

/// Local, unconfirmed value of a slider.
///
/// `dragging` is true between the first nudge and the release that commits
/// `value` to the store. While dragging, incoming snapshots leave the draft
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderDraft {
    pub value: i64,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsScreenState {
    /// Indices of rows that can take focus, in list order.
    pub focusable: Vec<usize>,
    /// Focused row index (an element of `focusable`).
    pub focused: Option<usize>,
    /// Slider drafts keyed by row index.
    pub drafts: BTreeMap<usize, SliderDraft>,
}

impl UiState for SettingsScreenState {}

impl SettingsScreenState {
    pub fn draft(&self, index: usize) -> Option<&SliderDraft> {
        self.drafts.get(&index)
    }

    /// Row index of the slider currently being dragged.
    pub fn dragging(&self) -> Option<usize> {
        self.drafts
            .iter()
            .find(|(_, draft)| draft.dragging)
            .map(|(index, _)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_focus() {
        let state = SettingsScreenState::default();
        assert_eq!(state.focused, None);
        assert_eq!(state.dragging(), None);
    }

    #[test]
    fn dragging_finds_active_draft() {
        let mut state = SettingsScreenState::default();
        state.drafts.insert(
            2,
            SliderDraft {
                value: 3,
                dragging: false,
            },
        );
        state.drafts.insert(
            5,
            SliderDraft {
                value: 7,
                dragging: true,
            },
        );
        assert_eq!(state.dragging(), Some(5));
    }
}
