//! Turns key interaction on a settings screen into store mutations.

use std::fmt;
use std::sync::Arc;

use crate::config::{AppConfig, Mutation};
use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::item::{
    slider_nudge, Activate, BoolRead, BoolWrite, ConfigItem, SelectWrite, TextContext,
};
use crate::ui::settings::project::{project, RowView};
use crate::ui::settings::reducer::SettingsReducer;
use crate::ui::settings::screens::ConfigScreen;
use crate::ui::settings::state::SettingsScreenState;

/// Side effect requested by an interaction. The caller decides how to run it;
/// the controller never waits for the outcome.
pub enum Effect {
    /// Apply to the store's current document.
    Submit(Mutation),
    /// Run against the navigation handle.
    Navigate(Activate),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit(_) => f.write_str("Submit(..)"),
            Self::Navigate(_) => f.write_str("Navigate(..)"),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $intent:expr) => {
        $self.state = SettingsReducer::reduce(std::mem::take(&mut $self.state), $intent);
    };
}

/// One activated settings screen: its fixed item list plus UI state.
pub struct SettingsController {
    title: String,
    is_root: bool,
    items: Vec<ConfigItem>,
    state: SettingsScreenState,
}

impl SettingsController {
    /// Build the item list once and seed slider drafts from `snapshot`.
    pub fn new(screen: &dyn ConfigScreen, snapshot: &AppConfig) -> Self {
        Self::from_items(screen.title(), screen.is_root(), screen.items(), snapshot)
    }

    pub fn from_items(
        title: impl Into<String>,
        is_root: bool,
        items: Vec<ConfigItem>,
        snapshot: &AppConfig,
    ) -> Self {
        let focusable = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_interactive())
            .map(|(index, _)| index)
            .collect();
        let sliders = confirmed_slider_values(&items, snapshot);
        let mut controller = Self {
            title: title.into(),
            is_root,
            items,
            state: SettingsScreenState::default(),
        };
        dispatch!(controller, SettingsIntent::Mount { focusable, sliders });
        controller
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn items(&self) -> &[ConfigItem] {
        &self.items
    }

    pub fn state(&self) -> &SettingsScreenState {
        &self.state
    }

    pub fn focused(&self) -> Option<usize> {
        self.state.focused
    }

    pub fn rows(&self, snapshot: &AppConfig, ctx: &TextContext) -> Vec<RowView> {
        project(&self.items, snapshot, &self.state, ctx)
    }

    /// Leaving a slider mid-drag commits it.
    pub fn move_up(&mut self) -> Option<Effect> {
        let effect = self.release();
        dispatch!(self, SettingsIntent::MoveUp);
        effect
    }

    pub fn move_down(&mut self) -> Option<Effect> {
        let effect = self.release();
        dispatch!(self, SettingsIntent::MoveDown);
        effect
    }

    /// Activate the focused row.
    pub fn activate(&mut self, snapshot: &AppConfig) -> Option<Effect> {
        let index = self.state.focused?;
        if let Some(ConfigItem::Slider { .. }) = self.items.get(index) {
            return self.release();
        }

        match self.items.get(index)? {
            ConfigItem::Category { .. } | ConfigItem::Info { .. } => None,
            ConfigItem::Preference { on_activate, .. } => {
                Some(Effect::Navigate(Arc::clone(on_activate)))
            }
            ConfigItem::Switch { state, mutate, .. }
            | ConfigItem::LargeSwitch { state, mutate, .. } => {
                Some(Effect::Submit(toggle(state, mutate)))
            }
            ConfigItem::Radio {
                label,
                enabled,
                mutate,
                ..
            } => {
                if enabled(snapshot) {
                    Some(Effect::Submit(select(mutate)))
                } else {
                    tracing::debug!(option = %label, "ignoring disabled radio option");
                    None
                }
            }
            // Handled above.
            ConfigItem::Slider { .. } => None,
        }
    }

    /// Move the focused slider by `steps` stops. Never submits.
    pub fn nudge(&mut self, steps: i64, snapshot: &AppConfig) {
        let Some(index) = self.state.focused else {
            return;
        };
        let Some(ConfigItem::Slider {
            range,
            step_count,
            state,
            ..
        }) = self.items.get(index)
        else {
            return;
        };
        let current = self
            .state
            .draft(index)
            .map(|d| d.value)
            .unwrap_or_else(|| state(snapshot));
        let value = slider_nudge(range, *step_count, current, steps);
        dispatch!(self, SettingsIntent::Drag { index, value });
    }

    /// Commit the slider being dragged, if any.
    pub fn release(&mut self) -> Option<Effect> {
        let index = self.state.dragging()?;
        let value = self.state.draft(index)?.value;
        let ConfigItem::Slider { mutate, .. } = self.items.get(index)? else {
            return None;
        };
        let mutate = Arc::clone(mutate);
        dispatch!(self, SettingsIntent::Release { index });
        Some(Effect::Submit(Box::new(move |mut config| {
            mutate(&mut config, value);
            config
        })))
    }

    /// Follow a newly observed snapshot.
    pub fn on_snapshot(&mut self, snapshot: &AppConfig) {
        let sliders = confirmed_slider_values(&self.items, snapshot);
        if !sliders.is_empty() {
            dispatch!(self, SettingsIntent::Reconcile { sliders });
        }
    }
}

/// Negates the value found in the document the mutation is applied to, not
/// the value that was on screen when the key was pressed.
fn toggle(state: &BoolRead, mutate: &BoolWrite) -> Mutation {
    let state = Arc::clone(state);
    let mutate = Arc::clone(mutate);
    Box::new(move |mut config| {
        let next = !state(&config);
        mutate(&mut config, next);
        config
    })
}

fn select(mutate: &SelectWrite) -> Mutation {
    let mutate = Arc::clone(mutate);
    Box::new(move |mut config| {
        mutate(&mut config);
        config
    })
}

fn confirmed_slider_values(items: &[ConfigItem], snapshot: &AppConfig) -> Vec<(usize, i64)> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            ConfigItem::Slider { state, .. } => Some((index, state(snapshot))),
            _ => None,
        })
        .collect()
}
