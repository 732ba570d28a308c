//! Pure projection of a settings screen onto displayable rows.

use std::ops::RangeInclusive;

use crate::config::AppConfig;
use crate::ui::settings::item::{ConfigItem, TextContext};
use crate::ui::settings::state::SettingsScreenState;

/// What one row shows for a given snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Category {
        label: String,
    },
    Info {
        text: String,
    },
    Preference {
        label: String,
        subtitle: String,
    },
    Switch {
        label: String,
        subtitle: String,
        on: bool,
    },
    LargeSwitch {
        label: String,
        on: bool,
    },
    Radio {
        label: String,
        subtitle: String,
        selected: bool,
        enabled: bool,
    },
    Slider {
        label: String,
        subtitle: String,
        value: i64,
        range: RangeInclusive<i64>,
        dragging: bool,
    },
}

/// Project every item against `snapshot`, one row per item, in list order.
///
/// Sliders show their local draft when one exists and the confirmed value
/// otherwise.
pub fn project(
    items: &[ConfigItem],
    snapshot: &AppConfig,
    state: &SettingsScreenState,
    ctx: &TextContext,
) -> Vec<RowView> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            ConfigItem::Category { label } => RowView::Category {
                label: label.clone(),
            },
            ConfigItem::Info { text } => RowView::Info { text: text.clone() },
            ConfigItem::Preference {
                label, subtitle, ..
            } => RowView::Preference {
                label: label.clone(),
                subtitle: subtitle(ctx, snapshot),
            },
            ConfigItem::Switch {
                label,
                subtitle,
                state,
                ..
            } => RowView::Switch {
                label: label.clone(),
                subtitle: subtitle.clone(),
                on: state(snapshot),
            },
            ConfigItem::LargeSwitch { label, state, .. } => RowView::LargeSwitch {
                label: label.clone(),
                on: state(snapshot),
            },
            ConfigItem::Radio {
                label,
                subtitle,
                selected,
                enabled,
                ..
            } => RowView::Radio {
                label: label.clone(),
                subtitle: subtitle.clone(),
                selected: selected(snapshot),
                enabled: enabled(snapshot),
            },
            ConfigItem::Slider {
                label,
                subtitle,
                range,
                state: confirmed,
                ..
            } => {
                let draft = state.draft(index);
                let value = draft.map(|d| d.value).unwrap_or_else(|| confirmed(snapshot));
                RowView::Slider {
                    label: label.clone(),
                    subtitle: subtitle(ctx, value),
                    value,
                    range: range.clone(),
                    dragging: draft.is_some_and(|d| d.dragging),
                }
            }
        })
        .collect()
}
