//! Declarative settings rows.
//!
//! A screen is described as an ordered `Vec<ConfigItem>`. Each variant
//! carries the accessors it needs to read its value from a snapshot and to
//! write a new value into the next document.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::ui::nav::Navigator;

pub type BoolRead = Arc<dyn Fn(&AppConfig) -> bool + Send + Sync>;
pub type BoolWrite = Arc<dyn Fn(&mut AppConfig, bool) + Send + Sync>;
pub type IntRead = Arc<dyn Fn(&AppConfig) -> i64 + Send + Sync>;
pub type IntWrite = Arc<dyn Fn(&mut AppConfig, i64) + Send + Sync>;
pub type SelectWrite = Arc<dyn Fn(&mut AppConfig) + Send + Sync>;
pub type PreferenceSubtitle = Arc<dyn Fn(&TextContext, &AppConfig) -> String + Send + Sync>;
pub type SliderSubtitle = Arc<dyn Fn(&TextContext, i64) -> String + Send + Sync>;
pub type Activate = Arc<dyn Fn(&mut dyn Navigator) + Send + Sync>;

/// One row of a settings screen.
#[derive(Clone)]
pub enum ConfigItem {
    Category {
        label: String,
    },
    Info {
        text: String,
    },
    Preference {
        label: String,
        subtitle: PreferenceSubtitle,
        on_activate: Activate,
    },
    Switch {
        label: String,
        subtitle: String,
        state: BoolRead,
        mutate: BoolWrite,
    },
    LargeSwitch {
        label: String,
        state: BoolRead,
        mutate: BoolWrite,
    },
    /// One option of a group. Exclusivity is up to whoever supplies
    /// `selected` and `mutate`.
    Radio {
        label: String,
        subtitle: String,
        selected: BoolRead,
        enabled: BoolRead,
        mutate: SelectWrite,
    },
    Slider {
        label: String,
        subtitle: SliderSubtitle,
        range: RangeInclusive<i64>,
        /// Discrete stops between the two ends; 0 means every integer.
        step_count: u32,
        state: IntRead,
        mutate: IntWrite,
    },
}

impl ConfigItem {
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category {
            label: label.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::Info { text: text.into() }
    }

    pub fn preference(
        label: impl Into<String>,
        subtitle: impl Fn(&TextContext, &AppConfig) -> String + Send + Sync + 'static,
        on_activate: impl Fn(&mut dyn Navigator) + Send + Sync + 'static,
    ) -> Self {
        Self::Preference {
            label: label.into(),
            subtitle: Arc::new(subtitle),
            on_activate: Arc::new(on_activate),
        }
    }

    pub fn switch(
        label: impl Into<String>,
        subtitle: impl Into<String>,
        state: impl Fn(&AppConfig) -> bool + Send + Sync + 'static,
        mutate: impl Fn(&mut AppConfig, bool) + Send + Sync + 'static,
    ) -> Self {
        Self::Switch {
            label: label.into(),
            subtitle: subtitle.into(),
            state: Arc::new(state),
            mutate: Arc::new(mutate),
        }
    }

    pub fn large_switch(
        label: impl Into<String>,
        state: impl Fn(&AppConfig) -> bool + Send + Sync + 'static,
        mutate: impl Fn(&mut AppConfig, bool) + Send + Sync + 'static,
    ) -> Self {
        Self::LargeSwitch {
            label: label.into(),
            state: Arc::new(state),
            mutate: Arc::new(mutate),
        }
    }

    pub fn radio(
        label: impl Into<String>,
        subtitle: impl Into<String>,
        selected: impl Fn(&AppConfig) -> bool + Send + Sync + 'static,
        enabled: impl Fn(&AppConfig) -> bool + Send + Sync + 'static,
        mutate: impl Fn(&mut AppConfig) + Send + Sync + 'static,
    ) -> Self {
        Self::Radio {
            label: label.into(),
            subtitle: subtitle.into(),
            selected: Arc::new(selected),
            enabled: Arc::new(enabled),
            mutate: Arc::new(mutate),
        }
    }

    pub fn slider(
        label: impl Into<String>,
        subtitle: impl Fn(&TextContext, i64) -> String + Send + Sync + 'static,
        range: RangeInclusive<i64>,
        step_count: u32,
        state: impl Fn(&AppConfig) -> i64 + Send + Sync + 'static,
        mutate: impl Fn(&mut AppConfig, i64) + Send + Sync + 'static,
    ) -> Self {
        Self::Slider {
            label: label.into(),
            subtitle: Arc::new(subtitle),
            range,
            step_count,
            state: Arc::new(state),
            mutate: Arc::new(mutate),
        }
    }

    /// Whether the row can take focus.
    pub fn is_interactive(&self) -> bool {
        match self {
            Self::Category { .. } | Self::Info { .. } => false,
            Self::Preference { .. }
            | Self::Switch { .. }
            | Self::LargeSwitch { .. }
            | Self::Radio { .. }
            | Self::Slider { .. } => true,
        }
    }
}

impl fmt::Debug for ConfigItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category { label } => f.debug_tuple("Category").field(label).finish(),
            Self::Info { text } => f.debug_tuple("Info").field(text).finish(),
            Self::Preference { label, .. } => f.debug_tuple("Preference").field(label).finish(),
            Self::Switch { label, .. } => f.debug_tuple("Switch").field(label).finish(),
            Self::LargeSwitch { label, .. } => f.debug_tuple("LargeSwitch").field(label).finish(),
            Self::Radio { label, .. } => f.debug_tuple("Radio").field(label).finish(),
            Self::Slider { label, range, .. } => f
                .debug_struct("Slider")
                .field("label", label)
                .field("range", range)
                .finish(),
        }
    }
}

/// Formatting collaborator handed to subtitle functions.
#[derive(Debug, Clone, Default)]
pub struct TextContext;

impl TextContext {
    pub fn new() -> Self {
        Self
    }

    pub fn seconds(&self, value: i64) -> String {
        match value {
            0 => "Off".to_string(),
            1 => "1 second".to_string(),
            n => format!("{} seconds", n),
        }
    }

    pub fn decibels(&self, value: i64) -> String {
        format!("{} dB", value)
    }
}

/// Number of intervals between the two ends of a slider. Zero for an empty
/// range; never more than one per integer.
fn slider_intervals(range: &RangeInclusive<i64>, step_count: u32) -> i128 {
    let span = i128::from(*range.end()) - i128::from(*range.start());
    if span <= 0 {
        return 0;
    }
    if step_count == 0 {
        return span;
    }
    (i128::from(step_count) + 1).min(span)
}

/// `num / den` rounded half up. Both must be non-negative, `den` positive.
fn div_round(num: i128, den: i128) -> i128 {
    (2 * num + den) / (2 * den)
}

/// Value of stop `index`, where stop 0 is the start and the last stop is
/// the end. Stops are spread evenly and rounded to integers, so both ends
/// are always reachable.
pub fn slider_stop(range: &RangeInclusive<i64>, step_count: u32, index: i64) -> i64 {
    let intervals = slider_intervals(range, step_count);
    if intervals == 0 {
        return *range.start();
    }
    let start = i128::from(*range.start());
    let span = i128::from(*range.end()) - start;
    let index = i128::from(index).clamp(0, intervals);
    let value = start + div_round(index * span, intervals);
    i64::try_from(value).unwrap_or(*range.end())
}

/// Index of the stop nearest to `value`, after clamping into `range`.
pub fn slider_stop_index(range: &RangeInclusive<i64>, step_count: u32, value: i64) -> i64 {
    let intervals = slider_intervals(range, step_count);
    if intervals == 0 {
        return 0;
    }
    let start = i128::from(*range.start());
    let span = i128::from(*range.end()) - start;
    let offset = i128::from(value).clamp(start, start + span) - start;
    i64::try_from(div_round(offset * intervals, span)).unwrap_or(0)
}

/// Clamp `value` into `range` and round it to the nearest stop.
pub fn slider_snap(range: &RangeInclusive<i64>, step_count: u32, value: i64) -> i64 {
    slider_stop(range, step_count, slider_stop_index(range, step_count, value))
}

/// Move `steps` stops away from the stop nearest to `value`.
pub fn slider_nudge(
    range: &RangeInclusive<i64>,
    step_count: u32,
    value: i64,
    steps: i64,
) -> i64 {
    let index = slider_stop_index(range, step_count, value).saturating_add(steps);
    slider_stop(range, step_count, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_spread_evenly_between_ends() {
        assert_eq!(slider_stop(&(0..=12), 11, 1), 1);
        assert_eq!(slider_stop(&(0..=100), 9, 3), 30);
        assert_eq!(slider_stop(&(0..=10), 0, 4), 4);
        assert_eq!(slider_stop(&(0..=10), 2, 99), 10);
    }

    #[test]
    fn uneven_span_still_reaches_both_ends() {
        let range = 0..=10;
        let stops: Vec<i64> = (0..=3).map(|i| slider_stop(&range, 2, i)).collect();
        assert_eq!(stops, vec![0, 3, 7, 10]);
        assert_eq!(slider_snap(&range, 2, 10), 10);
        assert_eq!(slider_snap(&range, 2, 9), 10);
        assert_eq!(slider_nudge(&range, 2, 7, 1), 10);
        assert_eq!(slider_nudge(&range, 2, 3, -5), 0);
    }

    #[test]
    fn snap_clamps_and_rounds() {
        assert_eq!(slider_snap(&(0..=100), 9, 44), 40);
        assert_eq!(slider_snap(&(0..=100), 9, 45), 50);
        assert_eq!(slider_snap(&(0..=100), 9, 130), 100);
        assert_eq!(slider_snap(&(-12..=0), 11, -20), -12);
        assert_eq!(slider_snap(&(-12..=0), 11, -5), -5);
    }

    #[test]
    fn more_steps_than_integers_still_moves() {
        assert_eq!(slider_nudge(&(0..=2), 10, 0, 1), 1);
        assert_eq!(slider_nudge(&(0..=2), 10, 1, 1), 2);
    }

    #[test]
    fn empty_range_pins_to_start() {
        assert_eq!(slider_snap(&(4..=4), 3, 9), 4);
        assert_eq!(slider_nudge(&(4..=4), 3, 4, 1), 4);
    }

    #[test]
    fn category_and_info_are_not_interactive() {
        assert!(!ConfigItem::category("Playback").is_interactive());
        assert!(!ConfigItem::info("note").is_interactive());
        assert!(ConfigItem::switch("Gapless", "", |_| true, |_, _| {}).is_interactive());
    }

    #[test]
    fn seconds_formats_off_and_plural() {
        let ctx = TextContext::new();
        assert_eq!(ctx.seconds(0), "Off");
        assert_eq!(ctx.seconds(1), "1 second");
        assert_eq!(ctx.seconds(5), "5 seconds");
    }
}
