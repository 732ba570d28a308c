//! Concrete settings screens.

use clap::ValueEnum;

use crate::config::{AudioQuality, CROSSFADE_RANGE, NORMALIZATION_LEVEL_RANGE};
use crate::ui::settings::item::ConfigItem;

/// Declares one settings screen.
pub trait ConfigScreen {
    fn title(&self) -> &str;

    /// Ordered rows. Called once per screen activation.
    fn items(&self) -> Vec<ConfigItem>;

    /// Root screens have no back affordance.
    fn is_root(&self) -> bool {
        false
    }
}

/// Addressable settings screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ScreenId {
    Root,
    Playback,
    Quality,
    Library,
}

impl ScreenId {
    pub fn screen(self) -> Box<dyn ConfigScreen> {
        match self {
            Self::Root => Box::new(RootSettings),
            Self::Playback => Box::new(PlaybackSettings),
            Self::Quality => Box::new(QualitySettings),
            Self::Library => Box::new(LibrarySettings),
        }
    }
}

pub struct RootSettings;

impl ConfigScreen for RootSettings {
    fn title(&self) -> &str {
        "Settings"
    }

    fn is_root(&self) -> bool {
        true
    }

    fn items(&self) -> Vec<ConfigItem> {
        vec![
            ConfigItem::category("Playback"),
            ConfigItem::preference(
                "Playback",
                |ctx, config| {
                    let gapless = if config.player.gapless { "Gapless" } else { "With gaps" };
                    format!(
                        "{}, crossfade {}",
                        gapless,
                        ctx.seconds(i64::from(config.player.crossfade_seconds)).to_lowercase()
                    )
                },
                |nav| nav.push(ScreenId::Playback),
            ),
            ConfigItem::preference(
                "Audio quality",
                |_, config| {
                    let quality = config.player.audio_quality;
                    format!("{} ({} kbit/s)", quality.label(), quality.bitrate_kbps())
                },
                |nav| nav.push(ScreenId::Quality),
            ),
            ConfigItem::category("Library"),
            ConfigItem::preference(
                "Library",
                |_, config| {
                    if config.library.show_local_files {
                        "Local files shown".to_string()
                    } else {
                        "Local files hidden".to_string()
                    }
                },
                |nav| nav.push(ScreenId::Library),
            ),
            ConfigItem::category("Interface"),
            ConfigItem::switch(
                "Key hints",
                "Show shortcuts in the footer",
                |config| config.interface.show_hints,
                |config, value| config.interface.show_hints = value,
            ),
            ConfigItem::info(format!("playdeck {}", env!("CARGO_PKG_VERSION"))),
        ]
    }
}

pub struct PlaybackSettings;

impl ConfigScreen for PlaybackSettings {
    fn title(&self) -> &str {
        "Playback"
    }

    fn items(&self) -> Vec<ConfigItem> {
        vec![
            ConfigItem::category("Playback"),
            ConfigItem::switch(
                "Gapless",
                "Remove silence between tracks",
                |config| config.player.gapless,
                |config, value| config.player.gapless = value,
            ),
            ConfigItem::switch(
                "Autoplay",
                "Keep playing similar tracks when the queue ends",
                |config| config.player.autoplay,
                |config, value| config.player.autoplay = value,
            ),
            ConfigItem::slider(
                "Crossfade",
                |ctx, value| ctx.seconds(value),
                CROSSFADE_RANGE,
                11,
                |config| i64::from(config.player.crossfade_seconds),
                |config, value| {
                    let clamped = value.clamp(*CROSSFADE_RANGE.start(), *CROSSFADE_RANGE.end());
                    config.player.crossfade_seconds = u32::try_from(clamped).unwrap_or(0);
                },
            ),
            ConfigItem::category("Normalization"),
            ConfigItem::large_switch(
                "Normalize volume",
                |config| config.player.normalization,
                |config, value| config.player.normalization = value,
            ),
            ConfigItem::slider(
                "Target level",
                |ctx, value| ctx.decibels(value),
                NORMALIZATION_LEVEL_RANGE,
                11,
                |config| i64::from(config.player.normalization_level_db),
                |config, value| {
                    let clamped = value.clamp(
                        *NORMALIZATION_LEVEL_RANGE.start(),
                        *NORMALIZATION_LEVEL_RANGE.end(),
                    );
                    config.player.normalization_level_db = i32::try_from(clamped).unwrap_or(-6);
                },
            ),
            ConfigItem::info("Normalization keeps loudness consistent across tracks."),
        ]
    }
}

pub struct QualitySettings;

impl ConfigScreen for QualitySettings {
    fn title(&self) -> &str {
        "Audio quality"
    }

    fn items(&self) -> Vec<ConfigItem> {
        let mut items = vec![
            ConfigItem::large_switch(
                "Data saver",
                |config| config.player.data_saver,
                |config, value| {
                    config.player.data_saver = value;
                    if value {
                        let cap = AudioQuality::data_saver_cap();
                        config.player.audio_quality = config.player.audio_quality.min(cap);
                    }
                },
            ),
            ConfigItem::category("Streaming quality"),
        ];
        items.extend(AudioQuality::all().iter().map(|&quality| {
            ConfigItem::radio(
                quality.label(),
                format!("{} kbit/s", quality.bitrate_kbps()),
                move |config| config.player.audio_quality == quality,
                move |config| {
                    !config.player.data_saver || quality <= AudioQuality::data_saver_cap()
                },
                move |config| config.player.audio_quality = quality,
            )
        }));
        items.push(ConfigItem::info(
            "Higher quality uses more data. Data saver limits streaming to Normal.",
        ));
        items
    }
}

pub struct LibrarySettings;

impl ConfigScreen for LibrarySettings {
    fn title(&self) -> &str {
        "Library"
    }

    fn items(&self) -> Vec<ConfigItem> {
        vec![
            ConfigItem::category("Content"),
            ConfigItem::switch(
                "Show local files",
                "List audio files from this device next to streamed tracks",
                |config| config.library.show_local_files,
                |config, value| config.library.show_local_files = value,
            ),
            ConfigItem::switch(
                "Hide explicit content",
                "",
                |config| config.library.hide_explicit,
                |config, value| config.library.hide_explicit = value,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn only_root_is_root() {
        assert!(ScreenId::Root.screen().is_root());
        assert!(!ScreenId::Playback.screen().is_root());
        assert!(!ScreenId::Quality.screen().is_root());
        assert!(!ScreenId::Library.screen().is_root());
    }

    #[test]
    fn quality_radios_form_exclusive_group() {
        let items = QualitySettings.items();
        let mut config = AppConfig::default();
        for item in &items {
            if let ConfigItem::Radio { label, mutate, .. } = item {
                if label == "High" {
                    mutate(&mut config);
                }
            }
        }
        let selected: Vec<&str> = items
            .iter()
            .filter_map(|item| match item {
                ConfigItem::Radio {
                    label, selected, ..
                } if selected(&config) => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec!["High"]);
    }

    #[test]
    fn data_saver_disables_high_tiers_and_caps_quality() {
        let items = QualitySettings.items();
        let mut config = AppConfig::default();
        config.player.audio_quality = AudioQuality::VeryHigh;

        if let ConfigItem::LargeSwitch { mutate, .. } = &items[0] {
            mutate(&mut config, true);
        }
        assert_eq!(config.player.audio_quality, AudioQuality::Normal);

        let enabled: Vec<(String, bool)> = items
            .iter()
            .filter_map(|item| match item {
                ConfigItem::Radio { label, enabled, .. } => Some((label.clone(), enabled(&config))),
                _ => None,
            })
            .collect();
        assert_eq!(
            enabled,
            vec![
                ("Low".to_string(), true),
                ("Normal".to_string(), true),
                ("High".to_string(), false),
                ("Very high".to_string(), false),
            ]
        );
    }
}
