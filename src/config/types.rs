use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed crossfade duration in seconds.
pub const CROSSFADE_RANGE: RangeInclusive<i64> = 0..=12;

/// Allowed normalization target in dB, relative to full scale.
pub const NORMALIZATION_LEVEL_RANGE: RangeInclusive<i64> = -12..=0;

/// Root configuration document.
///
/// Every value the UI shows is a projection of one `AppConfig` snapshot.
/// Mutations never edit a snapshot in place; they receive a clone and the
/// store publishes the result as the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub interface: InterfaceConfig,
}

/// Playback behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Remove silence between consecutive tracks (default: true).
    #[serde(default = "default_true")]
    pub gapless: bool,
    /// Keep playing similar tracks when the queue ends (default: true).
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Crossfade duration in seconds, 0 disables it (default: 0).
    #[serde(default)]
    pub crossfade_seconds: u32,
    /// Loudness normalization (default: true).
    #[serde(default = "default_true")]
    pub normalization: bool,
    /// Normalization target in dB (default: -6).
    #[serde(default = "default_normalization_level")]
    pub normalization_level_db: i32,
    /// Preferred streaming quality (default: normal).
    #[serde(default)]
    pub audio_quality: AudioQuality,
    /// Cap quality at `Normal` (default: false).
    #[serde(default)]
    pub data_saver: bool,
}

/// Library presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub show_local_files: bool,
    #[serde(default)]
    pub hide_explicit: bool,
}

/// Terminal shell presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Show key hints in the footer (default: true).
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

/// Streaming bitrate tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioQuality {
    Low,
    #[default]
    Normal,
    High,
    VeryHigh,
}

impl AudioQuality {
    pub fn all() -> &'static [AudioQuality] {
        &[Self::Low, Self::Normal, Self::High, Self::VeryHigh]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }

    pub fn bitrate_kbps(&self) -> u32 {
        match self {
            Self::Low => 24,
            Self::Normal => 96,
            Self::High => 160,
            Self::VeryHigh => 320,
        }
    }

    /// Highest tier reachable while data saver is on.
    pub fn data_saver_cap() -> Self {
        Self::Normal
    }
}

fn default_true() -> bool {
    true
}

fn default_normalization_level() -> i32 {
    -6
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gapless: true,
            autoplay: true,
            crossfade_seconds: 0,
            normalization: true,
            normalization_level_db: default_normalization_level(),
            audio_quality: AudioQuality::default(),
            data_saver: false,
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self { show_hints: true }
    }
}
