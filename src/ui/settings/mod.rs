mod controller;
mod intent;
mod item;
mod project;
mod reducer;
mod screens;
mod state;
mod view;

pub use controller::{Effect, SettingsController};
pub use intent::SettingsIntent;
pub use item::{
    slider_nudge, slider_snap, slider_stop, slider_stop_index, ConfigItem, TextContext,
};
pub use project::{project, RowView};
pub use reducer::SettingsReducer;
pub use screens::{
    ConfigScreen, LibrarySettings, PlaybackSettings, QualitySettings, RootSettings, ScreenId,
};
pub use state::{SettingsScreenState, SliderDraft};
pub use view::SettingsPage;
