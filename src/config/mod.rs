mod loader;
pub mod store;
mod types;

pub use loader::ConfigError;
pub use store::{ConfigStore, InMemory, Mutation, Persistence, StoreError, Submitter, TomlFile};
pub use types::{
    AppConfig, AudioQuality, InterfaceConfig, LibraryConfig, PlayerConfig, CROSSFADE_RANGE,
    NORMALIZATION_LEVEL_RANGE,
};
