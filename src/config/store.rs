//! Observable configuration store.
//!
//! The store owns the current [`AppConfig`] snapshot. Readers subscribe to a
//! `watch` channel that always holds the latest committed snapshot; writers
//! hand in a [`Mutation`] which is applied to the current document, persisted,
//! and only then published.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::loader::ConfigError;
use crate::config::types::AppConfig;

/// Pure transformation from the current document to the next one.
pub type Mutation = Box<dyn FnOnce(AppConfig) -> AppConfig + Send + 'static>;

/// Errors returned by [`ConfigStore::update`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to persist config: {0}")]
    Persist(#[from] ConfigError),

    #[error("Mutation rejected: {0}")]
    Rejected(#[source] ConfigError),

    #[error("Config writer task failed: {0}")]
    Writer(#[from] tokio::task::JoinError),
}

/// Backing storage for committed snapshots.
pub trait Persistence: Send + Sync + 'static {
    fn load(&self) -> Result<AppConfig, ConfigError>;
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// TOML file on disk.
pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for TomlFile {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        AppConfig::load_from(&self.path)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        config.save_to(&self.path)
    }
}

/// Process-local storage. Used by `--ephemeral` and tests.
#[derive(Default)]
pub struct InMemory {
    saved: Mutex<Option<AppConfig>>,
    reject_writes: AtomicBool,
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last document written, if any.
    pub fn saved(&self) -> Option<AppConfig> {
        self.saved.lock().clone()
    }

    /// Make every subsequent `save` fail.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

impl Persistence for InMemory {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        Ok(self.saved.lock().clone().unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(ConfigError::WriteError {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::other("writes rejected"),
            });
        }
        *self.saved.lock() = Some(config.clone());
        Ok(())
    }
}

/// Cloneable handle to the shared configuration document.
#[derive(Clone)]
pub struct ConfigStore {
    tx: Arc<watch::Sender<AppConfig>>,
    commit: Arc<tokio::sync::Mutex<()>>,
    persistence: Arc<dyn Persistence>,
}

impl ConfigStore {
    /// Load the initial document from `persistence` and validate it.
    pub fn open(persistence: Arc<dyn Persistence>) -> Result<Self, ConfigError> {
        let config = persistence.load()?;
        config.validate()?;
        Ok(Self::with_initial(config, persistence))
    }

    /// Create a store around an already-loaded document.
    pub fn with_initial(config: AppConfig, persistence: Arc<dyn Persistence>) -> Self {
        let (tx, _rx) = watch::channel(config);
        Self {
            tx: Arc::new(tx),
            commit: Arc::new(tokio::sync::Mutex::new(())),
            persistence,
        }
    }

    /// Subscribe to snapshots. The receiver immediately holds the latest one.
    pub fn observe(&self) -> watch::Receiver<AppConfig> {
        self.tx.subscribe()
    }

    /// Clone of the latest committed snapshot.
    pub fn current(&self) -> AppConfig {
        self.tx.borrow().clone()
    }

    /// Apply `mutation` to the current document and commit the result.
    ///
    /// Commits are serialized: each mutation sees the document produced by
    /// the previous one. On any failure nothing is published.
    pub async fn update(&self, mutation: Mutation) -> Result<(), StoreError> {
        let _guard = self.commit.lock().await;
        let current = self.current();
        let next = mutation(current.clone());

        if next == current {
            tracing::debug!("config mutation produced no change");
            return Ok(());
        }

        next.validate().map_err(StoreError::Rejected)?;
        let persistence = Arc::clone(&self.persistence);
        let next = tokio::task::spawn_blocking(move || persistence.save(&next).map(|()| next))
            .await??;
        self.tx.send_replace(next);
        tracing::debug!("config snapshot committed");
        Ok(())
    }

    /// Fire-and-forget submission handle bound to `runtime`.
    pub fn submitter(&self, runtime: Handle) -> Submitter {
        Submitter {
            store: self.clone(),
            runtime,
        }
    }
}

/// Spawns one task per submitted mutation. Failures are logged, never
/// reported back to the caller.
#[derive(Clone)]
pub struct Submitter {
    store: ConfigStore,
    runtime: Handle,
}

impl Submitter {
    pub fn submit(&self, mutation: Mutation) -> JoinHandle<()> {
        let store = self.store.clone();
        self.runtime.spawn(async move {
            if let Err(err) = store.update(mutation).await {
                tracing::warn!(error = %err, "config update failed");
            }
        })
    }
}
