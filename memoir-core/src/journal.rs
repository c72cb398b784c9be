//! Journal root management.
//!
//! Ties the global config to a concrete store: resolves where the journal
//! lives on disk and opens the event store over it.

use std::path::PathBuf;

use config::{Config, File};
use tracing::warn;

use crate::error::{JournalError, JournalResult};
use crate::journal_config::JournalConfig;
use crate::slot::JsonSlot;
use crate::store::EventStore;

/// Filename of the single durable slot inside the journal directory.
const EVENTS_FILE: &str = "events.json";

#[derive(Clone)]
pub struct Journal {
    config: JournalConfig,
}

impl Journal {
    pub fn load() -> JournalResult<Self> {
        let config_path = JournalConfig::config_path()?;

        if !config_path.exists() {
            JournalConfig::create_default_config(&config_path)?;
        }

        let config: JournalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| JournalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| JournalError::Config(e.to_string()))?;

        Ok(Journal { config })
    }

    /// The journal directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.journal_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the journal directory in display-friendly form, keeping `~`
    /// instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.journal_dir.clone()
    }

    /// Path of the durable slot holding all events.
    pub fn events_path(&self) -> PathBuf {
        self.data_path().join(EVENTS_FILE)
    }

    /// Open the event store over this journal's durable slot.
    pub fn open_store(&self) -> JournalResult<EventStore> {
        EventStore::open(Box::new(JsonSlot::new(self.events_path())))
    }
}

/// Open the store for the configured journal.
///
/// When the platform has no config directory (so no durable location can be
/// determined), falls back to a purely in-memory store instead of failing:
/// every operation still works, nothing persists.
pub fn open_default_store() -> JournalResult<EventStore> {
    if JournalConfig::config_path().is_err() {
        warn!("no durable storage available; events will not persist");
        return Ok(EventStore::in_memory());
    }

    Journal::load()?.open_store()
}
