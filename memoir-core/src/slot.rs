//! Durable storage for the event list.
//!
//! The whole journal lives in one well-known slot: a JSON array of events,
//! fully rewritten on every mutation. A missing slot means an empty journal,
//! not an error. A malformed slot is quarantined and the journal starts
//! empty rather than failing to open.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{JournalError, JournalResult};
use crate::event::MemoryEvent;

/// A durable key-value slot holding the serialized event list.
pub trait StorageSlot {
    /// Read the persisted list. An absent slot yields an empty list.
    fn load(&self) -> JournalResult<Vec<MemoryEvent>>;

    /// Overwrite the slot with the full list.
    fn save(&self, events: &[MemoryEvent]) -> JournalResult<()>;
}

/// Encode the event list to its persisted textual form.
pub fn encode(events: &[MemoryEvent]) -> JournalResult<String> {
    serde_json::to_string_pretty(events).map_err(|e| JournalError::Serialization(e.to_string()))
}

/// Decode the persisted textual form back into events.
pub fn decode(text: &str) -> JournalResult<Vec<MemoryEvent>> {
    serde_json::from_str(text).map_err(|e| JournalError::Serialization(e.to_string()))
}

/// The event list persisted as a single JSON file on disk.
pub struct JsonSlot {
    path: PathBuf,
}

impl JsonSlot {
    pub fn new(path: PathBuf) -> Self {
        JsonSlot { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Move a malformed slot aside so the next save starts clean, keeping
    /// the bad bytes around for inspection.
    fn quarantine(&self) {
        let aside = self.path.with_extension("json.corrupt");
        if let Err(e) = std::fs::rename(&self.path, &aside) {
            warn!("could not quarantine malformed journal file: {e}");
        }
    }
}

impl StorageSlot for JsonSlot {
    fn load(&self) -> JournalResult<Vec<MemoryEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        match decode(&contents) {
            Ok(events) => {
                debug!("loaded {} events from {}", events.len(), self.path.display());
                Ok(events)
            }
            Err(e) => {
                warn!(
                    "discarding malformed journal data at {}: {e}",
                    self.path.display()
                );
                self.quarantine();
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, events: &[MemoryEvent]) -> JournalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, encode(events)?)?;
        Ok(())
    }
}

/// An in-process slot. Runs the same codec as [`JsonSlot`] but keeps the
/// encoded text in memory, so the store works where no durable backend is
/// available (and in tests).
#[derive(Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> JournalResult<Vec<MemoryEvent>> {
        match self.value.lock().unwrap_or_else(|e| e.into_inner()).as_deref() {
            Some(text) => decode(text),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, events: &[MemoryEvent]) -> JournalResult<()> {
        let encoded = encode(events)?;
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;
    use chrono::NaiveDate;

    fn sample_events() -> Vec<MemoryEvent> {
        let trip = MemoryEvent::from_draft(EventDraft {
            title: "Trip".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
            description: Some("Coast".to_string()),
            photos: vec!["data:image/png;base64,cDE=".to_string()],
        });
        let party = MemoryEvent::from_draft(EventDraft {
            title: "Party".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 15),
            description: None,
            photos: vec![
                "data:image/png;base64,cDI=".to_string(),
                "data:image/png;base64,cDM=".to_string(),
            ],
        });
        vec![trip, party]
    }

    // --- codec ---

    #[test]
    fn round_trip_preserves_fields() {
        let events = sample_events();
        let decoded = decode(&encode(&events).unwrap()).unwrap();
        assert_eq!(decoded, events);
    }

    #[test]
    fn round_trip_empty_list() {
        let decoded = decode(&encode(&[]).unwrap()).unwrap();
        assert!(decoded.is_empty());
    }

    // --- JsonSlot ---

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonSlot::new(dir.path().join("events.json"));
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonSlot::new(dir.path().join("events.json"));
        let events = sample_events();
        slot.save(&events).unwrap();
        assert_eq!(slot.load().unwrap(), events);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let slot = JsonSlot::new(dir.path().join("nested/deeper/events.json"));
        slot.save(&sample_events()).unwrap();
        assert!(slot.path().exists());
    }

    #[test]
    fn malformed_file_quarantined_and_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let slot = JsonSlot::new(path.clone());
        assert!(slot.load().unwrap().is_empty());
        assert!(!path.exists());
        assert!(dir.path().join("events.json.corrupt").exists());
    }

    // --- MemorySlot ---

    #[test]
    fn memory_slot_round_trips() {
        let slot = MemorySlot::default();
        assert!(slot.load().unwrap().is_empty());

        let events = sample_events();
        slot.save(&events).unwrap();
        assert_eq!(slot.load().unwrap(), events);
    }
}
