//! The canonical in-memory event list.
//!
//! The store exclusively owns the list of events. Mutations go through
//! [`EventStore::add`] and [`EventStore::delete`], both of which persist the
//! full list to the backing slot before returning and then notify
//! subscribers, so consumers never have to poll.

use tokio::sync::broadcast;

use crate::error::JournalResult;
use crate::event::{EventDraft, MemoryEvent};
use crate::slot::{MemorySlot, StorageSlot};

/// Broadcast channel capacity for change notifications.
const CHANGE_CAPACITY: usize = 64;

/// A change to the stored event list.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    Added { id: String },
    Deleted { id: String },
}

/// The authoritative collection of journal events.
pub struct EventStore {
    events: Vec<MemoryEvent>,
    slot: Box<dyn StorageSlot>,
    changes: broadcast::Sender<StoreChange>,
}

impl EventStore {
    /// Open a store over the given slot, restoring any persisted events.
    pub fn open(slot: Box<dyn StorageSlot>) -> JournalResult<Self> {
        let events = slot.load()?;
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Ok(EventStore {
            events,
            slot,
            changes,
        })
    }

    /// An ephemeral store that never touches disk. Used when no durable
    /// backend is available, and in tests.
    pub fn in_memory() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        EventStore {
            events: Vec::new(),
            slot: Box::new(MemorySlot::default()),
            changes,
        }
    }

    /// Commit a draft: validate it, assign a fresh id and creation
    /// timestamp, append it, and persist.
    ///
    /// Validation happens here (not only in the form) so the photo ceiling
    /// holds for every caller. Returns the created event.
    pub fn add(&mut self, draft: EventDraft) -> JournalResult<MemoryEvent> {
        draft.validate()?;

        let event = MemoryEvent::from_draft(draft);
        self.events.push(event.clone());
        if let Err(e) = self.slot.save(&self.events) {
            // Keep memory and disk in agreement: a failed save undoes the append
            self.events.pop();
            return Err(e);
        }

        // No subscribers is fine
        let _ = self.changes.send(StoreChange::Added {
            id: event.id.clone(),
        });
        Ok(event)
    }

    /// Remove the event with the given id, if present, and persist.
    ///
    /// Deleting an absent id is a silent no-op (returns `false`), so the
    /// operation is idempotent.
    pub fn delete(&mut self, id: &str) -> JournalResult<bool> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let removed = self.events.remove(index);
        if let Err(e) = self.slot.save(&self.events) {
            // Failed save undoes the removal, back at its old position
            self.events.insert(index, removed);
            return Err(e);
        }

        let _ = self.changes.send(StoreChange::Deleted { id: id.to_string() });
        Ok(true)
    }

    /// Look up a single event by id.
    pub fn get(&self, id: &str) -> Option<&MemoryEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// The raw list, in insertion order.
    pub fn events(&self) -> &[MemoryEvent] {
        &self.events
    }

    /// All events ordered by date descending (most recent first). The sort
    /// is stable, so events sharing a date keep their insertion order.
    pub fn sorted_events(&self) -> Vec<&MemoryEvent> {
        let mut sorted: Vec<&MemoryEvent> = self.events.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Subscribe to change notifications. Receivers see every mutation made
    /// after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
