//! Core types for the memoir journal.
//!
//! This crate provides everything below the UI:
//! - `event` — the `MemoryEvent` model and draft validation
//! - `store` — the canonical event list with change notifications
//! - `slot` — the durable persistence adapter
//! - `journal` — config resolution and store bootstrap
//! - `photo` — base64 data-URI encoding for embedded photos

pub mod error;
pub mod event;
pub mod journal;
pub mod journal_config;
pub mod photo;
pub mod slot;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{JournalError, JournalResult};
pub use event::{EventDraft, MemoryEvent, ValidationError, MAX_PHOTOS};
pub use store::{EventStore, StoreChange};
