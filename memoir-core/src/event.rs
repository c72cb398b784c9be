//! The journal event model.
//!
//! A `MemoryEvent` is the sole persisted entity: a titled, dated memory with
//! an optional description and one to three embedded photos. Events are
//! immutable once created; the only lifecycle operations are creation (via
//! the store, which assigns `id` and `created_at`) and full removal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of photos an event may carry.
pub const MAX_PHOTOS: usize = 3;

/// A recorded memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEvent {
    /// Opaque unique id, stable for the lifetime of the event.
    pub id: String,
    pub title: String,
    /// Calendar date of the memory (no timezone semantics).
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Photos as self-contained base64 data URIs, in selection order.
    pub photos: Vec<String>,
    /// Set once at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

/// Transient form state for an event being created.
///
/// Everything the user supplies; `id` and `created_at` are assigned by the
/// store when the draft is committed.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub photos: Vec<String>,
}

/// A draft that failed validation. Surfaced inline on the creation form;
/// never reaches the stored event list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("a title is required")]
    MissingTitle,

    #[error("a date is required")]
    MissingDate,

    #[error("at least one photo is required")]
    NoPhotos,

    #[error("an event can have at most 3 photos (got {0})")]
    TooManyPhotos(usize),
}

impl EventDraft {
    /// Check the required-field and photo-count constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.date.is_none() {
            return Err(ValidationError::MissingDate);
        }
        if self.photos.is_empty() {
            return Err(ValidationError::NoPhotos);
        }
        if self.photos.len() > MAX_PHOTOS {
            return Err(ValidationError::TooManyPhotos(self.photos.len()));
        }
        Ok(())
    }
}

impl MemoryEvent {
    /// Construct a new event from a validated draft, assigning a fresh id
    /// and the current timestamp.
    pub(crate) fn from_draft(draft: EventDraft) -> Self {
        let description = draft
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        MemoryEvent {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            // validate() guarantees the date is present
            date: draft.date.unwrap_or_default(),
            description,
            photos: draft.photos,
            created_at: Utc::now(),
        }
    }
}
