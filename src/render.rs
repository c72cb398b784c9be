//! TUI rendering for memoir types.
//!
//! Extension traits that add colored terminal rendering to memoir-core
//! types using owo_colors.

use memoir_core::MemoryEvent;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for MemoryEvent {
    fn render(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            self.date.format("%Y-%m-%d").to_string().cyan(),
            self.title.bold(),
            photo_label(self.photos.len()).dimmed(),
            short_id(&self.id).dimmed(),
        )
    }
}

/// Label like "(2 photos)".
pub fn photo_label(count: usize) -> String {
    format!("({} {})", count, pluralize("photo", count))
}

/// The leading chunk of a UUID, enough to identify an event on screen.
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "photo" => "photos",
            _ => word,
        }
    }
}
