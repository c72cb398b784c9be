//! The photo viewer.
//!
//! Decodes an event's photos to temp files and opens them in the system
//! image viewer, cycling through them by index with wrap-around at both
//! ends.

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Select;
use memoir_core::{photo, EventStore};
use owo_colors::OwoColorize;

use super::{list, resolve_id};

/// Cycling cursor over an event's photo sequence. Pure UI state: an index
/// that wraps at both ends.
struct PhotoPager {
    len: usize,
    index: usize,
}

impl PhotoPager {
    fn new(len: usize) -> Self {
        PhotoPager { len, index: 0 }
    }

    fn current(&self) -> usize {
        self.index
    }

    fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }
}

pub fn run(store: &EventStore, id: &str) -> Result<()> {
    let Some(id) = resolve_id(store, id)? else {
        eprintln!(
            "{}",
            format!("No event matching \"{}\" — showing all events.", id).yellow()
        );
        return list::run(store);
    };

    let event = store.get(&id).context("event vanished after lookup")?;

    // A hand-edited journal file can hold an event with no photos
    if event.photos.is_empty() {
        println!(
            "{}",
            format!("\"{}\" has no photos to view.", event.title).dimmed()
        );
        return Ok(());
    }

    // Decode everything up front; the temp dir lives until the viewer closes
    let dir = tempfile::tempdir()?;
    let mut files: Vec<PathBuf> = Vec::new();
    for (i, uri) in event.photos.iter().enumerate() {
        let (mime, bytes) = photo::decode_data_uri(uri)
            .with_context(|| format!("Photo {} of \"{}\" is unreadable", i + 1, event.title))?;
        let path = dir
            .path()
            .join(format!("photo-{}.{}", i + 1, photo::extension_for_mime(&mime)));
        std::fs::write(&path, bytes)?;
        files.push(path);
    }

    let mut pager = PhotoPager::new(files.len());
    loop {
        open::that(&files[pager.current()])
            .with_context(|| "Could not open the system image viewer")?;

        if files.len() == 1 {
            break;
        }

        println!(
            "  {} — photo {} of {}",
            event.title.bold(),
            pager.current() + 1,
            files.len()
        );
        let choice = Select::new()
            .items(&["Next photo", "Previous photo", "Close"])
            .default(0)
            .interact()?;
        match choice {
            0 => pager.next(),
            1 => pager.prev(),
            _ => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_wraps_forward() {
        let mut pager = PhotoPager::new(3);
        pager.next();
        pager.next();
        assert_eq!(pager.current(), 2);
        pager.next();
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn pager_wraps_backward() {
        let mut pager = PhotoPager::new(3);
        pager.prev();
        assert_eq!(pager.current(), 2);
        pager.prev();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn single_photo_pager_stays_put() {
        let mut pager = PhotoPager::new(1);
        pager.next();
        assert_eq!(pager.current(), 0);
        pager.prev();
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn zero_photo_event_is_a_friendly_noop() {
        use memoir_core::slot::JsonSlot;

        // Journal files can be hand-edited; photos may be empty on load
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id":"evt-1","title":"Trip","date":"2024-05-01","photos":[],"createdAt":"2024-05-01T12:00:00Z"}]"#,
        )
        .unwrap();

        let store = EventStore::open(Box::new(JsonSlot::new(path))).unwrap();
        assert_eq!(store.len(), 1);
        run(&store, "evt-1").unwrap();
    }
}
