//! The detail view for a single event.

use anyhow::{Context, Result};
use memoir_core::EventStore;
use owo_colors::OwoColorize;

use super::{list, resolve_id};
use crate::render::photo_label;

pub fn run(store: &EventStore, id: &str) -> Result<()> {
    // Unknown ids fall back to the listing, like a redirect to the index
    let Some(id) = resolve_id(store, id)? else {
        eprintln!(
            "{}",
            format!("No event matching \"{}\" — showing all events.", id).yellow()
        );
        return list::run(store);
    };

    let event = store.get(&id).context("event vanished after lookup")?;

    println!("{}", event.title.bold());
    println!("  {}  {}", "Date:".dimmed(), event.date.format("%Y-%m-%d"));
    if let Some(description) = &event.description {
        println!("  {}  {}", "Notes:".dimmed(), description);
    }
    println!(
        "  {}  {}  {}",
        "Photos:".dimmed(),
        photo_label(event.photos.len()),
        format!("(open with `memoir view {}`)", event.id).dimmed()
    );
    println!(
        "  {}  {}",
        "Added:".dimmed(),
        event.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("  {}  {}", "Id:".dimmed(), event.id);

    Ok(())
}
