//! The gallery listing: all events, most recent date first.

use anyhow::Result;
use memoir_core::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &EventStore) -> Result<()> {
    if store.is_empty() {
        println!("{}", "No memories yet. Record one with `memoir add`.".dimmed());
        return Ok(());
    }

    for event in store.sorted_events() {
        println!("{}", event.render());
    }

    Ok(())
}
