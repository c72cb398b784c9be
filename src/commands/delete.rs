//! Delete an event, with confirmation.

use anyhow::{Context, Result};
use dialoguer::Confirm;
use memoir_core::EventStore;
use owo_colors::OwoColorize;

use super::resolve_id;

pub fn run(store: &mut EventStore, id: &str, yes: bool) -> Result<()> {
    // Deleting something that isn't there is not an error
    let Some(id) = resolve_id(store, id)? else {
        println!("{}", format!("No event matching \"{}\" — nothing to delete.", id).dimmed());
        return Ok(());
    };

    let title = store
        .get(&id)
        .context("event vanished after lookup")?
        .title
        .clone();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete \"{}\"?", title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled.".dimmed());
            return Ok(());
        }
    }

    store.delete(&id)?;
    println!("{}", format!("  Deleted: {}", title).green());

    Ok(())
}
