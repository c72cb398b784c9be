//! The event creation form.
//!
//! Collects a draft (title, date, description, photos), validates it, and
//! commits it to the store. Missing fields are prompted for interactively;
//! validation failures surface inline and never reach the store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dialoguer::Input;
use memoir_core::{photo, EventDraft, EventStore, MAX_PHOTOS};
use owo_colors::OwoColorize;

use crate::render::short_id;

pub fn run(
    store: &mut EventStore,
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    photo_paths: Vec<PathBuf>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none() || photo_paths.is_empty();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date ---
    let date = if let Some(d) = date {
        parse_date(&d)?
    } else {
        prompt_with_retry("  When? (e.g. 2024-05-01, \"last saturday\")", parse_date)?
    };

    // --- Description ---
    let description = if let Some(desc) = description {
        if desc.trim().is_empty() { None } else { Some(desc) }
    } else if interactive {
        let desc: String = Input::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if desc.trim().is_empty() { None } else { Some(desc) }
    } else {
        None
    };

    // --- Photos ---
    // The 3-photo ceiling is checked here on the form, and again by the
    // store itself, so it holds even for callers that bypass this form.
    if photo_paths.len() > MAX_PHOTOS {
        eprintln!(
            "  {}",
            format!(
                "an event can have at most {} photos (got {})",
                MAX_PHOTOS,
                photo_paths.len()
            )
            .red()
        );
        anyhow::bail!("too many photos");
    }

    let photo_paths = if photo_paths.is_empty() && interactive {
        prompt_photo_paths()?
    } else {
        photo_paths
    };

    // Photos keep the order they were selected in
    let photos = photo_paths
        .iter()
        .map(|p| {
            photo::read_as_data_uri(p).with_context(|| format!("Could not read {}", p.display()))
        })
        .collect::<Result<Vec<String>>>()?;

    let draft = EventDraft {
        title,
        date: Some(date),
        description,
        photos,
    };

    if let Err(e) = draft.validate() {
        eprintln!("  {}", e.to_string().red());
        anyhow::bail!("invalid event");
    }

    let event = store.add(draft)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Saved: {} ({})  {}", event.title, event.date, short_id(&event.id)).green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDate>
where
    F: Fn(&str) -> Result<NaiveDate>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for photo paths one at a time, up to the ceiling. A blank entry
/// finishes early (at least one photo is still required by validation).
fn prompt_photo_paths() -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    while paths.len() < MAX_PHOTOS {
        let prompt = if paths.is_empty() {
            format!("  Photo {} of up to {}", paths.len() + 1, MAX_PHOTOS)
        } else {
            format!("  Photo {} of up to {} (blank to finish)", paths.len() + 1, MAX_PHOTOS)
        };

        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;

        if input.trim().is_empty() {
            break;
        }
        paths.push(PathBuf::from(input.trim()));
    }

    Ok(paths)
}

/// Parse a calendar date: ISO `YYYY-MM-DD` first, then natural language.
fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    fuzzydate::parse(input)
        .map(|dt| dt.date())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))
}
