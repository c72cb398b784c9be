pub mod add;
pub mod delete;
pub mod list;
pub mod show;
pub mod view;

use anyhow::Result;
use memoir_core::EventStore;

/// Resolve a user-supplied id (full or unique prefix) to a stored event id.
///
/// Returns `None` when nothing matches. Ambiguous prefixes are an error so
/// we never act on the wrong event.
pub fn resolve_id(store: &EventStore, input: &str) -> Result<Option<String>> {
    if store.get(input).is_some() {
        return Ok(Some(input.to_string()));
    }

    let matches: Vec<&str> = store
        .events()
        .iter()
        .filter(|e| e.id.starts_with(input))
        .map(|e| e.id.as_str())
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].to_string())),
        _ => anyhow::bail!(
            "Id \"{}\" is ambiguous, matches: {}",
            input,
            matches.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use memoir_core::EventDraft;

    fn store_with_event() -> (EventStore, String) {
        let mut store = EventStore::in_memory();
        let event = store
            .add(EventDraft {
                title: "Trip".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 1),
                description: None,
                photos: vec!["data:image/png;base64,cDE=".to_string()],
            })
            .unwrap();
        (store, event.id)
    }

    #[test]
    fn resolves_full_id() {
        let (store, id) = store_with_event();
        assert_eq!(resolve_id(&store, &id).unwrap(), Some(id));
    }

    #[test]
    fn resolves_unique_prefix() {
        let (store, id) = store_with_event();
        assert_eq!(resolve_id(&store, &id[..8]).unwrap(), Some(id));
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let (store, _) = store_with_event();
        assert_eq!(resolve_id(&store, "xyz").unwrap(), None);
    }
}
