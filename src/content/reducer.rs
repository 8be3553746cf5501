//! Reducer for the page content cache.

use crate::store::Reducer;

use super::action::ContentAction;
use super::state::{ContentEntry, ContentState};

pub struct ContentReducer;

impl Reducer for ContentReducer {
    type State = ContentState;
    type Action = ContentAction;

    fn reduce(state: ContentState, action: ContentAction) -> ContentState {
        match action {
            // Every launch bumps the key's generation; settling keeps it,
            // so the entry always names the fetch that produced it.
            ContentAction::FetchStarted { key } => {
                let generation = state.generation(&key) + 1;
                upsert(state, ContentEntry::loading(key, generation))
            }
            ContentAction::FetchSucceeded { key, model } => {
                let generation = state.generation(&key);
                upsert(state, ContentEntry::from_model(key, model, generation))
            }
            ContentAction::FetchFailed { key, cause } => {
                let generation = state.generation(&key);
                upsert(state, ContentEntry::error(key, cause, generation))
            }
        }
    }
}

/// Remove any previous entry for the key, then append the new one. Keys
/// stay unique and an entry is always replaced wholesale.
fn upsert(state: ContentState, entry: ContentEntry) -> ContentState {
    let mut entries: Vec<ContentEntry> = state
        .entries
        .into_iter()
        .filter(|existing| existing.key != entry.key)
        .collect();
    entries.push(entry);
    ContentState { entries }
}
