//! State for the page content cache.

use crate::store::StateRecord;

/// Free-form page content returned by the gateway, keyed by section name.
pub type ContentModel = serde_json::Map<String, serde_json::Value>;

/// Lifecycle of one cached entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    /// A fetch is in flight.
    Loading,
    /// The fetch settled with a non-empty payload.
    Loaded,
    /// The fetch settled with an empty payload.
    Empty,
    /// The fetch settled with a failure.
    Error,
}

/// One cached piece of page content.
///
/// Entries are only ever produced by the constructors below, which derive
/// the status from the payload at write time. A reader can therefore trust
/// the status without re-inspecting the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub key: String,
    pub model: Option<ContentModel>,
    pub status: ContentStatus,
    /// Cause of the last failure, present only with [`ContentStatus::Error`].
    pub message: Option<String>,
    /// Bumped by every fetch launched for this key. A completion captured
    /// under an older generation no longer applies.
    pub generation: u64,
}

impl ContentEntry {
    /// Entry for a fetch that has just been launched.
    pub fn loading(key: impl Into<String>, generation: u64) -> Self {
        Self {
            key: key.into(),
            model: None,
            status: ContentStatus::Loading,
            message: None,
            generation,
        }
    }

    /// Entry for a settled fetch. An empty payload settles as `Empty`.
    pub fn from_model(key: impl Into<String>, model: ContentModel, generation: u64) -> Self {
        let status = if model.is_empty() {
            ContentStatus::Empty
        } else {
            ContentStatus::Loaded
        };
        Self {
            key: key.into(),
            model: Some(model),
            status,
            message: None,
            generation,
        }
    }

    /// Entry for a failed fetch.
    pub fn error(key: impl Into<String>, message: impl Into<String>, generation: u64) -> Self {
        Self {
            key: key.into(),
            model: None,
            status: ContentStatus::Error,
            message: Some(message.into()),
            generation,
        }
    }
}

/// Feature state for all cached page content.
///
/// There is no store-wide loading flag; every entry tracks its own
/// lifecycle independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentState {
    pub entries: Vec<ContentEntry>,
}

impl StateRecord for ContentState {}

impl ContentState {
    /// Entry for `key`, if anything has been requested for it.
    pub fn entry(&self, key: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn status(&self, key: &str) -> Option<ContentStatus> {
        self.entry(key).map(|entry| entry.status)
    }

    pub fn model(&self, key: &str) -> Option<&ContentModel> {
        self.entry(key).and_then(|entry| entry.model.as_ref())
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.status(key) == Some(ContentStatus::Loading)
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        self.status(key) == Some(ContentStatus::Loaded)
    }

    pub fn is_empty(&self, key: &str) -> bool {
        self.status(key) == Some(ContentStatus::Empty)
    }

    pub fn is_error(&self, key: &str) -> bool {
        self.status(key) == Some(ContentStatus::Error)
    }

    /// Cause of the last failure for `key`, if it is in the error state.
    pub fn error_message(&self, key: &str) -> Option<&str> {
        self.entry(key).and_then(|entry| entry.message.as_deref())
    }

    /// Fetch lineage for `key`. Keys nothing was ever launched for sit at
    /// zero.
    pub fn generation(&self, key: &str) -> u64 {
        self.entry(key).map_or(0, |entry| entry.generation)
    }
}
