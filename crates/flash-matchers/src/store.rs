//! Flash and session state read by the matcher.
//!
//! The matcher never touches a live framework store. Controllers hand it a
//! copied [`FlashStore`] snapshot plus read access to raw session values,
//! where the prior-cycle flash snapshot lives under [`FLASH_SESSION_KEY`]
//! as a JSON object of string keys to string messages.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Session key under which frameworks persist the prior-cycle flash snapshot.
pub const FLASH_SESSION_KEY: &str = "flash";

/// A snapshot of flash messages, keyed by flash key (`"notice"`, `"alert"`, ...).
///
/// Entries are kept ordered so mapping dumps in failure messages are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashStore {
    entries: BTreeMap<String, String>,
}

impl FlashStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message under a key, replacing any previous message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    /// Number of messages in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a message by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the messages, ignoring keys.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Iterate over key/message pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }

    /// Messages set for the current render only.
    ///
    /// Framework convention: the prior-cycle snapshot minus every key the
    /// live flash still carries approximates what was queued through the
    /// immediate, non-persisting path. When the snapshot is captured
    /// relative to handler execution is a property of the web framework,
    /// not of this crate.
    #[must_use]
    pub fn now_difference(prior: &Self, live: &Self) -> Self {
        let entries = prior
            .entries
            .iter()
            .filter(|(key, _)| !live.contains_key(key))
            .map(|(key, message)| (key.clone(), message.clone()))
            .collect();
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlashStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, message)| (key.into(), message.into()))
            .collect();
        Self { entries }
    }
}

impl fmt::Display for FlashStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {message:?}")?;
        }
        write!(f, "}}")
    }
}

/// Raw session storage: string keys to arbitrary JSON values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    values: HashMap<String, Value>,
}

impl SessionStore {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw value, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Look up a raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Decode the prior-cycle flash snapshot stored under
    /// [`FLASH_SESSION_KEY`], or an empty store when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Snapshot`] when the stored value is not a
    /// string-to-string object.
    ///
    /// [`FlashError::Snapshot`]: crate::error::FlashError::Snapshot
    pub fn flash_snapshot(&self) -> Result<FlashStore> {
        match self.values.get(FLASH_SESSION_KEY) {
            None => Ok(FlashStore::new()),
            Some(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }
}

/// Read access to the controller state the matcher inspects.
///
/// Implementations return an owned flash snapshot so the matcher never
/// aliases live framework state. A controller without flash or session
/// support reports the corresponding error instead of an empty store; the
/// matcher surfaces that as misuse rather than as a non-match.
pub trait FlashState {
    /// A copy of the flash mapping pending for the next request.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::FlashUnsupported`] when the controller has no
    /// flash store.
    ///
    /// [`FlashError::FlashUnsupported`]: crate::error::FlashError::FlashUnsupported
    fn flash(&self) -> Result<FlashStore>;

    /// The raw session storage.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::SessionUnsupported`] when the controller has
    /// no session.
    ///
    /// [`FlashError::SessionUnsupported`]: crate::error::FlashError::SessionUnsupported
    fn session(&self) -> Result<&SessionStore>;
}
