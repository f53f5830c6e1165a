//! Entry identifiers
//!
//! Every collection entry carries an `EntryId` assigned when the entry is
//! created and never reassigned. Ids are used both as lookup keys for
//! update/remove operations and as stable list keys for whatever surface
//! renders the entries, so they only need to be unique within one editing
//! session, not globally.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Per-process disambiguator so ids minted in the same millisecond differ
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Identifier of a collection entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mint a fresh identifier
    ///
    /// The id is a UTC millisecond timestamp followed by a process-wide
    /// counter. The counter alone guarantees uniqueness within a session;
    /// the timestamp keeps ids roughly ordered by creation time.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{}-{}", millis, seq))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<EntryId> = (0..1000).map(|_| EntryId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_is_non_empty() {
        assert!(!EntryId::generate().as_str().is_empty());
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = EntryId::generate();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_from_str() {
        let id1: EntryId = "1".into();
        let id2: EntryId = String::from("1").into();
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "1");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id: EntryId = "42-7".into();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42-7\"");

        let parsed: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
