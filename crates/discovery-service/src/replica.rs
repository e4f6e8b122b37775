//! Replica-set parsing and role derivation.
//!
//! A user's replica assignment is stored as a single delimited endpoint list
//! (`"https://a,https://b,https://c"`). The first entry is the user's primary
//! replica; every following entry is a secondary in priority order. This
//! module turns that raw list into a typed [`ReplicaSet`] so the rest of the
//! service never re-implements the split.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Delimiter used by the stored endpoint list format.
pub const DEFAULT_ENDPOINT_DELIMITER: char = ',';

/// Role of an endpoint within a user's replica set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicaRole {
    /// The user's primary replica (first entry in the list).
    Primary,
    /// A secondary replica; the index is 0-based priority order.
    Secondary(usize),
}

/// A user's ordered replica assignment, parsed from a delimited endpoint list.
///
/// Segments are trimmed of surrounding whitespace and empty segments are
/// dropped: an empty segment is never a configured replica. Endpoint syntax
/// is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplicaSet {
    endpoints: Vec<String>,
}

impl ReplicaSet {
    /// Parse an endpoint list using the default `,` delimiter.
    pub fn parse(list: &str) -> Self {
        Self::parse_with_delimiter(list, DEFAULT_ENDPOINT_DELIMITER)
    }

    /// Parse an endpoint list with a custom delimiter.
    ///
    /// Empty or all-delimiter input yields an empty set: no primary, no
    /// secondaries.
    pub fn parse_with_delimiter(list: &str, delimiter: char) -> Self {
        let endpoints = list
            .split(delimiter)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();

        ReplicaSet { endpoints }
    }

    /// The primary replica endpoint, if the user has any assignment.
    pub fn primary(&self) -> Option<&str> {
        self.endpoints.first().map(String::as_str)
    }

    /// Secondary replica endpoints in priority order.
    pub fn secondaries(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().skip(1).map(String::as_str)
    }

    /// The nth secondary (0-based), if configured.
    pub fn secondary(&self, n: usize) -> Option<&str> {
        self.endpoints.get(n.checked_add(1)?).map(String::as_str)
    }

    /// Whether at least one secondary replica is configured.
    pub fn has_secondary(&self) -> bool {
        self.endpoints.len() > 1
    }

    /// Derive the role of `endpoint` within this replica set.
    ///
    /// Returns `None` if the endpoint is not part of the set. When an
    /// endpoint appears more than once, the earliest position wins, so a
    /// primary occurrence beats any secondary occurrence.
    pub fn role_of(&self, endpoint: &str) -> Option<ReplicaRole> {
        match self.endpoints.iter().position(|e| e == endpoint)? {
            0 => Some(ReplicaRole::Primary),
            n => Some(ReplicaRole::Secondary(n - 1)),
        }
    }

    /// All endpoints in order, primary first.
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(String::as_str)
    }

    /// Number of endpoints in the set.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the user has no replica assignment at all.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Serializes as `{ "primary": ..., "secondaries": [...] }` so query results
/// can be handed straight to an API layer.
impl Serialize for ReplicaSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReplicaSet", 2)?;
        state.serialize_field("primary", &self.primary())?;
        state.serialize_field("secondaries", &self.secondaries().collect::<Vec<_>>())?;
        state.end()
    }
}
