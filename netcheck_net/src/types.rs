//! Core types for the process-state contract.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Unique identifier for a simulated process.
///
/// Uses UUID for global uniqueness without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProcessId(pub Uuid);

impl ProcessId {
    /// Creates a new random ProcessId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ProcessId from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a deterministic ProcessId from a topology index.
    ///
    /// Topology builders label processes 0..n with this, so the same
    /// builder call always yields the same identities.
    pub fn from_index(index: u64) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..8].copy_from_slice(&index.to_le_bytes());
        bytes[8..16].copy_from_slice(&index.wrapping_mul(0x517cc1b727220a95).to_le_bytes());
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProcessId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Show first 8 chars for readability
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A value from an algorithm's decision domain.
///
/// Opaque to the oracle: only equality and set membership matter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a consensus-family algorithm at a single process.
///
/// The failure sentinel is a distinct variant, disjoint from the value
/// domain by construction, so no string-identity comparison is possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Decision {
    /// The process decided on a value from the domain.
    Decided(Value),

    /// The process failed before reaching a decision.
    Failed,
}

impl Decision {
    /// Returns the decided value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Decision::Decided(v) => Some(v),
            Decision::Failed => None,
        }
    }

    /// Returns true if this is the failure sentinel.
    pub fn is_failed(&self) -> bool {
        matches!(self, Decision::Failed)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Decided(v) => write!(f, "{}", v),
            Decision::Failed => write!(f, "failed"),
        }
    }
}

/// Role assigned by a leader-election algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Leader,
    NonLeader,
}

/// Parent pointer assigned by a spanning-tree algorithm.
///
/// `Root` is the absence sentinel: the process elected itself root and has
/// no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Parent {
    Root,
    Node(ProcessId),
}

/// Stabilized local state of a process after a simulation run.
///
/// Each field corresponds to a state key some algorithm family writes.
/// `None` means the algorithm never wrote the key; the oracle reports that
/// as a missing-state failure rather than skipping the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessState {
    /// Leader-election outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Role>,

    /// Spanning-tree parent pointer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,

    /// Spanning-tree child back-references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeSet<ProcessId>>,

    /// Maximal-independent-set membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mis: Option<bool>,

    /// Consensus outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,

    /// Broadcast payloads, keyed by attribute name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
}
