//! Failure taxonomy for the verification oracle.

use netcheck_net::{ProcessId, Value};
use thiserror::Error;

/// A violated postcondition.
///
/// Every variant is an assertion-style hard failure: the first violation
/// terminates the check, and the message identifies the process and the
/// invariant involved with expected-vs-actual detail. The calling harness
/// reports one `CheckError` as one failed test case.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A required state key was never written by the algorithm
    #[error("process {process}: required state key '{key}' was never written")]
    MissingState { process: ProcessId, key: String },

    /// Wrong count of processes satisfying a structural property
    #[error("expected {expected} {property}, found {actual}")]
    Cardinality {
        property: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Processes disagree on a value the algorithm makes uniform
    #[error("process {process} holds '{actual}', expected '{expected}'")]
    Disagreement {
        process: ProcessId,
        expected: String,
        actual: String,
    },

    /// An agreed value lies outside the declared legal value set
    #[error("value '{value}' is not in the legal value set {{{domain}}}")]
    DomainViolation { value: Value, domain: String },

    /// Failure count is inconsistent with the tolerated range
    #[error("{detail} ({failed} failed, threshold {tolerated})")]
    ThresholdViolation {
        failed: usize,
        tolerated: usize,
        detail: String,
    },

    /// A state field references a process outside the network
    #[error("process {process}: '{field}' references {referenced}, which is not in the network")]
    DanglingReference {
        process: ProcessId,
        referenced: ProcessId,
        field: &'static str,
    },

    /// Two adjacent processes both claim MIS membership
    #[error("MIS not independent: {process} and its neighbor {neighbor} are both members")]
    NotIndependent {
        process: ProcessId,
        neighbor: ProcessId,
    },

    /// An excluded process has no MIS neighbor
    #[error("MIS not maximal: {process} is excluded but has no member neighbor")]
    NotMaximal { process: ProcessId },

    /// A parent pointer without the matching child registration
    #[error("tree asymmetric: {process} points to parent {parent} but is not in its children")]
    MissingBackEdge {
        process: ProcessId,
        parent: ProcessId,
    },

    /// A process decided a real value where only the failure sentinel is allowed
    #[error("process {process} decided '{value}' where no real decision was expected")]
    UnexpectedDecision { process: ProcessId, value: Value },

    /// The algorithm descriptor lacks a parameter the check needs
    #[error("algorithm params missing required '{param}'")]
    MissingParam { param: &'static str },
}

impl CheckError {
    /// Creates a missing-state failure.
    pub fn missing(process: ProcessId, key: impl Into<String>) -> Self {
        Self::MissingState {
            process,
            key: key.into(),
        }
    }

    /// Creates a cardinality failure.
    pub fn cardinality(property: &'static str, expected: usize, actual: usize) -> Self {
        Self::Cardinality {
            property,
            expected,
            actual,
        }
    }
}
