//! netcheck verification oracle
//!
//! A library of independent postcondition checks for distributed algorithms
//! executed over a simulated process network. Each check consumes a
//! stabilized [`netcheck_net::Network`] snapshot read-only and either
//! returns `Ok(())` (pass) or fails with a [`CheckError`] identifying the
//! process and invariant that was violated.
//!
//! # Families
//!
//! - **Structural**: leader election, broadcast convergence, BFS spanning
//!   tree (with or without child back-edges), Luby MIS
//! - **Consensus**: plain agreement, value-domain constraints, default
//!   value, no-consensus, bounded-failure thresholds, ring-specific
//!   failure propagation, all-failed / all-alive
//!
//! # Usage
//!
//! ```ignore
//! use netcheck_core::checks::check_leader_election;
//!
//! let network = /* produced by the simulation engine */;
//! check_leader_election(&network)?;
//! ```
//!
//! Checks are synchronous, allocate only local accumulators, and never
//! mutate process state, so separate networks can be checked concurrently
//! without coordination.

pub mod checks;
mod check_id;
mod error;
mod report;

pub use check_id::CheckId;
pub use error::CheckError;
pub use report::{ReportConfig, Reporter};
