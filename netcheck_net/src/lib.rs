//! Boundary contract between the external simulation engine and the
//! netcheck verification oracle.
//!
//! The simulation engine runs a distributed algorithm round-by-round and
//! produces a [`Network`]: a fixed-topology collection of [`Process`]
//! handles whose local state has stabilized. This crate owns that snapshot
//! representation plus the handful of things a test harness needs to build
//! one:
//!
//! - Typed process state ([`ProcessState`], [`Decision`], [`Role`],
//!   [`Parent`]) — the oracle reads these, never writes them
//! - [`AlgorithmParams`] — run parameters consumed by consensus checks
//! - Topology builders (rings, lines, complete graphs, random lines)
//! - JSON [`Snapshot`] I/O for transporting a finished run to the CLI
//!
//! Everything here is deterministic: random topologies derive all entropy
//! from a single 64-bit seed, so any failing network is reproducible via
//! its seed number.

mod error;
mod network;
mod params;
mod snapshot;
pub mod topology;
mod types;

pub use error::SnapshotError;
pub use network::{Network, Process};
pub use params::AlgorithmParams;
pub use snapshot::Snapshot;
pub use types::{Decision, Parent, ProcessId, ProcessState, Role, Value};
