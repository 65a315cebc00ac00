//! Predicate checks over a stabilized network.
//!
//! Each check is independent and read-only: it scans the snapshot once (or
//! twice, when an aggregate such as the agreed decision must be computed
//! first) and either returns `Ok(())` or fails with the first violated
//! invariant. Absence of failure is the pass signal.

mod consensus;
mod structural;

pub use consensus::{
    check_all_alive, check_all_failed, check_bounded_failures, check_consensus,
    check_consensus_in_value_set, check_consensus_on_default_value, check_no_consensus,
    check_ring_failure_all_fail, check_ring_failure_no_consensus, tally_decisions, DecisionTally,
    FaultRule,
};
pub use structural::{
    check_bfs_tree, check_bfs_tree_with_children, check_broadcast, check_leader_election,
    check_leader_election_with, check_luby_mis,
};
