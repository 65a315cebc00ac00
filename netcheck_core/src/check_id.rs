//! Check identifiers for harness and CLI dispatch.

/// Names every predicate the oracle exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckId {
    /// Exactly one leader, n-1 non-leaders
    LeaderElection,

    /// One attribute identical across all processes
    Broadcast,

    /// Unique root, resolvable parent pointers
    BfsTree,

    /// BFS tree plus child back-edge consistency
    BfsTreeWithChildren,

    /// Independent and maximal MIS membership
    LubyMis,

    /// Survivors agree on one real value
    Consensus,

    /// Consensus with the agreed value inside V
    ConsensusInValueSet,

    /// Every process decided the default value v_0
    ConsensusOnDefaultValue,

    /// No agreement on a real value
    NoConsensus,

    /// Failure count vs. the tolerance threshold f
    BoundedFailures,

    /// Ring: any failure leaves the tail undecided
    RingFailureNoConsensus,

    /// Ring: any failure propagates to every process
    RingFailureAllFail,

    /// Every process failed
    AllFailed,

    /// No process failed
    AllAlive,
}

impl CheckId {
    /// Returns a list of all checks.
    pub fn all() -> Vec<CheckId> {
        vec![
            CheckId::LeaderElection,
            CheckId::Broadcast,
            CheckId::BfsTree,
            CheckId::BfsTreeWithChildren,
            CheckId::LubyMis,
            CheckId::Consensus,
            CheckId::ConsensusInValueSet,
            CheckId::ConsensusOnDefaultValue,
            CheckId::NoConsensus,
            CheckId::BoundedFailures,
            CheckId::RingFailureNoConsensus,
            CheckId::RingFailureAllFail,
            CheckId::AllFailed,
            CheckId::AllAlive,
        ]
    }

    /// Returns the check name.
    pub fn name(&self) -> &'static str {
        match self {
            CheckId::LeaderElection => "leader_election",
            CheckId::Broadcast => "broadcast",
            CheckId::BfsTree => "bfs_tree",
            CheckId::BfsTreeWithChildren => "bfs_tree_with_children",
            CheckId::LubyMis => "luby_mis",
            CheckId::Consensus => "consensus",
            CheckId::ConsensusInValueSet => "consensus_in_value_set",
            CheckId::ConsensusOnDefaultValue => "consensus_on_default_value",
            CheckId::NoConsensus => "no_consensus",
            CheckId::BoundedFailures => "bounded_failures",
            CheckId::RingFailureNoConsensus => "ring_failure_no_consensus",
            CheckId::RingFailureAllFail => "ring_failure_all_fail",
            CheckId::AllFailed => "all_failed",
            CheckId::AllAlive => "all_alive",
        }
    }

    /// Returns a description of the check.
    pub fn description(&self) -> &'static str {
        match self {
            CheckId::LeaderElection => "exactly one process elected leader, all others non-leader",
            CheckId::Broadcast => "a broadcast attribute is identical on every process",
            CheckId::BfsTree => "unique root and parent pointers inside the network",
            CheckId::BfsTreeWithChildren => "BFS tree plus parent/child back-edge consistency",
            CheckId::LubyMis => "MIS membership is independent and maximal",
            CheckId::Consensus => "all surviving processes decided the same real value",
            CheckId::ConsensusInValueSet => "consensus with the agreed value inside V",
            CheckId::ConsensusOnDefaultValue => "every process decided the default value v_0",
            CheckId::NoConsensus => "no agreement on a real value was reached",
            CheckId::BoundedFailures => "agreement outcome consistent with the fault threshold f",
            CheckId::RingFailureNoConsensus => "any ring failure leaves the last process undecided",
            CheckId::RingFailureAllFail => "any ring failure propagates to every process",
            CheckId::AllFailed => "every process failed",
            CheckId::AllAlive => "no process failed",
        }
    }

    /// Returns true if the check consumes an algorithm descriptor.
    pub fn requires_params(&self) -> bool {
        matches!(
            self,
            CheckId::ConsensusInValueSet
                | CheckId::ConsensusOnDefaultValue
                | CheckId::BoundedFailures
        )
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leader_election" | "leaderelection" => Ok(CheckId::LeaderElection),
            "broadcast" => Ok(CheckId::Broadcast),
            "bfs_tree" | "bfs" => Ok(CheckId::BfsTree),
            "bfs_tree_with_children" | "bfs_children" => Ok(CheckId::BfsTreeWithChildren),
            "luby_mis" | "mis" => Ok(CheckId::LubyMis),
            "consensus" => Ok(CheckId::Consensus),
            "consensus_in_value_set" => Ok(CheckId::ConsensusInValueSet),
            "consensus_on_default_value" | "consensus_on_default" => {
                Ok(CheckId::ConsensusOnDefaultValue)
            }
            "no_consensus" => Ok(CheckId::NoConsensus),
            "bounded_failures" | "some_fail" => Ok(CheckId::BoundedFailures),
            "ring_failure_no_consensus" => Ok(CheckId::RingFailureNoConsensus),
            "ring_failure_all_fail" => Ok(CheckId::RingFailureAllFail),
            "all_failed" => Ok(CheckId::AllFailed),
            "all_alive" => Ok(CheckId::AllAlive),
            _ => Err(format!("Unknown check: {}", s)),
        }
    }
}
