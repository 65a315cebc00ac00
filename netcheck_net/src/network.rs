//! Process handles and the network snapshot they form.

use crate::types::{ProcessId, ProcessState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A simulated network participant after a completed run.
///
/// Neighbor sets are fixed for the lifetime of a run; state is written by
/// the algorithm under test during simulation and only read afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Stable identity
    pub id: ProcessId,

    /// Local state written by the algorithm
    #[serde(default)]
    pub state: ProcessState,

    /// Processes reachable via outgoing edges
    #[serde(default)]
    pub out_nbrs: BTreeSet<ProcessId>,

    /// Processes reachable via incoming edges
    #[serde(default)]
    pub in_nbrs: BTreeSet<ProcessId>,
}

impl Process {
    /// Creates an isolated process with empty state.
    pub fn new(id: ProcessId) -> Self {
        Self {
            id,
            state: ProcessState::default(),
            out_nbrs: BTreeSet::new(),
            in_nbrs: BTreeSet::new(),
        }
    }
}

/// The fixed-topology collection of processes forming one completed run.
///
/// Iteration order is construction order and is stable across passes, which
/// is all the oracle relies on: every process is visited exactly once per
/// predicate pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    processes: Vec<Process>,
}

impl Network {
    /// Creates a network from a list of processes.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Returns true if the network has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates processes in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Looks up a process by id.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Returns true if the id belongs to a process in this network.
    pub fn contains(&self, id: ProcessId) -> bool {
        self.get(id).is_some()
    }

    /// Mutable lookup for harness-side state population.
    ///
    /// The oracle itself only ever takes `&Network`.
    pub fn process_mut(&mut self, id: ProcessId) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.id == id)
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_lookup() {
        let a = ProcessId::from_index(0);
        let b = ProcessId::from_index(1);
        let network = Network::new(vec![Process::new(a), Process::new(b)]);

        assert_eq!(network.len(), 2);
        assert!(network.contains(a));
        assert!(!network.contains(ProcessId::from_index(2)));
        assert_eq!(network.get(b).unwrap().id, b);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let ids: Vec<ProcessId> = (0..5).map(ProcessId::from_index).collect();
        let network = Network::new(ids.iter().map(|&id| Process::new(id)).collect());

        let first: Vec<ProcessId> = network.iter().map(|p| p.id).collect();
        let second: Vec<ProcessId> = network.iter().map(|p| p.id).collect();
        assert_eq!(first, ids);
        assert_eq!(first, second);
    }
}
