//! Structural postconditions: leader election, broadcast convergence,
//! spanning-tree well-formedness, maximal independent set.

use crate::error::CheckError;
use netcheck_net::{Network, Parent, Process, Role};
use tracing::debug;

/// Asserts that exactly one process elected itself leader and the other
/// n-1 elected non-leader.
pub fn check_leader_election(network: &Network) -> Result<(), CheckError> {
    check_leader_election_with(
        network,
        |p| p.state.status == Some(Role::Leader),
        |p| p.state.status == Some(Role::NonLeader),
    )
}

/// Leader-election check with caller-supplied role predicates.
pub fn check_leader_election_with<L, N>(
    network: &Network,
    is_leader: L,
    is_non_leader: N,
) -> Result<(), CheckError>
where
    L: Fn(&Process) -> bool,
    N: Fn(&Process) -> bool,
{
    let leaders = network.iter().filter(|p| is_leader(p)).count();
    let non_leaders = network.iter().filter(|p| is_non_leader(p)).count();
    debug!(leaders, non_leaders, total = network.len(), "leader election tally");

    if leaders != 1 {
        return Err(CheckError::cardinality("leader", 1, leaders));
    }
    if non_leaders != network.len() - 1 {
        return Err(CheckError::cardinality(
            "non-leaders",
            network.len() - 1,
            non_leaders,
        ));
    }
    Ok(())
}

/// Asserts that `attrs[attr]` is present and identical on every process.
///
/// A missing key fails before any value comparison, so "broadcast never
/// arrived" is distinguishable from "broadcast arrived with disagreement".
pub fn check_broadcast(network: &Network, attr: &str) -> Result<(), CheckError> {
    for p in network {
        if !p.state.attrs.contains_key(attr) {
            return Err(CheckError::missing(p.id, attr));
        }
    }

    let mut reference = None;
    for p in network {
        let value = &p.state.attrs[attr];
        match reference {
            None => reference = Some(value),
            Some(expected) if expected != value => {
                return Err(CheckError::Disagreement {
                    process: p.id,
                    expected: expected.to_string(),
                    actual: value.to_string(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Asserts spanning-tree well-formedness: exactly one root, and every
/// non-root parent pointer resolves to a process in the network.
pub fn check_bfs_tree(network: &Network) -> Result<(), CheckError> {
    walk_tree(network, false)
}

/// As [`check_bfs_tree`], additionally requiring the child back-edge:
/// each non-root must appear in its parent's `children` set.
///
/// Catches asymmetric construction where a parent pointer was set without
/// the corresponding child registration.
pub fn check_bfs_tree_with_children(network: &Network) -> Result<(), CheckError> {
    walk_tree(network, true)
}

fn walk_tree(network: &Network, require_back_edges: bool) -> Result<(), CheckError> {
    let mut found_root = false;
    for p in network {
        let parent = p
            .state
            .parent
            .as_ref()
            .ok_or_else(|| CheckError::missing(p.id, "parent"))?;
        match parent {
            Parent::Root => {
                if found_root {
                    return Err(CheckError::cardinality("root process", 1, 2));
                }
                found_root = true;
            }
            Parent::Node(parent_id) => {
                let parent_proc =
                    network.get(*parent_id).ok_or(CheckError::DanglingReference {
                        process: p.id,
                        referenced: *parent_id,
                        field: "parent",
                    })?;
                if require_back_edges {
                    let children = parent_proc
                        .state
                        .children
                        .as_ref()
                        .ok_or_else(|| CheckError::missing(parent_proc.id, "children"))?;
                    if !children.contains(&p.id) {
                        return Err(CheckError::MissingBackEdge {
                            process: p.id,
                            parent: *parent_id,
                        });
                    }
                }
            }
        }
    }
    if !found_root {
        return Err(CheckError::cardinality("root process", 1, 0));
    }
    Ok(())
}

/// Asserts that the processes with `mis = true` form an independent and
/// maximal set.
///
/// Independence and maximality are checked per process, so the error
/// pinpoints the exact violating process (and neighbor).
pub fn check_luby_mis(network: &Network) -> Result<(), CheckError> {
    for p in network {
        let member = p
            .state
            .mis
            .ok_or_else(|| CheckError::missing(p.id, "mis"))?;

        let mut covered = false;
        for &nbr_id in &p.out_nbrs {
            let nbr = network.get(nbr_id).ok_or(CheckError::DanglingReference {
                process: p.id,
                referenced: nbr_id,
                field: "out_nbrs",
            })?;
            let nbr_member = nbr
                .state
                .mis
                .ok_or_else(|| CheckError::missing(nbr.id, "mis"))?;
            if member && nbr_member {
                return Err(CheckError::NotIndependent {
                    process: p.id,
                    neighbor: nbr_id,
                });
            }
            covered |= nbr_member;
        }
        if !member && !covered {
            return Err(CheckError::NotMaximal { process: p.id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcheck_net::topology::{bidirectional_ring, complete_graph};
    use netcheck_net::{ProcessId, Value};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn pid(i: u64) -> ProcessId {
        ProcessId::from_index(i)
    }

    fn elect(network: &mut Network, leader: ProcessId) {
        let ids: Vec<ProcessId> = network.iter().map(|p| p.id).collect();
        for id in ids {
            let role = if id == leader {
                Role::Leader
            } else {
                Role::NonLeader
            };
            network.process_mut(id).unwrap().state.status = Some(role);
        }
    }

    #[test]
    fn test_leader_election_passes_with_unique_leader() {
        let mut network = complete_graph(5);
        elect(&mut network, pid(3));
        check_leader_election(&network).unwrap();
    }

    #[test]
    fn test_leader_election_fails_with_two_leaders() {
        let mut network = complete_graph(5);
        elect(&mut network, pid(3));
        network.process_mut(pid(0)).unwrap().state.status = Some(Role::Leader);

        let err = check_leader_election(&network).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Cardinality {
                property: "leader",
                expected: 1,
                actual: 2,
            }
        ));
    }

    #[test]
    fn test_leader_election_fails_when_status_missing() {
        let mut network = complete_graph(3);
        elect(&mut network, pid(0));
        network.process_mut(pid(2)).unwrap().state.status = None;

        // One process counts as neither leader nor non-leader
        assert!(check_leader_election(&network).is_err());
    }

    #[test]
    fn test_leader_election_with_custom_predicates() {
        let mut network = complete_graph(4);
        for (i, id) in (0..4).map(pid).enumerate() {
            let marker = if i == 2 { "chief" } else { "member" };
            network
                .process_mut(id)
                .unwrap()
                .state
                .attrs
                .insert("rank".to_string(), Value::from(marker));
        }

        check_leader_election_with(
            &network,
            |p| p.state.attrs.get("rank") == Some(&Value::from("chief")),
            |p| p.state.attrs.get("rank") == Some(&Value::from("member")),
        )
        .unwrap();
    }

    #[test]
    fn test_broadcast_converged() {
        let mut network = bidirectional_ring(4);
        for i in 0..4 {
            network
                .process_mut(pid(i))
                .unwrap()
                .state
                .attrs
                .insert("msg".to_string(), Value::from("X"));
        }
        check_broadcast(&network, "msg").unwrap();
    }

    #[test]
    fn test_broadcast_disagreement() {
        let mut network = bidirectional_ring(4);
        for i in 0..4 {
            let v = if i == 2 { "Y" } else { "X" };
            network
                .process_mut(pid(i))
                .unwrap()
                .state
                .attrs
                .insert("msg".to_string(), Value::from(v));
        }

        let err = check_broadcast(&network, "msg").unwrap_err();
        assert!(matches!(err, CheckError::Disagreement { .. }));
    }

    #[test]
    fn test_broadcast_missing_key_beats_disagreement() {
        let mut network = bidirectional_ring(3);
        // First process disagrees, last never received
        network
            .process_mut(pid(0))
            .unwrap()
            .state
            .attrs
            .insert("msg".to_string(), Value::from("X"));
        network
            .process_mut(pid(1))
            .unwrap()
            .state
            .attrs
            .insert("msg".to_string(), Value::from("Y"));

        let err = check_broadcast(&network, "msg").unwrap_err();
        assert!(matches!(err, CheckError::MissingState { .. }));
    }

    /// Builds a star spanning tree over a complete graph, center as root.
    fn star_tree(n: u64) -> Network {
        let mut network = complete_graph(n as usize);
        let center = pid(0);
        let leaves: BTreeSet<ProcessId> = (1..n).map(pid).collect();
        network.process_mut(center).unwrap().state.parent = Some(Parent::Root);
        network.process_mut(center).unwrap().state.children = Some(leaves.clone());
        for leaf in leaves {
            let p = network.process_mut(leaf).unwrap();
            p.state.parent = Some(Parent::Node(center));
            p.state.children = Some(BTreeSet::new());
        }
        network
    }

    #[test]
    fn test_bfs_star_topology() {
        let network = star_tree(5);
        check_bfs_tree(&network).unwrap();
        check_bfs_tree_with_children(&network).unwrap();
    }

    #[test]
    fn test_bfs_duplicate_root() {
        let mut network = star_tree(5);
        network.process_mut(pid(3)).unwrap().state.parent = Some(Parent::Root);

        let err = check_bfs_tree(&network).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Cardinality {
                property: "root process",
                ..
            }
        ));
    }

    #[test]
    fn test_bfs_no_root() {
        let mut network = star_tree(4);
        network.process_mut(pid(0)).unwrap().state.parent = Some(Parent::Node(pid(1)));

        let err = check_bfs_tree(&network).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Cardinality {
                expected: 1,
                actual: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_bfs_parent_outside_network() {
        let mut network = star_tree(4);
        network.process_mut(pid(2)).unwrap().state.parent = Some(Parent::Node(pid(99)));

        let err = check_bfs_tree(&network).unwrap_err();
        assert!(matches!(err, CheckError::DanglingReference { .. }));
    }

    #[test]
    fn test_bfs_missing_back_edge() {
        let mut network = star_tree(4);
        // Parent pointer set, child registration dropped
        network
            .process_mut(pid(0))
            .unwrap()
            .state
            .children
            .as_mut()
            .unwrap()
            .remove(&pid(2));

        // Plain variant does not care
        check_bfs_tree(&network).unwrap();
        let err = check_bfs_tree_with_children(&network).unwrap_err();
        assert!(matches!(err, CheckError::MissingBackEdge { .. }));
    }

    fn mark_mis(network: &mut Network, members: &[u64]) {
        let ids: Vec<ProcessId> = network.iter().map(|p| p.id).collect();
        for id in ids {
            let member = members.iter().any(|&m| pid(m) == id);
            network.process_mut(id).unwrap().state.mis = Some(member);
        }
    }

    #[test]
    fn test_mis_single_member_on_triangle() {
        let mut network = complete_graph(3);
        mark_mis(&mut network, &[1]);
        check_luby_mis(&network).unwrap();
    }

    #[test]
    fn test_mis_adjacent_members_not_independent() {
        let mut network = complete_graph(3);
        mark_mis(&mut network, &[0, 1]);

        let err = check_luby_mis(&network).unwrap_err();
        assert!(matches!(err, CheckError::NotIndependent { .. }));
    }

    #[test]
    fn test_mis_empty_set_not_maximal() {
        let mut network = complete_graph(3);
        mark_mis(&mut network, &[]);

        let err = check_luby_mis(&network).unwrap_err();
        assert!(matches!(err, CheckError::NotMaximal { .. }));
    }

    #[test]
    fn test_mis_missing_field() {
        let mut network = complete_graph(3);
        mark_mis(&mut network, &[1]);
        network.process_mut(pid(2)).unwrap().state.mis = None;

        let err = check_luby_mis(&network).unwrap_err();
        assert!(matches!(err, CheckError::MissingState { .. }));
    }

    proptest! {
        /// A unique leader passes regardless of network size or position.
        #[test]
        fn prop_unique_leader_always_passes(n in 2usize..40, leader in 0u64..40) {
            let leader = leader % n as u64;
            let mut network = complete_graph(n);
            elect(&mut network, pid(leader));
            prop_assert!(check_leader_election(&network).is_ok());
        }

        /// Two distinct leaders always fail the cardinality check.
        #[test]
        fn prop_two_leaders_always_fail(n in 3usize..40, a in 0u64..40, b in 0u64..40) {
            let a = a % n as u64;
            let b = b % n as u64;
            prop_assume!(a != b);
            let mut network = complete_graph(n);
            elect(&mut network, pid(a));
            network.process_mut(pid(b)).unwrap().state.status = Some(Role::Leader);
            prop_assert!(check_leader_election(&network).is_err());
        }
    }
}
