//! Deterministic topology builders for test harnesses.
//!
//! Each builder labels processes `ProcessId::from_index(0..n)` and populates
//! `out_nbrs`/`in_nbrs` consistently, so the same call always produces the
//! same network. States start empty; the harness populates them before
//! handing the snapshot to the oracle.

use crate::network::{Network, Process};
use crate::types::ProcessId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn processes(n: usize) -> Vec<Process> {
    (0..n)
        .map(|i| Process::new(ProcessId::from_index(i as u64)))
        .collect()
}

fn add_edge(procs: &mut [Process], from: usize, to: usize) {
    let to_id = procs[to].id;
    let from_id = procs[from].id;
    procs[from].out_nbrs.insert(to_id);
    procs[to].in_nbrs.insert(from_id);
}

/// Ring where each process can send only to its clockwise successor.
pub fn unidirectional_ring(n: usize) -> Network {
    let mut procs = processes(n);
    if n >= 2 {
        for i in 0..n {
            add_edge(&mut procs, i, (i + 1) % n);
        }
    }
    Network::new(procs)
}

/// Ring with edges in both directions.
pub fn bidirectional_ring(n: usize) -> Network {
    let mut procs = processes(n);
    if n >= 2 {
        for i in 0..n {
            add_edge(&mut procs, i, (i + 1) % n);
            add_edge(&mut procs, (i + 1) % n, i);
        }
    }
    Network::new(procs)
}

/// Line where each process can send only to its right neighbor.
pub fn unidirectional_line(n: usize) -> Network {
    let mut procs = processes(n);
    for i in 0..n.saturating_sub(1) {
        add_edge(&mut procs, i, i + 1);
    }
    Network::new(procs)
}

/// Line with edges in both directions.
pub fn bidirectional_line(n: usize) -> Network {
    let mut procs = processes(n);
    for i in 0..n.saturating_sub(1) {
        add_edge(&mut procs, i, i + 1);
        add_edge(&mut procs, i + 1, i);
    }
    Network::new(procs)
}

/// Every pair of processes connected in both directions.
pub fn complete_graph(n: usize) -> Network {
    let mut procs = processes(n);
    for i in 0..n {
        for j in 0..n {
            if i != j {
                add_edge(&mut procs, i, j);
            }
        }
    }
    Network::new(procs)
}

/// Bidirectional line plus random bidirectional shortcut edges.
///
/// Each non-adjacent pair is connected with probability `shortcut_prob`.
/// All randomness derives from `seed`, so a failing topology is
/// reproducible via its seed number.
pub fn random_line(n: usize, shortcut_prob: f64, seed: u64) -> Network {
    let mut procs = processes(n);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in 0..n.saturating_sub(1) {
        add_edge(&mut procs, i, i + 1);
        add_edge(&mut procs, i + 1, i);
    }
    for i in 0..n {
        for j in (i + 2)..n {
            if rng.gen_bool(shortcut_prob.clamp(0.0, 1.0)) {
                add_edge(&mut procs, i, j);
                add_edge(&mut procs, j, i);
            }
        }
    }
    Network::new(procs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unidirectional_ring_degrees() {
        let ring = unidirectional_ring(5);
        assert_eq!(ring.len(), 5);
        for p in ring.iter() {
            assert_eq!(p.out_nbrs.len(), 1);
            assert_eq!(p.in_nbrs.len(), 1);
        }
    }

    #[test]
    fn test_bidirectional_ring_degrees() {
        let ring = bidirectional_ring(7);
        for p in ring.iter() {
            assert_eq!(p.out_nbrs.len(), 2);
            assert_eq!(p.in_nbrs.len(), 2);
        }
    }

    #[test]
    fn test_line_endpoints() {
        let line = bidirectional_line(4);
        let first = line.get(ProcessId::from_index(0)).unwrap();
        let last = line.get(ProcessId::from_index(3)).unwrap();
        assert_eq!(first.out_nbrs.len(), 1);
        assert_eq!(last.out_nbrs.len(), 1);

        let uni = unidirectional_line(4);
        let tail = uni.get(ProcessId::from_index(3)).unwrap();
        assert!(tail.out_nbrs.is_empty());
        assert_eq!(tail.in_nbrs.len(), 1);
    }

    #[test]
    fn test_complete_graph_degrees() {
        let graph = complete_graph(6);
        for p in graph.iter() {
            assert_eq!(p.out_nbrs.len(), 5);
            assert_eq!(p.in_nbrs.len(), 5);
        }
    }

    #[test]
    fn test_random_line_deterministic() {
        let a = random_line(20, 0.2, 42);
        let b = random_line(20, 0.2, 42);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.out_nbrs, pb.out_nbrs);
        }
    }

    #[test]
    fn test_random_line_stays_connected() {
        // Shortcut probability 0 degenerates to a plain line
        let line = random_line(10, 0.0, 1);
        for (i, p) in line.iter().enumerate() {
            let expected = if i == 0 || i == 9 { 1 } else { 2 };
            assert_eq!(p.out_nbrs.len(), expected);
        }
    }

    #[test]
    fn test_ring_of_one_has_no_self_loop() {
        let ring = unidirectional_ring(1);
        assert!(ring.iter().next().unwrap().out_nbrs.is_empty());
    }
}
