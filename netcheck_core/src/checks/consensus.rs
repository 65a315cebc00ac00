//! Consensus-family postconditions.
//!
//! All checks share a two-phase scan: first tally failures and real
//! decisions across the network, then validate the tally against the
//! variant-specific rule.

use crate::error::CheckError;
use netcheck_net::{AlgorithmParams, Decision, Network, ProcessId, Value};
use tracing::debug;

/// Aggregate of one decision scan over the network.
#[derive(Debug, Clone)]
pub struct DecisionTally {
    /// Total processes visited
    pub total: usize,

    /// Processes holding the failure sentinel
    pub failed: usize,

    /// Real decisions in visit order
    pub decided: Vec<(ProcessId, Value)>,

    /// The last-visited process and its decision
    pub last: Option<(ProcessId, Decision)>,
}

impl DecisionTally {
    /// Processes that did not fail.
    pub fn survivors(&self) -> usize {
        self.total - self.failed
    }
}

/// Scans the network once, requiring every process to carry a `decision`.
pub fn tally_decisions(network: &Network) -> Result<DecisionTally, CheckError> {
    let mut tally = DecisionTally {
        total: 0,
        failed: 0,
        decided: Vec::new(),
        last: None,
    };
    for p in network {
        let decision = p
            .state
            .decision
            .as_ref()
            .ok_or_else(|| CheckError::missing(p.id, "decision"))?;
        tally.total += 1;
        match decision {
            Decision::Failed => tally.failed += 1,
            Decision::Decided(v) => tally.decided.push((p.id, v.clone())),
        }
        tally.last = Some((p.id, decision.clone()));
    }
    debug!(
        total = tally.total,
        failed = tally.failed,
        decided = tally.decided.len(),
        "decision tally"
    );
    Ok(tally)
}

/// Requires all real decisions in the tally to be the same value and
/// returns it, or `None` when every process failed.
fn agreed_value(tally: &DecisionTally) -> Result<Option<&Value>, CheckError> {
    let mut decisions = tally.decided.iter();
    let reference = match decisions.next() {
        Some((_, v)) => v,
        None => return Ok(None),
    };
    for (process, value) in decisions {
        if value != reference {
            return Err(CheckError::Disagreement {
                process: *process,
                expected: reference.to_string(),
                actual: value.to_string(),
            });
        }
    }
    Ok(Some(reference))
}

fn domain_display(params: &AlgorithmParams) -> String {
    params
        .initial_values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Asserts that every surviving process decided the same real value.
///
/// Passes vacuously when every process failed: agreement over an empty set
/// of survivors holds, and the decided count trivially equals the survivor
/// count.
pub fn check_consensus(network: &Network) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    agreed_value(&tally)?;
    Ok(())
}

/// Consensus, plus the agreed value must lie in the legal value set V.
pub fn check_consensus_in_value_set(
    network: &Network,
    params: &AlgorithmParams,
) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    if let Some(value) = agreed_value(&tally)? {
        if !params.initial_values.contains(value) {
            return Err(CheckError::DomainViolation {
                value: value.clone(),
                domain: domain_display(params),
            });
        }
    }
    Ok(())
}

/// Asserts that every process decided exactly the default value v_0.
///
/// Assumes a run in which every process started with v_0, so even a single
/// failed process is a violation.
pub fn check_consensus_on_default_value(
    network: &Network,
    params: &AlgorithmParams,
) -> Result<(), CheckError> {
    let v_0 = params
        .default_value
        .as_ref()
        .ok_or(CheckError::MissingParam { param: "v_0" })?;
    if !params.initial_values.contains(v_0) {
        return Err(CheckError::DomainViolation {
            value: v_0.clone(),
            domain: domain_display(params),
        });
    }
    for p in network {
        let decision = p
            .state
            .decision
            .as_ref()
            .ok_or_else(|| CheckError::missing(p.id, "decision"))?;
        if decision.value() != Some(v_0) {
            return Err(CheckError::Disagreement {
                process: p.id,
                expected: v_0.to_string(),
                actual: decision.to_string(),
            });
        }
    }
    Ok(())
}

/// Asserts that no agreement on a real value was reached.
///
/// At most one process may hold a real decision; a second real decision is
/// a violation. True disagreement between two survivors is not separately
/// distinguished from universal failure.
pub fn check_no_consensus(network: &Network) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    if let Some((process, value)) = tally.decided.get(1) {
        return Err(CheckError::UnexpectedDecision {
            process: *process,
            value: value.clone(),
        });
    }
    Ok(())
}

/// Which reading of the bounded-failure postcondition to enforce.
///
/// Two readings of what a tolerated number of failures implies are in
/// circulation, so the caller must pick a rule explicitly rather than
/// getting one silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultRule {
    /// Failures within tolerance still reach agreement on one real value;
    /// beyond tolerance, agreement on a real value must not hold (a lone
    /// survivor counts as agreement).
    Strict,

    /// One-to-f failures force every process to collapse to the failure
    /// sentinel; zero or more-than-f failures require agreement on one
    /// real value among survivors.
    Legacy,
}

impl std::fmt::Display for FaultRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaultRule::Strict => write!(f, "strict"),
            FaultRule::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for FaultRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(FaultRule::Strict),
            "legacy" => Ok(FaultRule::Legacy),
            _ => Err(format!("Unknown fault rule: {} (strict|legacy)", s)),
        }
    }
}

/// Asserts the bounded-failure postcondition under the given rule.
pub fn check_bounded_failures(
    network: &Network,
    params: &AlgorithmParams,
    rule: FaultRule,
) -> Result<(), CheckError> {
    let f = params
        .fault_threshold
        .ok_or(CheckError::MissingParam { param: "f" })?;
    let tally = tally_decisions(network)?;
    debug!(failed = tally.failed, threshold = f, %rule, "bounded failure check");

    match rule {
        FaultRule::Strict => {
            if tally.failed <= f {
                agreed_value(&tally)?;
                Ok(())
            } else {
                match agreed_value(&tally) {
                    Ok(Some(value)) => Err(CheckError::ThresholdViolation {
                        failed: tally.failed,
                        tolerated: f,
                        detail: format!(
                            "agreement on '{}' survived beyond the fault threshold",
                            value
                        ),
                    }),
                    // All failed, or survivors genuinely disagree
                    Ok(None) | Err(_) => Ok(()),
                }
            }
        }
        FaultRule::Legacy => {
            if (1..=f).contains(&tally.failed) {
                if let Some((process, value)) = tally.decided.first() {
                    return Err(CheckError::ThresholdViolation {
                        failed: tally.failed,
                        tolerated: f,
                        detail: format!(
                            "process {} decided '{}' but tolerated failures must collapse to the failure sentinel",
                            process, value
                        ),
                    });
                }
                Ok(())
            } else {
                agreed_value(&tally)?;
                Ok(())
            }
        }
    }
}

/// Ring-specific: any failure must leave the last-visited process with the
/// failure sentinel.
pub fn check_ring_failure_no_consensus(network: &Network) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    if tally.failed >= 1 {
        if let Some((process, Decision::Decided(value))) = tally.last {
            return Err(CheckError::UnexpectedDecision { process, value });
        }
    }
    Ok(())
}

/// Ring-specific: any failure must have propagated to every process.
pub fn check_ring_failure_all_fail(network: &Network) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    if tally.failed >= 1 && tally.failed != tally.total {
        return Err(CheckError::cardinality(
            "failed processes",
            tally.total,
            tally.failed,
        ));
    }
    Ok(())
}

/// Degenerate whole-network check: every process failed.
pub fn check_all_failed(network: &Network) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    if tally.failed != tally.total {
        return Err(CheckError::cardinality(
            "failed processes",
            tally.total,
            tally.failed,
        ));
    }
    Ok(())
}

/// Degenerate whole-network check: no process failed.
pub fn check_all_alive(network: &Network) -> Result<(), CheckError> {
    let tally = tally_decisions(network)?;
    if tally.failed != 0 {
        return Err(CheckError::cardinality(
            "failed processes",
            0,
            tally.failed,
        ));
    }
    Ok(())
}
