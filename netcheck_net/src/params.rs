//! Run parameters consumed by the consensus-family checks.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Algorithm descriptor exposed by the simulation engine.
///
/// Carries the run parameters the consensus checks need: the legal value
/// domain `V`, the distinguished default value `v_0`, and the fault
/// threshold `f` the algorithm was configured to tolerate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgorithmParams {
    /// The set of legal initial/decision values (V).
    #[serde(default)]
    pub initial_values: BTreeSet<Value>,

    /// The distinguished default value (v_0), if the run had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Maximum number of process failures the algorithm tolerates (f).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_threshold: Option<usize>,
}

impl AlgorithmParams {
    /// Creates params with the given value domain.
    pub fn new(initial_values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            initial_values: initial_values.into_iter().collect(),
            default_value: None,
            fault_threshold: None,
        }
    }

    /// Sets the default value v_0.
    pub fn with_default_value(mut self, v_0: Value) -> Self {
        self.default_value = Some(v_0);
        self
    }

    /// Sets the fault threshold f.
    pub fn with_fault_threshold(mut self, f: usize) -> Self {
        self.fault_threshold = Some(f);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_builder() {
        let params = AlgorithmParams::new([Value::from("a"), Value::from("b")])
            .with_default_value(Value::from("a"))
            .with_fault_threshold(2);

        assert_eq!(params.initial_values.len(), 2);
        assert_eq!(params.default_value, Some(Value::from("a")));
        assert_eq!(params.fault_threshold, Some(2));
    }
}
