//! JSON snapshot container for transporting a finished run.

use crate::error::SnapshotError;
use crate::network::Network;
use crate::params::AlgorithmParams;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A completed simulation run, ready for inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Name of the algorithm that ran, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    /// Seed the simulation ran with, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Run parameters for consensus-family checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<AlgorithmParams>,

    /// The stabilized network
    pub network: Network,
}

impl Snapshot {
    /// Creates a snapshot holding just a network.
    pub fn new(network: Network) -> Self {
        Self {
            algorithm: None,
            seed: None,
            params: None,
            network,
        }
    }

    /// Attaches run parameters.
    pub fn with_params(mut self, params: AlgorithmParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Writes the snapshot to a pretty-printed JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Reads a snapshot from a JSON file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
