use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::policy::experiment::ExperimentPolicy;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid policy JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Experiment already registered: {0}")]
    DuplicateExperiment(String),
    #[error("Experiment {0} is limited to import paths but lists none")]
    EmptyAllowlist(String),
}

impl ExperimentPolicy {
    /// Load a registry such as
    /// `{"synctest": "always", "jsonv2": {"import_paths": ["encoding/json/v2"]}}`.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: ExperimentPolicy = serde_json::from_str(json)?;
        tracing::debug!("Loaded experiment policy with {} experiments", policy.len());
        Ok(policy)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let policy = Self::from_json_str(&content)?;
        tracing::info!("Loaded experiment policy from {}", path.display());
        Ok(policy)
    }

    pub fn to_json_pretty(&self) -> Result<String, PolicyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
