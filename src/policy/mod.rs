pub mod config;
pub mod experiment;

pub use config::PolicyError;
pub use experiment::{ExperimentPolicy, ExperimentRule};
