use serde::{Deserialize, Serialize};

use crate::source::FileMap;
use crate::types::TargetEnvironment;

/// Why a file was left out of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The file name ends in a platform suffix that does not match.
    FilenameSuffix { suffix: String },
    /// A constraint line in the file header evaluated false.
    Constraint { expression: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub file: String,
    pub reason: ExclusionReason,
}

/// Metadata describing the outcome of one selection call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub environment: TargetEnvironment,

    pub files_considered: usize,
    pub files_selected: usize,

    /// Ordered by file name.
    pub excluded: Vec<Exclusion>,
}

/// The kept files together with an account of what was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionReport {
    pub files: FileMap,
    pub selection: SelectionMetadata,
}
