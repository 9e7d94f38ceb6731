//! Deterministic build-constraint evaluation for Go packages.
//!
//! `constraint-core` decides which files of a package belong to the build
//! for a target OS, architecture and import path. It reads `//go:build` and
//! `// +build` lines from file headers, applies `_<os>_<arch>` file name
//! suffixes, and resolves `goexperiment.*` tags through an explicit
//! experiment policy. File names and contents pass through unchanged;
//! identical inputs always produce identical outputs.

pub mod constraint;
pub mod policy;
pub mod selection;
pub mod source;
pub mod types;

pub use constraint::{Expr, ParseError, SyntaxError, TagEvaluator, TagMatcher};
pub use policy::{ExperimentPolicy, ExperimentRule, PolicyError};
pub use selection::{select, FileSelector, SelectionReport};
pub use source::{FileMap, SourceFile};
pub use types::TargetEnvironment;
