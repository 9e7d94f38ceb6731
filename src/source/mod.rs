pub mod file;
pub mod suffix;

pub use file::{FileMap, SourceFile};
pub use suffix::{suffix_constraint, SuffixConstraint};
