use std::fmt;

use crate::constraint::Expr;
use crate::source::file::SourceFile;
use crate::types::{is_known_arch, is_known_os};

/// The implicit constraint carried by a `_<os>`, `_<arch>` or
/// `_<os>_<arch>` file name suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixConstraint {
    pub os: Option<String>,
    pub arch: Option<String>,
}

impl SuffixConstraint {
    pub fn to_expr(&self) -> Expr {
        match (&self.os, &self.arch) {
            (Some(os), Some(arch)) => Expr::and([Expr::atom(os), Expr::atom(arch)]),
            (Some(tag), None) | (None, Some(tag)) => Expr::atom(tag),
            (None, None) => Expr::and([]),
        }
    }
}

impl fmt::Display for SuffixConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.os.iter().chain(&self.arch) {
            write!(f, "_{part}")?;
        }
        Ok(())
    }
}

/// The platform suffix constraint implied by `file`'s name, if any.
///
/// Only text after the first `_` of the stem is considered, and a final
/// `_test` is ignored, so `linux.go` and `x_test.go` carry no constraint
/// while `x_windows_test.go` and `x_linux_arm64.go` do.
pub fn suffix_constraint(file: &SourceFile<'_>) -> Option<SuffixConstraint> {
    let stem = file.stem();
    let underscore = stem.find('_')?;
    let mut parts: Vec<&str> = stem[underscore..].split('_').collect();
    if parts.last() == Some(&"test") {
        parts.pop();
    }

    match parts.as_slice() {
        [.., os, arch] if is_known_os(os) && is_known_arch(arch) => Some(SuffixConstraint {
            os: Some(os.to_string()),
            arch: Some(arch.to_string()),
        }),
        [.., last] if is_known_os(last) => Some(SuffixConstraint {
            os: Some(last.to_string()),
            arch: None,
        }),
        [.., last] if is_known_arch(last) => Some(SuffixConstraint {
            os: None,
            arch: Some(last.to_string()),
        }),
        _ => None,
    }
}
