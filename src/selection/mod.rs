pub mod report;

use crate::constraint::{extract, parse, Expr, ParseError, RawConstraint, Syntax, TagEvaluator};
use crate::policy::ExperimentPolicy;
use crate::source::{suffix_constraint, FileMap, SourceFile};
use crate::types::TargetEnvironment;
pub use report::{Exclusion, ExclusionReason, SelectionMetadata, SelectionReport};

/// Decides which files of a package belong to a build for a target
/// environment.
///
/// Holds only the experiment policy, so one selector can serve any number
/// of environments and threads.
#[derive(Debug, Clone, Default)]
pub struct FileSelector {
    policy: ExperimentPolicy,
}

impl FileSelector {
    pub fn new(policy: ExperimentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ExperimentPolicy {
        &self.policy
    }

    /// Keep the files whose build constraints hold for `env`.
    ///
    /// Contents of kept files are moved through untouched. Any malformed
    /// constraint fails the whole call.
    pub fn select(&self, env: &TargetEnvironment, files: FileMap) -> Result<FileMap, ParseError> {
        Ok(self.select_with_report(env, files)?.files)
    }

    pub fn select_with_report(
        &self,
        env: &TargetEnvironment,
        files: FileMap,
    ) -> Result<SelectionReport, ParseError> {
        let mut excluded = Vec::new();
        for file in files.iter().map(SourceFile::from) {
            if let Some(reason) = self.exclusion(env, &file)? {
                tracing::debug!("Excluding {} for {}/{}: {:?}", file.name, env.os, env.arch, reason);
                excluded.push(Exclusion {
                    file: file.name.to_string(),
                    reason,
                });
            }
        }

        let files_considered = files.len();
        // `excluded` follows the map's name order.
        let kept: FileMap = files
            .into_iter()
            .filter(|(name, _)| {
                excluded
                    .binary_search_by(|e| e.file.as_str().cmp(name.as_str()))
                    .is_err()
            })
            .collect();

        tracing::debug!(
            "Selected {} of {} files for {}/{} (import path {:?})",
            kept.len(),
            files_considered,
            env.os,
            env.arch,
            env.import_path
        );

        Ok(SelectionReport {
            selection: SelectionMetadata {
                environment: env.clone(),
                files_considered,
                files_selected: kept.len(),
                excluded,
            },
            files: kept,
        })
    }

    /// Whether a single file belongs to the build for `env`.
    pub fn matches(&self, env: &TargetEnvironment, file: &SourceFile<'_>) -> Result<bool, ParseError> {
        Ok(self.exclusion(env, file)?.is_none())
    }

    /// The reason `file` is excluded, or `None` if it is kept.
    ///
    /// All constraints are parsed before any is evaluated, so a malformed
    /// line is reported even when the file name alone would exclude it.
    fn exclusion(
        &self,
        env: &TargetEnvironment,
        file: &SourceFile<'_>,
    ) -> Result<Option<ExclusionReason>, ParseError> {
        let constraints = header_constraints(file)?;
        let matcher = TagEvaluator::new(env, &self.policy);

        if let Some(suffix) = suffix_constraint(file) {
            if !suffix.to_expr().eval(&matcher) {
                return Ok(Some(ExclusionReason::FilenameSuffix {
                    suffix: suffix.to_string(),
                }));
            }
        }

        for (raw, expr) in constraints {
            if !expr.eval(&matcher) {
                return Ok(Some(ExclusionReason::Constraint {
                    expression: raw.line,
                }));
            }
        }

        Ok(None)
    }
}

/// Parse the constraints that apply to `file`.
///
/// The first `//go:build` line wins over everything else in the header;
/// without one, every `// +build` line applies.
fn header_constraints(file: &SourceFile<'_>) -> Result<Vec<(RawConstraint, Expr)>, ParseError> {
    let mut raws = extract(file.content);
    if let Some(i) = raws.iter().position(|raw| raw.syntax == Syntax::Modern) {
        let first = raws.swap_remove(i);
        raws = vec![first];
    }

    let mut parsed = Vec::with_capacity(raws.len());
    for raw in raws {
        tracing::trace!("{}:{}: {}", file.name, raw.line_number, raw.line);
        match parse(&raw) {
            Ok(expr) => parsed.push((raw, expr)),
            Err(source) => {
                tracing::warn!("Malformed build constraint in {}: {}", file.name, raw.line);
                return Err(ParseError {
                    file: file.name.to_string(),
                    expression: raw.line,
                    source,
                });
            }
        }
    }
    Ok(parsed)
}

/// Select the files of the package at `import_path` that build on
/// `os`/`arch`, using the standard experiment policy.
pub fn select(
    os: &str,
    arch: &str,
    import_path: &str,
    files: FileMap,
) -> Result<FileMap, ParseError> {
    let env = TargetEnvironment::new(os, arch).with_import_path(import_path);
    FileSelector::default().select(&env, files)
}
