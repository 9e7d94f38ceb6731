use crate::constraint::expr::TagMatcher;
use crate::policy::ExperimentPolicy;
use crate::types::TargetEnvironment;

/// Tags in this namespace are decided by the experiment policy.
pub const EXPERIMENT_PREFIX: &str = "goexperiment.";

/// Resolves tags for one target environment.
///
/// A tag is satisfied if it names the target OS or architecture, or if it is
/// a `goexperiment.` tag the policy enables for the target import path.
/// Every other tag is unsatisfied.
#[derive(Debug, Clone, Copy)]
pub struct TagEvaluator<'a> {
    env: &'a TargetEnvironment,
    policy: &'a ExperimentPolicy,
}

impl<'a> TagEvaluator<'a> {
    pub fn new(env: &'a TargetEnvironment, policy: &'a ExperimentPolicy) -> Self {
        Self { env, policy }
    }
}

impl TagMatcher for TagEvaluator<'_> {
    fn matches(&self, tag: &str) -> bool {
        if tag == self.env.os() || tag == self.env.arch() {
            return true;
        }
        match tag.strip_prefix(EXPERIMENT_PREFIX) {
            Some(name) => self.policy.satisfied(name, self.env.import_path()),
            None => false,
        }
    }
}
