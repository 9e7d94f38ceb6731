use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::policy::config::PolicyError;

/// When a `goexperiment.<name>` tag is satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentRule {
    /// On for every package, including when the import path is unknown.
    Always,
    /// On only for packages whose import path is exactly one of these.
    ImportPaths(BTreeSet<String>),
}

impl ExperimentRule {
    pub fn import_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExperimentRule::ImportPaths(paths.into_iter().map(Into::into).collect())
    }

    pub fn satisfied(&self, import_path: &str) -> bool {
        match self {
            ExperimentRule::Always => true,
            ExperimentRule::ImportPaths(paths) => paths.contains(import_path),
        }
    }
}

/// Registry of experiments keyed by name, without the `goexperiment.` prefix.
///
/// A policy is an immutable value once handed to a selector. Names can be
/// added while building one but never redefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ExperimentRule>",
    into = "BTreeMap<String, ExperimentRule>"
)]
pub struct ExperimentPolicy {
    rules: BTreeMap<String, ExperimentRule>,
}

impl ExperimentPolicy {
    /// A policy in which no experiment is enabled.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// The experiments that decide which standard library files are shown.
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert("synctest".to_string(), ExperimentRule::Always);
        rules.insert(
            "jsonv2".to_string(),
            ExperimentRule::import_paths(["encoding/json/v2", "encoding/json/jsontext"]),
        );
        Self { rules }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        rule: ExperimentRule,
    ) -> Result<(), PolicyError> {
        let name = name.into();
        if self.rules.contains_key(&name) {
            return Err(PolicyError::DuplicateExperiment(name));
        }
        if matches!(&rule, ExperimentRule::ImportPaths(paths) if paths.is_empty()) {
            return Err(PolicyError::EmptyAllowlist(name));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    pub fn with_rule(
        mut self,
        name: impl Into<String>,
        rule: ExperimentRule,
    ) -> Result<Self, PolicyError> {
        self.register(name, rule)?;
        Ok(self)
    }

    /// Add every experiment from `other`. Fails without modifying `self` if
    /// any name is already registered.
    pub fn merge(&mut self, other: ExperimentPolicy) -> Result<(), PolicyError> {
        if let Some(name) = other.rules.keys().find(|name| self.rules.contains_key(*name)) {
            return Err(PolicyError::DuplicateExperiment(name.clone()));
        }
        self.rules.extend(other.rules);
        Ok(())
    }

    /// Whether experiment `name` is on for `import_path`. Unregistered
    /// names are off.
    pub fn satisfied(&self, name: &str, import_path: &str) -> bool {
        self.rules
            .get(name)
            .is_some_and(|rule| rule.satisfied(import_path))
    }

    pub fn get(&self, name: &str) -> Option<&ExperimentRule> {
        self.rules.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ExperimentPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<String, ExperimentRule>> for ExperimentPolicy {
    type Error = PolicyError;

    fn try_from(rules: BTreeMap<String, ExperimentRule>) -> Result<Self, Self::Error> {
        let mut policy = ExperimentPolicy::empty();
        for (name, rule) in rules {
            policy.register(name, rule)?;
        }
        Ok(policy)
    }
}

impl From<ExperimentPolicy> for BTreeMap<String, ExperimentRule> {
    fn from(policy: ExperimentPolicy) -> Self {
        policy.rules
    }
}
