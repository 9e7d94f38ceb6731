use serde::{Deserialize, Serialize};

/// The platform and package a file set is being selected for.
///
/// All values are supplied by the caller; nothing is read from the
/// process environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetEnvironment {
    pub os: String,
    pub arch: String,
    /// Import path of the package being selected. Empty when unknown.
    #[serde(default)]
    pub import_path: String,
}

impl TargetEnvironment {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            import_path: String::new(),
        }
    }

    pub fn with_import_path(mut self, import_path: impl Into<String>) -> Self {
        self.import_path = import_path.into();
        self
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }
}
