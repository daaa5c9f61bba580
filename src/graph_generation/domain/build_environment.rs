use crate::shared::error::ForgeError;
use crate::shared::Result;
use std::ffi::OsString;
use std::path::PathBuf;

#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// Value shape of one overridden environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// Replaces the variable outright
    Scalar(OsString),
    /// Joined with the platform separator and prepended to the existing value
    PathList(Vec<PathBuf>),
}

/// Isolation context handed to the external builder.
///
/// Holds the variables a run overrides (the cache root first of all) in the
/// order they were added. Nothing here touches the process environment; the
/// builder adapter materializes the values for its child process, and
/// [`EnvironmentGuard`](crate::shared::environment::EnvironmentGuard) does it
/// process-wide when asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnvironment {
    overrides: Vec<(String, EnvValue)>,
}

impl BuildEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scalar(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(name.into(), EnvValue::Scalar(value.into()));
        self
    }

    pub fn with_path_list(mut self, name: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        self.set(name.into(), EnvValue::PathList(paths));
        self
    }

    fn set(&mut self, name: String, value: EnvValue) {
        match self.overrides.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.overrides.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&EnvValue> {
        self.overrides
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.overrides.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Computes the concrete value of every override.
    ///
    /// `lookup` returns the current value of a variable; it is consulted only
    /// for path lists, whose existing entries are kept after the new ones.
    ///
    /// # Errors
    /// Returns a validation error if a path list entry contains the platform
    /// path separator.
    pub fn resolve<F>(&self, lookup: F) -> Result<Vec<(String, OsString)>>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut resolved = Vec::with_capacity(self.overrides.len());

        for (name, value) in &self.overrides {
            let concrete = match value {
                EnvValue::Scalar(value) => value.clone(),
                EnvValue::PathList(paths) => {
                    let mut joined =
                        std::env::join_paths(paths).map_err(|e| ForgeError::Validation {
                            message: format!("Invalid path list for {}: {}", name, e),
                        })?;
                    if let Some(previous) = lookup(name).filter(|v| !v.is_empty()) {
                        if !joined.is_empty() {
                            joined.push(PATH_SEPARATOR);
                        }
                        joined.push(previous);
                    }
                    joined
                }
            };
            resolved.push((name.clone(), concrete));
        }

        Ok(resolved)
    }
}
