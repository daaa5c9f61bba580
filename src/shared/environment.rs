use crate::graph_generation::domain::BuildEnvironment;
use crate::shared::Result;
use std::ffi::OsString;
use tracing::trace;

/// Process-wide application of a [`BuildEnvironment`] for one scope
///
/// `enter` snapshots the whole process environment before applying the
/// overrides. Dropping the guard restores that snapshot: variables added
/// inside the scope are removed and changed ones get their old value back.
/// Restoration runs on every exit path, including `?` returns and panics.
///
/// Mutating the process environment is only sound while no other thread reads
/// it, so the guard belongs to single-threaded runs.
#[must_use = "the environment is restored as soon as the guard is dropped"]
pub struct EnvironmentGuard {
    snapshot: Option<Vec<(OsString, OsString)>>,
}

impl EnvironmentGuard {
    pub fn enter(environment: &BuildEnvironment) -> Result<Self> {
        if environment.is_empty() {
            return Ok(Self { snapshot: None });
        }

        let resolved = environment.resolve(|name| std::env::var_os(name))?;
        let snapshot: Vec<(OsString, OsString)> = std::env::vars_os().collect();

        for (name, value) in resolved {
            trace!(variable = %name, "Overriding process environment variable");
            std::env::set_var(name, value);
        }

        Ok(Self {
            snapshot: Some(snapshot),
        })
    }

    /// True when entering changed the process environment
    pub fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl Drop for EnvironmentGuard {
    fn drop(&mut self) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };

        for (name, _) in std::env::vars_os() {
            if !snapshot.iter().any(|(previous, _)| *previous == name) {
                std::env::remove_var(&name);
            }
        }
        for (name, value) in snapshot {
            if std::env::var_os(&name).as_ref() != Some(&value) {
                std::env::set_var(&name, &value);
            }
        }
        trace!("Process environment restored");
    }
}
