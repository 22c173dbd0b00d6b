// src/exec/registry.rs

//! Name → executor lookup table.
//!
//! The registry is built once, by an explicit constructor, and is read-only
//! afterwards. A duplicate name is returned as [`RegistryError`] so the host
//! decides whether to abort.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::RegistryError;
use crate::exec::{Builtin, Direct, Executor, Shell};

/// Strategy used when nothing else is configured.
pub const DEFAULT_EXECUTOR: &str = "bash";

/// Immutable mapping from strategy name to executor.
#[derive(Clone)]
pub struct ExecutorRegistry {
    executors: BTreeMap<&'static str, Arc<dyn Executor>>,
}

impl ExecutorRegistry {
    /// Build a registry from `executors`, rejecting duplicate names.
    pub fn new<I>(executors: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn Executor>>,
    {
        let mut map: BTreeMap<&'static str, Arc<dyn Executor>> = BTreeMap::new();
        for executor in executors {
            let name = executor.name();
            if map.contains_key(name) {
                return Err(RegistryError::DuplicateExecutor(name.to_string()));
            }
            map.insert(name, executor);
        }
        Ok(Self { executors: map })
    }

    /// Registry holding the `exec`, `bash` and `builtin` strategies.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        Self::new([
            Arc::new(Direct) as Arc<dyn Executor>,
            Arc::new(Shell),
            Arc::new(Builtin),
        ])
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Executor>> {
        self.executors.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.executors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.executors.keys().copied()
    }
}

impl std::fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorRegistry")
            .field("executors", &self.executors.keys().collect::<Vec<_>>())
            .finish()
    }
}
