//! The asset-management collaborator boundary.
//!
//! The remote service is consumed through the `AssetStore` trait only;
//! `MemoryStore` is the in-process stand-in used by tests and offline runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::context::{Context, ContextLevel};
use crate::error::ContextError;

/// Proof that a context resolved against a store, carrying the level it
/// resolved at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHandle {
    context: Context,
    level: ContextLevel,
}

impl ContextHandle {
    pub(crate) fn new(context: Context, level: ContextLevel) -> ContextHandle {
        ContextHandle { context, level }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn level(&self) -> ContextLevel {
        self.level
    }
}

/// Lookup/validation interface to the asset-management backend.
pub trait AssetStore {
    /// Resolve a context to a handle, or report it unknown.
    fn resolve(&self, context: &Context) -> Result<ContextHandle, ContextError>;

    /// Whether a previously resolved handle still points at a valid entry.
    fn validate(&self, handle: &ContextHandle) -> bool;

    /// Ordered child names one level below the handle.
    fn children(&self, handle: &ContextHandle) -> Vec<String>;
}

/// In-memory job → scene → shot tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    jobs: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    #[must_use]
    pub fn with_job(mut self, job: &str) -> MemoryStore {
        self.jobs.entry(job.to_string()).or_default();
        self
    }

    #[must_use]
    pub fn with_scene(mut self, job: &str, scene: &str) -> MemoryStore {
        self.jobs
            .entry(job.to_string())
            .or_default()
            .entry(scene.to_string())
            .or_default();
        self
    }

    #[must_use]
    pub fn with_shot(mut self, job: &str, scene: &str, shot: &str) -> MemoryStore {
        self.jobs
            .entry(job.to_string())
            .or_default()
            .entry(scene.to_string())
            .or_default()
            .push(shot.to_string());
        self
    }

    fn contains(&self, context: &Context, level: ContextLevel) -> bool {
        let job = context.job.as_deref().unwrap_or_default();
        match level {
            ContextLevel::Facility => context.facility.is_some(),
            ContextLevel::Job => self.jobs.contains_key(job),
            ContextLevel::Scene => {
                let scene = context.scene.as_deref().unwrap_or_default();
                self.jobs
                    .get(job)
                    .is_some_and(|scenes| scenes.contains_key(scene))
            }
            ContextLevel::Shot => {
                let scene = context.scene.as_deref().unwrap_or_default();
                let shot = context.shot.as_deref().unwrap_or_default();
                self.jobs
                    .get(job)
                    .and_then(|scenes| scenes.get(scene))
                    .is_some_and(|shots| shots.iter().any(|name| name == shot))
            }
        }
    }
}

impl AssetStore for MemoryStore {
    fn resolve(&self, context: &Context) -> Result<ContextHandle, ContextError> {
        let level = context.level().ok_or(ContextError::MissingName {
            level: ContextLevel::Job,
        })?;
        context.require(level)?;
        if self.contains(context, level) {
            Ok(ContextHandle {
                context: context.clone(),
                level,
            })
        } else {
            Err(ContextError::NotFound {
                context: context.to_string(),
            })
        }
    }

    fn validate(&self, handle: &ContextHandle) -> bool {
        self.contains(handle.context(), handle.level())
    }

    fn children(&self, handle: &ContextHandle) -> Vec<String> {
        let context = handle.context();
        let job = context.job.as_deref().unwrap_or_default();
        match handle.level() {
            ContextLevel::Facility => self.jobs.keys().cloned().collect(),
            ContextLevel::Job => self
                .jobs
                .get(job)
                .map(|scenes| scenes.keys().cloned().collect())
                .unwrap_or_default(),
            ContextLevel::Scene => {
                let scene = context.scene.as_deref().unwrap_or_default();
                self.jobs
                    .get(job)
                    .and_then(|scenes| scenes.get(scene))
                    .cloned()
                    .unwrap_or_default()
            }
            ContextLevel::Shot => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_shot("macysSanta_5403623", "build", "char_santa_balloon")
            .with_shot("macysSanta_5403623", "shots", "sh010")
            .with_shot("macysSanta_5403623", "shots", "sh020")
    }

    #[test]
    fn test_resolve_at_each_level() {
        let store = store();
        assert!(store.resolve(&Context::job("macysSanta_5403623")).is_ok());
        assert!(
            store
                .resolve(&Context::shot("macysSanta_5403623", "shots", "sh010"))
                .is_ok()
        );
        assert!(matches!(
            store.resolve(&Context::job("gone")),
            Err(ContextError::NotFound { .. })
        ));
        assert!(matches!(
            store.resolve(&Context::default()),
            Err(ContextError::MissingName { .. })
        ));
    }

    #[test]
    fn test_children_walk_the_tree() {
        let store = store();
        let job = store
            .resolve(&Context::job("macysSanta_5403623"))
            .expect("job handle");
        assert_eq!(store.children(&job), vec!["build", "shots"]);

        let scene = store
            .resolve(&Context {
                job: Some("macysSanta_5403623".to_string()),
                scene: Some("shots".to_string()),
                ..Context::default()
            })
            .expect("scene handle");
        assert_eq!(store.children(&scene), vec!["sh010", "sh020"]);
    }

    #[test]
    fn test_validate_follows_store_state() {
        let store = store();
        let handle = store
            .resolve(&Context::shot("macysSanta_5403623", "shots", "sh010"))
            .expect("shot handle");
        assert!(store.validate(&handle));
        assert!(!MemoryStore::new().validate(&handle));
    }
}
