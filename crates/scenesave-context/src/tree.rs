//! Cached view of the current job's scene/shot structure.
//!
//! The cache is an explicit object owned by the caller; it only changes on
//! `refresh` and never repopulates behind the caller's back.

use std::collections::BTreeMap;

use tracing::debug;

use crate::context::{Context, ContextLevel};
use crate::error::ContextError;
use crate::store::AssetStore;

/// Scene → shots tree for the current context's job.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTree {
    current: Context,
    scenes: BTreeMap<String, Vec<String>>,
}

impl DirectoryTree {
    pub fn new(current: Context) -> DirectoryTree {
        DirectoryTree {
            current,
            scenes: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> &Context {
        &self.current
    }

    /// Rebuild the cache from the store. The previous cache is discarded
    /// only once the walk succeeds.
    pub fn refresh(&mut self, store: &dyn AssetStore) -> Result<(), ContextError> {
        let Some(job) = self.current.job.clone() else {
            return Err(ContextError::MissingName {
                level: ContextLevel::Job,
            });
        };
        let job_context = Context::job(job.clone());
        let job_handle = store.resolve(&job_context)?;
        let mut scenes = BTreeMap::new();
        for scene in store.children(&job_handle) {
            let scene_handle = store.resolve(&job_context.with_scene(scene.clone()))?;
            scenes.insert(scene, store.children(&scene_handle));
        }
        debug!(job = %job, scene_count = scenes.len(), "directory tree refreshed");
        self.scenes = scenes;
        Ok(())
    }

    /// Scene names, minus the ignore list.
    pub fn scenes(&self, ignore: &[String]) -> Vec<&str> {
        self.scenes
            .keys()
            .map(String::as_str)
            .filter(|name| !ignore.iter().any(|skip| skip == name))
            .collect()
    }

    /// Shot names for a cached scene, minus the ignore list. `None` when
    /// the scene is not in the cache.
    pub fn shots(&self, scene: &str, ignore: &[String]) -> Option<Vec<&str>> {
        let shots = self.scenes.get(scene)?;
        Some(
            shots
                .iter()
                .map(String::as_str)
                .filter(|name| !ignore.iter().any(|skip| skip == name))
                .collect(),
        )
    }

    /// Swap the current context for one with the given levels replaced.
    ///
    /// The change only sticks when the store resolves the new context;
    /// otherwise the previous context is kept and `false` is returned.
    pub fn set_current(
        &mut self,
        store: &dyn AssetStore,
        job: Option<&str>,
        scene: Option<&str>,
        shot: Option<&str>,
    ) -> bool {
        let mut candidate = self.current.clone();
        if let Some(job) = job {
            candidate = candidate.with_job(job);
        }
        if let Some(scene) = scene {
            candidate = candidate.with_scene(scene);
        }
        if let Some(shot) = shot {
            candidate = candidate.with_shot(shot);
        }
        if store.resolve(&candidate).is_ok() {
            self.current = candidate;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_shot("job", "build", "char_hero")
            .with_shot("job", "shots", "sh010")
            .with_shot("job", "shots", "common")
            .with_scene("job", "tmp")
    }

    fn tree() -> DirectoryTree {
        let mut tree = DirectoryTree::new(Context::job("job"));
        tree.refresh(&store()).expect("refresh");
        tree
    }

    #[test]
    fn test_refresh_requires_a_job() {
        let mut tree = DirectoryTree::new(Context::default());
        assert!(matches!(
            tree.refresh(&store()),
            Err(ContextError::MissingName {
                level: ContextLevel::Job
            })
        ));
    }

    #[test]
    fn test_scenes_apply_ignore_list() {
        let tree = tree();
        assert_eq!(tree.scenes(&[]), vec!["build", "shots", "tmp"]);
        assert_eq!(
            tree.scenes(&["tmp".to_string()]),
            vec!["build", "shots"]
        );
    }

    #[test]
    fn test_shots_apply_ignore_list() {
        let tree = tree();
        assert_eq!(
            tree.shots("shots", &["common".to_string()]),
            Some(vec!["sh010"])
        );
        assert_eq!(tree.shots("missing", &[]), None);
    }

    #[test]
    fn test_set_current_reverts_on_unknown_target() {
        let store = store();
        let mut tree = tree();
        assert!(tree.set_current(&store, None, Some("shots"), Some("sh010")));
        assert_eq!(tree.current().shot.as_deref(), Some("sh010"));

        assert!(!tree.set_current(&store, None, None, Some("does_not_exist")));
        assert_eq!(tree.current().shot.as_deref(), Some("sh010"));
    }
}
