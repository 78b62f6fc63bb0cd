//! Filesystem-backed asset store.
//!
//! Stands in for the remote backend on workstations where the jobs mount
//! is directly visible: a context resolves when its directory chain exists
//! under the jobs root.

use std::path::{Path, PathBuf};

use crate::context::{Context, ContextLevel};
use crate::error::ContextError;
use crate::store::{AssetStore, ContextHandle};

/// Asset store reading the `<root>/<job>/<scene>/<shot>` directory layout.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> FsStore {
        FsStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir_for(&self, context: &Context, level: ContextLevel) -> Option<PathBuf> {
        let mut dir = self.root.clone();
        let chain: &[ContextLevel] = match level {
            ContextLevel::Facility => &[],
            ContextLevel::Job => &[ContextLevel::Job],
            ContextLevel::Scene => &[ContextLevel::Job, ContextLevel::Scene],
            ContextLevel::Shot => &[
                ContextLevel::Job,
                ContextLevel::Scene,
                ContextLevel::Shot,
            ],
        };
        for level in chain {
            dir.push(context.name_at(*level)?);
        }
        Some(dir)
    }

    fn list_dirs(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

impl AssetStore for FsStore {
    fn resolve(&self, context: &Context) -> Result<ContextHandle, ContextError> {
        let level = context.level().ok_or(ContextError::MissingName {
            level: ContextLevel::Job,
        })?;
        context.require(level)?;
        let exists = self
            .dir_for(context, level)
            .is_some_and(|dir| dir.is_dir());
        if exists {
            Ok(ContextHandle::new(context.clone(), level))
        } else {
            Err(ContextError::NotFound {
                context: context.to_string(),
            })
        }
    }

    fn validate(&self, handle: &ContextHandle) -> bool {
        self.dir_for(handle.context(), handle.level())
            .is_some_and(|dir| dir.is_dir())
    }

    fn children(&self, handle: &ContextHandle) -> Vec<String> {
        match handle.level() {
            ContextLevel::Shot => Vec::new(),
            level => self
                .dir_for(handle.context(), level)
                .map(|dir| Self::list_dirs(&dir))
                .unwrap_or_default(),
        }
    }
}
