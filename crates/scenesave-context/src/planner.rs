//! Composition of filename inference with context resolution.
//!
//! The planner is the piece callers drive: open a legacy filepath, edit the
//! record, then ask where the next save should land. Context lookups can
//! fail (unknown job, retired shot); a failed lookup never blocks the save,
//! it only pins the plan to the folder the file came from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use scenesave_model::SceneFile;
use scenesave_naming::{NamingEngine, RenderError};

use crate::context::{Context, ContextLevel};
use crate::store::AssetStore;

/// Where the next save goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePlan {
    pub directory: PathBuf,
    pub filename: String,
    /// False when the context did not resolve and the original folder was
    /// kept instead of a pipeline path.
    pub resolved: bool,
}

pub struct SavePlanner<'a> {
    engine: &'a NamingEngine,
    store: &'a dyn AssetStore,
}

impl<'a> SavePlanner<'a> {
    pub fn new(engine: &'a NamingEngine, store: &'a dyn AssetStore) -> SavePlanner<'a> {
        SavePlanner { engine, store }
    }

    /// Split an existing filepath into its context and inferred record.
    pub fn open(&self, filepath: &str) -> (Context, SceneFile) {
        let (folder, name) = match filepath.rsplit_once('/') {
            Some((folder, name)) => (folder, name),
            None => ("", filepath),
        };
        let server_root = &self.engine.config().map.server_root;
        let context = Context::from_scene_path(folder, server_root);
        let scene = self.engine.infer(name);
        (context, scene)
    }

    /// Build the save plan for a record within a context.
    ///
    /// Rendering failures propagate; context failures degrade to the
    /// original folder.
    pub fn plan(
        &self,
        context: &Context,
        scene: &SceneFile,
        original_folder: &Path,
    ) -> Result<SavePlan, RenderError> {
        let filename = self.engine.render(scene)?;
        let resolved = context
            .require(ContextLevel::Shot)
            .and_then(|()| self.store.resolve(context));
        match resolved {
            Ok(handle) => {
                let config = self.engine.config();
                let resolved_context = handle.context();
                let base = config
                    .template
                    .path
                    .replace("{JOB}", resolved_context.job.as_deref().unwrap_or_default())
                    .replace(
                        "{SCENE}",
                        resolved_context.scene.as_deref().unwrap_or_default(),
                    )
                    .replace(
                        "{SHOT}",
                        resolved_context.shot.as_deref().unwrap_or_default(),
                    );
                let directory =
                    Path::new(&base).join(self.discipline_folder(&scene.discipline));
                Ok(SavePlan {
                    directory,
                    filename,
                    resolved: true,
                })
            }
            Err(error) => {
                warn!(%error, context = %context, "context did not resolve; keeping original folder");
                Ok(SavePlan {
                    directory: original_folder.to_path_buf(),
                    filename,
                    resolved: false,
                })
            }
        }
    }

    /// Scenes subfolder for a discipline, honoring the `rig/` grouping.
    pub fn discipline_folder(&self, discipline: &str) -> String {
        let config = self.engine.config();
        let folder = config
            .folder_for(discipline)
            .map_or_else(|| discipline.to_lowercase(), str::to_string);
        let folder = if config.map.rig_disciplines.iter().any(|name| *name == folder) {
            format!("rig/{folder}")
        } else {
            folder
        };
        config.template.discipline_folder.replace("{FOLDER}", &folder)
    }
}
