//! The facility/job/scene/shot hierarchy as a flat, tagged value.
//!
//! One struct with optional per-level names replaces the remote service's
//! class chain; the level tag drives validation and lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// Depth of a context within the site hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextLevel {
    Facility,
    Job,
    Scene,
    Shot,
}

impl ContextLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextLevel::Facility => "facility",
            ContextLevel::Job => "job",
            ContextLevel::Scene => "scene",
            ContextLevel::Shot => "shot",
        }
    }
}

impl fmt::Display for ContextLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A location in the site hierarchy, as deep as its populated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot: Option<String>,
}

impl Context {
    pub fn job(name: impl Into<String>) -> Context {
        Context {
            job: Some(name.into()),
            ..Context::default()
        }
    }

    pub fn shot(
        job: impl Into<String>,
        scene: impl Into<String>,
        shot: impl Into<String>,
    ) -> Context {
        Context {
            facility: None,
            job: Some(job.into()),
            scene: Some(scene.into()),
            shot: Some(shot.into()),
        }
    }

    /// Read a job/scene/shot triple off a scene-file path.
    ///
    /// The first three path components after the server root are taken as
    /// job, scene, and shot; missing components stay unset.
    pub fn from_scene_path(path: &str, server_root: &str) -> Context {
        let mut components = path
            .split('/')
            .filter(|component| !component.is_empty() && *component != server_root);
        Context {
            facility: None,
            job: components.next().map(str::to_string),
            scene: components.next().map(str::to_string),
            shot: components.next().map(str::to_string),
        }
    }

    /// Deepest level this context names, if any.
    pub fn level(&self) -> Option<ContextLevel> {
        if self.shot.is_some() {
            Some(ContextLevel::Shot)
        } else if self.scene.is_some() {
            Some(ContextLevel::Scene)
        } else if self.job.is_some() {
            Some(ContextLevel::Job)
        } else if self.facility.is_some() {
            Some(ContextLevel::Facility)
        } else {
            None
        }
    }

    /// Name stored at a given level.
    pub fn name_at(&self, level: ContextLevel) -> Option<&str> {
        match level {
            ContextLevel::Facility => self.facility.as_deref(),
            ContextLevel::Job => self.job.as_deref(),
            ContextLevel::Scene => self.scene.as_deref(),
            ContextLevel::Shot => self.shot.as_deref(),
        }
    }

    /// Level-specific validation: every level from job down to `level`
    /// must carry a non-empty name.
    pub fn require(&self, level: ContextLevel) -> Result<(), ContextError> {
        let needed: &[ContextLevel] = match level {
            ContextLevel::Facility => &[ContextLevel::Facility],
            ContextLevel::Job => &[ContextLevel::Job],
            ContextLevel::Scene => &[ContextLevel::Job, ContextLevel::Scene],
            ContextLevel::Shot => &[
                ContextLevel::Job,
                ContextLevel::Scene,
                ContextLevel::Shot,
            ],
        };
        for level in needed {
            match self.name_at(*level) {
                Some(name) if !name.is_empty() => {}
                _ => return Err(ContextError::MissingName { level: *level }),
            }
        }
        Ok(())
    }

    /// Copies with one level replaced; the rest carries over.
    #[must_use]
    pub fn with_job(&self, name: impl Into<String>) -> Context {
        Context {
            job: Some(name.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_scene(&self, name: impl Into<String>) -> Context {
        Context {
            scene: Some(name.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_shot(&self, name: impl Into<String>) -> Context {
        Context {
            shot: Some(name.into()),
            ..self.clone()
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.facility, &self.job, &self.scene, &self.shot]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        if parts.is_empty() {
            f.write_str("(empty context)")
        } else {
            f.write_str(&parts.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tracks_deepest_field() {
        assert_eq!(Context::default().level(), None);
        assert_eq!(Context::job("macysSanta").level(), Some(ContextLevel::Job));
        assert_eq!(
            Context::shot("macysSanta", "build", "char_santa").level(),
            Some(ContextLevel::Shot)
        );
    }

    #[test]
    fn test_from_scene_path_takes_first_three_components() {
        let context = Context::from_scene_path(
            "/jobs/macysSanta_5403623/build/char_santa_balloon/maya/scenes/model",
            "jobs",
        );
        assert_eq!(context.job.as_deref(), Some("macysSanta_5403623"));
        assert_eq!(context.scene.as_deref(), Some("build"));
        assert_eq!(context.shot.as_deref(), Some("char_santa_balloon"));
    }

    #[test]
    fn test_from_scene_path_with_short_path() {
        let context = Context::from_scene_path("/jobs/macysSanta_5403623", "jobs");
        assert_eq!(context.level(), Some(ContextLevel::Job));
        assert_eq!(context.scene, None);
    }

    #[test]
    fn test_require_dispatches_by_level() {
        let context = Context::shot("job", "scene", "sh01");
        assert!(context.require(ContextLevel::Shot).is_ok());

        let partial = Context::job("job");
        assert!(partial.require(ContextLevel::Job).is_ok());
        let err = partial.require(ContextLevel::Shot).expect_err("no scene");
        assert!(matches!(
            err,
            ContextError::MissingName {
                level: ContextLevel::Scene
            }
        ));
    }

    #[test]
    fn test_display_joins_named_levels() {
        assert_eq!(
            Context::shot("job", "build", "sh01").to_string(),
            "job/build/sh01"
        );
        assert_eq!(Context::default().to_string(), "(empty context)");
    }
}
