//! The decomposed form of a Maya scene filename.
//!
//! A `SceneFile` carries the five semantic fields of the studio naming
//! convention plus an optional free-text note. Records are produced either
//! from explicit field values or by inference from a legacy filename (see
//! `scenesave-naming`); the version is the only field with arithmetic on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decomposition of a scene filename into its semantic fields.
///
/// Invariants:
/// - `version >= 1`, enforced at every version change.
/// - `discipline` is stored upper-cased.
/// - `user` initials are stored lower-cased.
/// - `description` is never empty; inference substitutes the configured
///   default before a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneFile {
    /// Free-text title of the scene.
    pub description: String,
    /// Canonical department tag (e.g. `ANIM`, `FX`, `RIG`).
    pub discipline: String,
    /// Iteration number, always `>= 1`.
    pub version: u32,
    /// Two-letter artist initials; empty when none could be recovered.
    pub user: String,
    /// Optional free-text suffix appended before the extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// File extension without the leading dot.
    pub extension: String,
}

impl SceneFile {
    /// Returns a copy with the version advanced by `step`.
    ///
    /// Negative steps are allowed; the result clamps to 1 so the version
    /// invariant holds unconditionally.
    #[must_use]
    pub fn increment(&self, step: i64) -> SceneFile {
        let next = i64::from(self.version).saturating_add(step);
        SceneFile {
            version: clamp_version(next),
            ..self.clone()
        }
    }

    /// Returns a copy with the version set directly, clamped to `>= 1`.
    #[must_use]
    pub fn with_version(&self, version: u32) -> SceneFile {
        SceneFile {
            version: version.max(1),
            ..self.clone()
        }
    }

    /// Returns a copy with a new discipline tag, upper-cased on the way in.
    #[must_use]
    pub fn with_discipline(&self, discipline: &str) -> SceneFile {
        SceneFile {
            discipline: discipline.to_uppercase(),
            ..self.clone()
        }
    }

    /// Returns a copy with new user initials, lower-cased on the way in.
    #[must_use]
    pub fn with_user(&self, user: &str) -> SceneFile {
        SceneFile {
            user: user.to_lowercase(),
            ..self.clone()
        }
    }

    /// Returns a copy with the optional note set or cleared.
    #[must_use]
    pub fn with_note(&self, note: Option<String>) -> SceneFile {
        SceneFile {
            note,
            ..self.clone()
        }
    }
}

impl fmt::Display for SceneFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.description, self.version, self.discipline, self.user
        )
    }
}

/// Clamp a candidate version value into the valid range.
fn clamp_version(value: i64) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(u32::MAX)
}
