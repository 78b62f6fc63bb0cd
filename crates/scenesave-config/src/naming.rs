//! The naming-convention configuration consumed by the inference engine.
//!
//! A `NamingConfig` is loaded once at startup (from TOML, or the compiled-in
//! studio defaults) and treated as immutable for the lifetime of the
//! process. Structural problems are fatal at load time; nothing downstream
//! repairs a bad configuration.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Placeholders the filename template may use.
const FILENAME_PLACEHOLDERS: [&str; 6] = [
    "DESCRIPTION",
    "DISCIPLINE",
    "VERSION",
    "INITIALS",
    "OPTIONAL",
    "EXT",
];

/// Placeholders the filename template must use.
const FILENAME_REQUIRED: [&str; 4] = ["DESCRIPTION", "DISCIPLINE", "VERSION", "EXT"];

const PATH_PLACEHOLDERS: [&str; 3] = ["JOB", "SCENE", "SHOT"];

const FOLDER_PLACEHOLDERS: [&str; 1] = ["FOLDER"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    pub defaults: Defaults,
    #[serde(rename = "discipline")]
    pub disciplines: Vec<DisciplineEntry>,
    pub regex: RegexPatterns,
    pub template: Templates,
    #[serde(default)]
    pub map: MapConfig,
}

/// Field values substituted when extraction comes up empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub description: String,
    pub discipline: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub extension: String,
    /// Fallback artist initials used when no username token is recovered.
    #[serde(default)]
    pub initials: String,
}

/// One entry of the discipline vocabulary, in match-priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplineEntry {
    /// Token searched for in legacy filenames (case-insensitive).
    pub keyword: String,
    /// Upper-cased form stored in records and rendered into filenames.
    pub canonical: String,
    /// On-disk scenes subfolder for this discipline.
    #[serde(default)]
    pub folder: Option<String>,
}

/// Pattern sources for the extraction heuristics.
///
/// Compilation happens at engine construction, which is also where a bad
/// pattern becomes a fatal error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexPatterns {
    pub username: String,
    pub leading_version: String,
    pub bare_numbers: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Templates {
    /// Canonical filename template.
    pub filename: String,
    /// Save-directory template resolved from a job/scene/shot context.
    #[serde(default = "default_path_template")]
    pub path: String,
    /// Template for the per-discipline scenes subfolder.
    #[serde(default = "default_folder_template")]
    pub discipline_folder: String,
}

/// Site layout knobs carried over from the studio config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Top-level directory under which jobs live (e.g. `jobs`).
    #[serde(default = "default_server_root")]
    pub server_root: String,
    #[serde(default)]
    pub scene_ignore_list: Vec<String>,
    #[serde(default)]
    pub shot_ignore_list: Vec<String>,
    /// Discipline folders that nest under `rig/`.
    #[serde(default)]
    pub rig_disciplines: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            server_root: default_server_root(),
            scene_ignore_list: Vec::new(),
            shot_ignore_list: Vec::new(),
            rig_disciplines: Vec::new(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_path_template() -> String {
    "/jobs/{JOB}/{SCENE}/{SHOT}/maya/scenes".to_string()
}

fn default_folder_template() -> String {
    "{FOLDER}".to_string()
}

fn default_server_root() -> String {
    "jobs".to_string()
}

impl NamingConfig {
    /// The compiled-in studio defaults.
    ///
    /// Compound keywords come before their suffixes so `techanim` is never
    /// shadowed by `anim` at the same match position.
    pub fn builtin() -> NamingConfig {
        NamingConfig {
            defaults: Defaults {
                description: "untitled".to_string(),
                discipline: "MDL".to_string(),
                version: 1,
                extension: "ma".to_string(),
                initials: "aw".to_string(),
            },
            disciplines: vec![
                entry("techanim", "TECHANIM", "techAnim"),
                entry("lookdev", "LOOKDEV", "lookdev"),
                entry("layout", "LAYOUT", "layout"),
                entry("crowd", "CROWD", "crowd"),
                entry("anim", "ANIM", "anim"),
                entry("mdl", "MDL", "model"),
                entry("rig", "RIG", "bodyRig"),
                entry("fx", "FX", "fx"),
            ],
            regex: RegexPatterns {
                username: "_([A-Za-z]{2})[._]".to_string(),
                leading_version: "[vV]([0-9]+)".to_string(),
                bare_numbers: "[0-9]+".to_string(),
            },
            template: Templates {
                filename: "{DESCRIPTION}_{DISCIPLINE}_v{VERSION}_{INITIALS}_{OPTIONAL}.{EXT}"
                    .to_string(),
                path: default_path_template(),
                discipline_folder: default_folder_template(),
            },
            map: MapConfig {
                server_root: default_server_root(),
                scene_ignore_list: vec!["tmp".to_string(), "reference".to_string()],
                shot_ignore_list: vec!["common".to_string()],
                rig_disciplines: vec!["bodyRig".to_string(), "techAnim".to_string()],
            },
        }
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<NamingConfig, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config: NamingConfig = toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Structural validation, fatal at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disciplines.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        let mut seen = BTreeSet::new();
        for entry in &self.disciplines {
            if entry.keyword.trim().is_empty() {
                return Err(ConfigError::EmptyDisciplineField { field: "keyword" });
            }
            if entry.canonical.trim().is_empty() {
                return Err(ConfigError::EmptyDisciplineField { field: "canonical" });
            }
            if !seen.insert(entry.keyword.to_lowercase()) {
                return Err(ConfigError::DuplicateKeyword {
                    keyword: entry.keyword.clone(),
                });
            }
        }
        if self.canonical_for(&self.defaults.discipline).is_none() {
            return Err(ConfigError::UnknownDefaultDiscipline {
                canonical: self.defaults.discipline.clone(),
            });
        }
        if self.defaults.description.is_empty() {
            return Err(ConfigError::EmptyDefault {
                field: "description",
            });
        }
        if self.defaults.extension.is_empty() {
            return Err(ConfigError::EmptyDefault { field: "extension" });
        }
        for (name, pattern) in [
            ("username", &self.regex.username),
            ("leading_version", &self.regex.leading_version),
            ("bare_numbers", &self.regex.bare_numbers),
        ] {
            if pattern.is_empty() {
                return Err(ConfigError::EmptyPattern { name });
            }
        }
        check_template(
            "filename",
            &self.template.filename,
            &FILENAME_PLACEHOLDERS,
            &FILENAME_REQUIRED,
        )?;
        check_template("path", &self.template.path, &PATH_PLACEHOLDERS, &[])?;
        check_template(
            "discipline_folder",
            &self.template.discipline_folder,
            &FOLDER_PLACEHOLDERS,
            &[],
        )?;
        Ok(())
    }

    /// Canonical discipline name for a matched token, case-insensitive over
    /// both keywords and canonical forms.
    pub fn canonical_for(&self, token: &str) -> Option<&str> {
        self.disciplines
            .iter()
            .find(|entry| {
                entry.keyword.eq_ignore_ascii_case(token)
                    || entry.canonical.eq_ignore_ascii_case(token)
            })
            .map(|entry| entry.canonical.as_str())
    }

    /// Whether a candidate token collides with the discipline vocabulary.
    pub fn is_discipline_token(&self, token: &str) -> bool {
        self.canonical_for(token).is_some()
    }

    /// Scenes subfolder for a canonical discipline name.
    pub fn folder_for(&self, canonical: &str) -> Option<&str> {
        self.disciplines
            .iter()
            .find(|entry| entry.canonical.eq_ignore_ascii_case(canonical))
            .and_then(|entry| entry.folder.as_deref())
    }

    /// Vocabulary keywords in match-priority order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.disciplines.iter().map(|entry| entry.keyword.as_str())
    }
}

fn entry(keyword: &str, canonical: &str, folder: &str) -> DisciplineEntry {
    DisciplineEntry {
        keyword: keyword.to_string(),
        canonical: canonical.to_string(),
        folder: Some(folder.to_string()),
    }
}

fn check_template(
    name: &'static str,
    template: &str,
    known: &[&str],
    required: &[&'static str],
) -> Result<(), ConfigError> {
    let found = placeholders(template);
    for placeholder in &found {
        if !known.contains(placeholder) {
            return Err(ConfigError::UnknownPlaceholder {
                template: name,
                placeholder: (*placeholder).to_string(),
            });
        }
    }
    for placeholder in required {
        if !found.contains(placeholder) {
            return Err(ConfigError::MissingPlaceholder {
                template: name,
                placeholder: *placeholder,
            });
        }
    }
    Ok(())
}

/// Extract `{NAME}` placeholders from a template string, in order.
fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        found.push(&rest[start + 1..start + 1 + len]);
        rest = &rest[start + 1 + len + 1..];
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validates() {
        NamingConfig::builtin().validate().expect("builtin config");
    }

    #[test]
    fn test_canonical_lookup_is_case_insensitive() {
        let config = NamingConfig::builtin();
        assert_eq!(config.canonical_for("Anim"), Some("ANIM"));
        assert_eq!(config.canonical_for("FX"), Some("FX"));
        assert_eq!(config.canonical_for("nope"), None);
    }

    #[test]
    fn test_folder_lookup() {
        let config = NamingConfig::builtin();
        assert_eq!(config.folder_for("MDL"), Some("model"));
        assert_eq!(config.folder_for("RIG"), Some("bodyRig"));
    }

    #[test]
    fn test_placeholders_scan() {
        assert_eq!(
            placeholders("{A}_{B}.{C}"),
            vec!["A", "B", "C"],
        );
        assert!(placeholders("plain text").is_empty());
        assert_eq!(placeholders("open {A} then {unclosed"), vec!["A"]);
    }

    #[test]
    fn test_duplicate_keyword_rejected() {
        let mut config = NamingConfig::builtin();
        config.disciplines.push(entry("ANIM", "ANIM", "anim"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateKeyword { .. })
        ));
    }

    #[test]
    fn test_unknown_default_discipline_rejected() {
        let mut config = NamingConfig::builtin();
        config.defaults.discipline = "PAINT".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownDefaultDiscipline { .. })
        ));
    }

    #[test]
    fn test_template_placeholder_checks() {
        let mut config = NamingConfig::builtin();
        config.template.filename = "{DESCRIPTION}_{WHAT}.{EXT}".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownPlaceholder { .. })
        ));

        let mut config = NamingConfig::builtin();
        config.template.filename = "{DESCRIPTION}.{EXT}".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPlaceholder { .. })
        ));
    }
}
