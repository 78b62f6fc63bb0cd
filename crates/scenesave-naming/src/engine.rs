//! Filename inference against a studio naming convention.
//!
//! The engine recovers semantic fields from loosely structured legacy
//! filenames and reserializes records into the canonical scheme. Ambiguity
//! is resolved deterministically (last match by position wins); messy input
//! is absorbed by the configured defaults, never surfaced as an error.

use regex::Regex;
use tracing::debug;

use scenesave_config::NamingConfig;
use scenesave_model::SceneFile;

use crate::error::{NamingError, RenderError};
use crate::extract::{find_description, find_extension, last_token, parse_digits};

/// The inference engine: a validated configuration plus its compiled
/// patterns.
///
/// Construction is the configuration gate: malformed patterns or templates
/// fail here, before any filename is touched. The engine itself is
/// immutable and safe to share across threads.
#[derive(Debug)]
pub struct NamingEngine {
    config: NamingConfig,
    username: Regex,
    leading_version: Regex,
    bare_numbers: Regex,
    disciplines: Regex,
}

impl NamingEngine {
    /// Validate the configuration and compile its patterns.
    pub fn new(config: NamingConfig) -> Result<NamingEngine, NamingError> {
        config.validate()?;
        let username = compile("username", &config.regex.username)?;
        let leading_version = compile("leading_version", &config.regex.leading_version)?;
        let bare_numbers = compile("bare_numbers", &config.regex.bare_numbers)?;
        let disciplines = discipline_pattern(&config)?;
        Ok(NamingEngine {
            config,
            username,
            leading_version,
            bare_numbers,
            disciplines,
        })
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Decompose an arbitrary filename into a `SceneFile` record.
    ///
    /// The extraction pipeline runs in a fixed order, each step independent
    /// of the later ones:
    ///
    /// 1. **Version** — last `v`/`V`-prefixed digit run; only when none
    ///    exists anywhere, the last bare digit run. Clamped to `>= 1`.
    /// 2. **Discipline** — last vocabulary keyword by position,
    ///    case-insensitive over the whole filename, mapped to its canonical
    ///    form.
    /// 3. **User** — last username-pattern capture that does not collide
    ///    with the discipline vocabulary, lower-cased.
    /// 4. **Description** — the prefix before the earliest located token
    ///    (see `extract::find_description` for the codified tie-breaks).
    /// 5. **Extension** — suffix after the final dot.
    ///
    /// Every step falls back to the configured default, so inference never
    /// fails.
    pub fn infer(&self, filename: &str) -> SceneFile {
        let version = self.find_version(filename);
        let discipline = self.find_discipline(filename);
        let user = self.find_user(filename);
        let version_value = version
            .unwrap_or(self.config.defaults.version)
            .max(1);
        // Description works from the raw extraction results; defaults are
        // substituted only after the cutoff scan.
        let description = find_description(
            filename,
            version_value,
            user.as_deref().unwrap_or(""),
            discipline.as_deref().unwrap_or(""),
        );
        let extension = find_extension(filename);
        debug!(
            filename,
            version = ?version,
            discipline = ?discipline,
            user = ?user,
            description = ?description,
            extension = ?extension,
            "inferred fields"
        );

        let defaults = &self.config.defaults;
        SceneFile {
            description: description.unwrap_or_else(|| defaults.description.clone()),
            discipline: discipline.unwrap_or_else(|| defaults.discipline.clone()),
            version: version_value,
            user: user.unwrap_or_else(|| defaults.initials.clone()),
            note: None,
            extension: extension.unwrap_or_else(|| defaults.extension.clone()),
        }
    }

    /// Serialize a record into the canonical filename.
    ///
    /// The optional-note segment is dropped from the template when the note
    /// is absent. The version renders zero-padded to three digits; larger
    /// values keep their full decimal form.
    pub fn render(&self, scene: &SceneFile) -> Result<String, RenderError> {
        if scene.description.is_empty() {
            return Err(RenderError::EmptyDescription);
        }
        let mut template = self.config.template.filename.clone();
        if scene.note.is_none() {
            template = template.replace("_{OPTIONAL}", "");
        }
        Ok(template
            .replace("{DESCRIPTION}", &scene.description)
            .replace("{DISCIPLINE}", &scene.discipline)
            .replace("{VERSION}", &format!("{:03}", scene.version))
            .replace("{INITIALS}", &scene.user)
            .replace("{OPTIONAL}", scene.note.as_deref().unwrap_or(""))
            .replace("{EXT}", &scene.extension))
    }

    /// Version strategies in priority order: leading-v, then bare numbers.
    fn find_version(&self, filename: &str) -> Option<u32> {
        last_token(&self.leading_version, filename)
            .or_else(|| last_token(&self.bare_numbers, filename))
            .map(parse_digits)
    }

    /// Last discipline keyword by position, as its canonical name.
    fn find_discipline(&self, filename: &str) -> Option<String> {
        let matched = self.disciplines.find_iter(filename).last()?;
        let token = matched.as_str();
        let canonical = self.config.canonical_for(token).unwrap_or(token);
        Some(canonical.to_uppercase())
    }

    /// Last username capture that is not a discipline token.
    fn find_user(&self, filename: &str) -> Option<String> {
        let mut last = None;
        for caps in self.username.captures_iter(filename) {
            let token = crate::extract::capture_token(&caps);
            if token.is_empty() || self.config.is_discipline_token(token) {
                continue;
            }
            last = Some(token);
        }
        last.map(str::to_lowercase)
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, NamingError> {
    Regex::new(pattern).map_err(|source| NamingError::Pattern {
        name,
        pattern: pattern.to_string(),
        source,
    })
}

/// One case-insensitive alternation over the vocabulary, in configured
/// order so compound keywords win ties at the same position.
fn discipline_pattern(config: &NamingConfig) -> Result<Regex, NamingError> {
    let alternation: Vec<String> = config.keywords().map(regex::escape).collect();
    let pattern = format!("(?i:{})", alternation.join("|"));
    compile("disciplines", &pattern)
}
