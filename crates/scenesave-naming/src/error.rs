#![deny(unsafe_code)]

use scenesave_config::ConfigError;

/// Engine construction errors. Any of these means the configuration is
/// unusable and the process should not continue with this convention.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("invalid regex.{name} pattern {pattern:?}: {source}")]
    Pattern {
        name: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Render-time validation failure, distinct from extraction: extraction
/// always succeeds with defaults, but a record whose description is empty
/// even after defaults points at a configuration or caller bug.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot render a filename from an empty description")]
    EmptyDescription,
}
