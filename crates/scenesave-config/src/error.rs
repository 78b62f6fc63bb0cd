#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no disciplines configured")]
    EmptyVocabulary,

    #[error("discipline entry has an empty {field}")]
    EmptyDisciplineField { field: &'static str },

    #[error("duplicate discipline keyword: {keyword}")]
    DuplicateKeyword { keyword: String },

    #[error("default discipline {canonical} is not in the vocabulary")]
    UnknownDefaultDiscipline { canonical: String },

    #[error("default {field} must not be empty")]
    EmptyDefault { field: &'static str },

    #[error("regex.{name} pattern must not be empty")]
    EmptyPattern { name: &'static str },

    #[error("{template} template references unknown placeholder {{{placeholder}}}")]
    UnknownPlaceholder {
        template: &'static str,
        placeholder: String,
    },

    #[error("{template} template is missing required placeholder {{{placeholder}}}")]
    MissingPlaceholder {
        template: &'static str,
        placeholder: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
