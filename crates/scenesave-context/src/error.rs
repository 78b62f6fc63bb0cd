#![deny(unsafe_code)]

use crate::context::ContextLevel;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("context not found in asset store: {context}")]
    NotFound { context: String },

    #[error("context is missing its {level} name")]
    MissingName { level: ContextLevel },
}
