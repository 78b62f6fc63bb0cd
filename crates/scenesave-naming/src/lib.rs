#![deny(unsafe_code)]

pub mod engine;
pub mod error;
mod extract;

pub use crate::engine::NamingEngine;
pub use crate::error::{NamingError, RenderError};
