#![deny(unsafe_code)]

pub mod error;
pub mod naming;

pub use crate::error::ConfigError;
pub use crate::naming::{
    Defaults, DisciplineEntry, MapConfig, NamingConfig, RegexPatterns, Templates,
};
