//! CLI library components for scenesave.

pub mod logging;
