#![deny(unsafe_code)]

pub mod context;
pub mod error;
pub mod fs;
pub mod planner;
pub mod store;
pub mod tree;

pub use crate::context::{Context, ContextLevel};
pub use crate::error::ContextError;
pub use crate::fs::FsStore;
pub use crate::planner::{SavePlan, SavePlanner};
pub use crate::store::{AssetStore, ContextHandle, MemoryStore};
pub use crate::tree::DirectoryTree;
