#![deny(unsafe_code)]

pub mod scene_file;

pub use scene_file::SceneFile;
