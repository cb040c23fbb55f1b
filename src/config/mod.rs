//! Configuration module for the assistant
//!
//! - Base directory resolution and per-collection file paths
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AssistantPaths;
pub use settings::Settings;
