//! Configuration module for Money Lodge
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LodgePaths;
pub use settings::Settings;
