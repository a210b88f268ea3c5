//! Configuration module for BudgeIt
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgeitPaths;
pub use settings::Settings;
