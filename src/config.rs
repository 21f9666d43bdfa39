//! Configuration module for media-browser
//!
//! This module provides configuration constants, default values, and configuration types
//! for the media browsing server.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
