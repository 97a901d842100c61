//! Glue between the game core and the outside world

/// Command-line interface and game loop
pub mod cli;
/// Constants and validated game rules
pub mod configuration;
/// Error types
pub mod error;
/// PNG board snapshots
pub mod image;
/// Key and swipe input mapping
pub mod input;
/// Logging setup
pub mod logging;
/// Autoplay progress display
pub mod progress;
/// Terminal board rendering
pub mod render;
/// Best score and mute preference persistence
pub mod storage;
