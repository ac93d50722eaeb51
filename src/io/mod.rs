//! Input/output around the solver core
//!
//! This module contains:
//! - Cover file reading and writing
//! - The command-line driver and its defaults
//! - Progress display and error types

/// Command-line interface and mode dispatch
pub mod cli;
/// Driver constants and defaults
pub mod configuration;
/// Plain-text cover file format
pub mod cover_file;
/// Error types and context helpers
pub mod error;
/// Spinner-based progress reporting
pub mod progress;
