//! Meeting Scribe - participant identification for meeting transcripts
//!
//! This library exports core modules for testing and reuse by the recording shell.

/// Configuration management
pub mod config;
/// Name extraction and roster validation
pub mod names;
/// Roster model and persistence
pub mod roster;
/// Telemetry and logging
pub mod telemetry;
