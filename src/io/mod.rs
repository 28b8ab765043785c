//! Input/output operations, CLI surface, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Pipeline constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Candidate file listing and seeded sampling
pub mod files;
/// Image decode and encode glue
pub mod image;
/// Progress display for pipeline phases
pub mod progress;
