//! Error taxonomy, constants, documents and the command-line surface

/// Command-line interface and batch document processing
pub mod cli;
/// Palette constants and output settings
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Progress bars for batch runs
pub mod progress;
/// JSON grid and task documents
pub mod serialization;
/// Program capability interface and built-in operation pipelines
pub mod session;
