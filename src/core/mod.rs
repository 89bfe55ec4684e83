//! Core functionality for the media push tool
//!
//! This module contains the push workflows and their supporting pieces:
//!
//! - `config` - Configuration loading and management
//! - `error` - Error types
//! - `scanner` - Candidate selection (tree walk + extension filter)
//! - `pusher` - Single-file push workflow
//! - `batch` - Folder push workflow with aggregate counters

pub mod batch;
pub mod config;
pub mod error;
pub mod pusher;
pub mod scanner;

// Re-export commonly used types for convenience
pub use batch::{push_folder, BatchStats};
pub use config::Config;
pub use error::{PushError, Result};
pub use pusher::{PushOptions, Pusher};
pub use scanner::{collect_candidates, ExtensionFilter};
