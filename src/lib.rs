//! Media Push Tool Library
//!
//! Pushes local media files to an attached Android device through the `adb`
//! device-bridge tool, asks the device to re-index each transferred file
//! into its media library, and optionally deletes local files after a
//! verified successful transfer.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`core`] - Push workflows: configuration, error handling, candidate
//!   selection, single-file and folder pushes
//! - [`bridge`] - Invocation of the external `adb` tool, behind a narrow
//!   command-runner interface so tests never need a real device
//! - [`cli`] - Command-line interface (only used by the binary)
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use media_push_tool::bridge::AdbBridge;
//! use media_push_tool::core::batch::push_folder;
//! use media_push_tool::core::config::Config;
//! use std::path::Path;
//! use std::sync::atomic::AtomicBool;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default()?;
//!     let bridge = AdbBridge::new(&config.bridge.program, config.bridge.serial.clone());
//!
//!     let shutdown_flag = Arc::new(AtomicBool::new(false));
//!     let stats = push_folder(
//!         &bridge,
//!         Path::new("/videos"),
//!         &config.extension_filter(),
//!         config.push_options(),
//!         shutdown_flag,
//!     )?;
//!
//!     println!("{}/{} pushed", stats.succeeded, stats.seen);
//!     Ok(())
//! }
//! ```
//!
//! # Testing Without a Device
//!
//! The [`bridge::mock`] module ships a scripted command runner, so the full
//! pipeline can be driven in tests:
//!
//! ```rust
//! use media_push_tool::bridge::{AdbBridge, ScriptedRunner};
//!
//! let bridge = AdbBridge::with_runner(ScriptedRunner::succeeding(), "adb", None);
//! ```

pub mod bridge;
pub mod cli;
pub mod core;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
