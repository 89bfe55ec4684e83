//! Device-bridge module
//!
//! Everything that talks to the external `adb` tool lives here:
//!
//! - `runner` - narrow subprocess interface ([`CommandRunner`]) and the real
//!   [`SystemRunner`]
//! - `traits` - the [`DeviceBridge`] seam the push pipeline is generic over
//! - `adb` - [`AdbBridge`], the adb-backed implementation
//! - `mock` - [`ScriptedRunner`] test double (no device required)

pub mod adb;
pub mod mock;
pub mod runner;
pub mod traits;

// Re-export commonly used types for convenience
pub use adb::AdbBridge;
pub use mock::ScriptedRunner;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use traits::{BridgeDevice, DeviceBridge};
