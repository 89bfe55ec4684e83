//! Device-bridge abstraction for testability
//!
//! [`DeviceBridge`] is the seam between the push pipeline and the external
//! device-bridge tool. The real implementation is [`crate::bridge::AdbBridge`];
//! tests drive the same pipeline through an [`AdbBridge`] backed by a
//! scripted command runner.
//!
//! [`AdbBridge`]: crate::bridge::AdbBridge

use crate::core::error::Result;
use std::fmt::{self, Display};
use std::path::Path;

/// A connected device as reported by the bridge tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeDevice {
    /// Device serial (e.g. "R5CT30ABCDE" or "emulator-5554")
    pub serial: String,
    /// Connection state reported by the tool ("device", "unauthorized", ...)
    pub state: String,
    /// Free-form description (model, product, transport id)
    pub description: String,
}

impl BridgeDevice {
    /// Whether the device is ready to receive files
    pub fn is_ready(&self) -> bool {
        self.state == "device"
    }
}

impl Display for BridgeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} [{}]", self.serial, self.state)
        } else {
            write!(f, "{} [{}] {}", self.serial, self.state, self.description)
        }
    }
}

/// Trait for the external device-bridge tool
///
/// The tool's own protocol is never reimplemented here; each method maps to
/// one invocation of the external command.
pub trait DeviceBridge: Send + Sync {
    /// Copy a local file to an absolute path on the device
    ///
    /// Returns `Ok` only when the tool reported a zero exit status. A nonzero
    /// exit becomes an error carrying the tool's diagnostic text.
    fn push(&self, local: &Path, remote: &str) -> Result<()>;

    /// Ask the device to re-index a file into its media library
    ///
    /// Best-effort by design at the call sites; callers log failures and
    /// carry on.
    fn request_media_scan(&self, remote: &str) -> Result<()>;

    /// List devices currently visible to the bridge tool
    fn list_devices(&self) -> Result<Vec<BridgeDevice>>;
}
