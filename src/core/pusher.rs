//! Single-file push workflow
//!
//! One push is three steps against the device bridge:
//!
//! 1. copy the file to `<remote directory>/<base name>` - this step alone
//!    decides success
//! 2. on success, request a media-library rescan for the destination
//!    (best-effort)
//! 3. on success, delete the local source when auto-delete is enabled
//!    (best-effort)
//!
//! Rescan and deletion failures are logged and never flip a successful push
//! back to failure. Every other error is caught here and reported; nothing
//! propagates to the caller.

use crate::bridge::traits::DeviceBridge;
use crate::core::error::{PushError, Result};
use log::{error, info, warn};
use std::fs;
use std::path::Path;

/// Options controlling a push
#[derive(Debug, Clone)]
pub struct PushOptions {
    /// Destination directory on the device (must already exist)
    pub remote_dir: String,
    /// Request a media-library rescan after each successful copy
    pub rescan: bool,
    /// Delete the local file after a confirmed successful copy
    pub auto_delete: bool,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            remote_dir: "/sdcard/Movies/TikTok".to_string(),
            rescan: true,
            auto_delete: true,
        }
    }
}

/// Join a remote directory and a file's base name into a device path
///
/// Remote paths are always `/`-separated, regardless of the host OS.
pub fn remote_path_for(remote_dir: &str, local: &Path) -> String {
    let name = local
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}/{}", remote_dir.trim_end_matches('/'), name)
}

/// Pushes single files through a device bridge
pub struct Pusher<'a, B: DeviceBridge> {
    bridge: &'a B,
    options: PushOptions,
}

impl<'a, B: DeviceBridge> Pusher<'a, B> {
    pub fn new(bridge: &'a B, options: PushOptions) -> Self {
        Self { bridge, options }
    }

    pub fn options(&self) -> &PushOptions {
        &self.options
    }

    /// Push one file to the device
    ///
    /// Returns true only when the copy step succeeded. Errors are reported
    /// through the log; they never propagate.
    pub fn push_file(&self, local: &Path) -> bool {
        match self.try_push(local) {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// The fallible core of a push; only the copy step can fail here
    fn try_push(&self, local: &Path) -> Result<()> {
        if !local.is_file() {
            return Err(PushError::NotAFile(local.to_path_buf()));
        }

        let remote = remote_path_for(&self.options.remote_dir, local);
        self.bridge.push(local, &remote)?;
        info!("Pushed {} -> {}", local.display(), remote);

        if self.options.rescan {
            if let Err(e) = self.bridge.request_media_scan(&remote) {
                warn!("Media rescan failed for {}: {}", remote, e);
            }
        }

        if self.options.auto_delete {
            match fs::remove_file(local) {
                Ok(()) => info!("Deleted local file {}", local.display()),
                Err(e) => warn!("Could not delete local file {}: {}", local.display(), e),
            }
        }

        Ok(())
    }
}
