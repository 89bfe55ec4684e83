//! adb-backed implementation of the device bridge
//!
//! Wraps the `adb` command-line tool. Each [`DeviceBridge`] method is one
//! adb invocation:
//!
//! - `push` → `adb push <local> <remote>`
//! - `request_media_scan` → `adb shell am broadcast -a
//!   android.intent.action.MEDIA_SCANNER_SCAN_FILE -d file://<remote>`
//! - `list_devices` → `adb devices -l`
//!
//! When a device serial is configured, every invocation gets a `-s SERIAL`
//! prefix so multi-device setups stay unambiguous.

use crate::bridge::runner::{CommandRunner, SystemRunner};
use crate::bridge::traits::{BridgeDevice, DeviceBridge};
use crate::core::error::{PushError, Result};
use log::{debug, trace};
use std::path::Path;

/// Intent action broadcast to re-index a single file
const MEDIA_SCAN_ACTION: &str = "android.intent.action.MEDIA_SCANNER_SCAN_FILE";

/// Device bridge backed by the `adb` executable
pub struct AdbBridge<R: CommandRunner> {
    runner: R,
    program: String,
    serial: Option<String>,
}

impl AdbBridge<SystemRunner> {
    /// Create a bridge that invokes the real `adb` binary
    pub fn new(program: &str, serial: Option<String>) -> Self {
        Self::with_runner(SystemRunner::new(), program, serial)
    }
}

impl<R: CommandRunner> AdbBridge<R> {
    /// Create a bridge over an arbitrary command runner (used by tests)
    pub fn with_runner(runner: R, program: &str, serial: Option<String>) -> Self {
        Self {
            runner,
            program: program.to_string(),
            serial,
        }
    }

    /// Build the argument vector for one adb invocation
    ///
    /// Prepends `-s SERIAL` when a target device is configured.
    fn build_args<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(ref serial) = self.serial {
            full.push("-s");
            full.push(serial.as_str());
        }
        full.extend_from_slice(args);
        full
    }

    /// Access the underlying command runner (scripted runners expose the
    /// invocation log through this)
    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run(&self, args: &[&str]) -> Result<crate::bridge::runner::CommandOutput> {
        let full = self.build_args(args);
        trace!("{} {}", self.program, full.join(" "));
        self.runner.run(&self.program, &full)
    }
}

impl<R: CommandRunner> DeviceBridge for AdbBridge<R> {
    fn push(&self, local: &Path, remote: &str) -> Result<()> {
        let local_str = local.to_string_lossy();
        let output = self.run(&["push", &local_str, remote])?;

        if output.success() {
            debug!("pushed {} -> {}", local.display(), remote);
            Ok(())
        } else {
            Err(PushError::TransferFailed {
                filename: local
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| local_str.into_owned()),
                message: output.diagnostic(),
            })
        }
    }

    fn request_media_scan(&self, remote: &str) -> Result<()> {
        let uri = format!("file://{}", remote);
        let output = self.run(&[
            "shell",
            "am",
            "broadcast",
            "-a",
            MEDIA_SCAN_ACTION,
            "-d",
            &uri,
        ])?;

        if output.success() {
            debug!("media scan requested for {}", remote);
            Ok(())
        } else {
            Err(PushError::CommandFailed {
                command: format!("{} shell am broadcast", self.program),
                message: output.diagnostic(),
            })
        }
    }

    fn list_devices(&self) -> Result<Vec<BridgeDevice>> {
        let output = self.run(&["devices", "-l"])?;

        if !output.success() {
            return Err(PushError::CommandFailed {
                command: format!("{} devices", self.program),
                message: output.diagnostic(),
            });
        }

        Ok(parse_device_list(&output.stdout))
    }
}

/// Parse the output of `adb devices -l`
///
/// The first line is a banner ("List of devices attached"); each following
/// non-empty line is `SERIAL<whitespace>STATE [description...]`.
fn parse_device_list(stdout: &str) -> Vec<BridgeDevice> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let mut parts = line.split_whitespace();
            let serial = parts.next()?.to_string();
            let state = parts.next()?.to_string();
            let description = parts.collect::<Vec<_>>().join(" ");
            Some(BridgeDevice {
                serial,
                state,
                description,
            })
        })
        .collect()
}
