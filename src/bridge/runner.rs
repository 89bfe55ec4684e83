//! Narrow subprocess abstraction for external tool invocation
//!
//! Everything that shells out goes through the [`CommandRunner`] trait so the
//! rest of the crate never touches `std::process` directly. This keeps the
//! push pipeline testable with a scripted runner instead of a real `adb`
//! binary (see [`crate::bridge::mock`]).

use crate::core::error::{PushError, Result};
use std::process::Command;

/// Captured result of one external command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Process exit status code, if the process terminated normally
    pub status: Option<i32>,
    /// Captured standard output, lossily decoded as UTF-8
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8
    pub stderr: String,
}

impl CommandOutput {
    /// Create an output representing a clean success
    pub fn success_with(stdout: &str) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Create an output representing a failure with diagnostic text
    pub fn failure_with(status: i32, stderr: &str) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Whether the command exited with status zero
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Best diagnostic text for a failed command
    ///
    /// Prefers stderr, falls back to stdout (some tools report errors there),
    /// then to the raw exit status.
    pub fn diagnostic(&self) -> String {
        let text = if !self.stderr.trim().is_empty() {
            self.stderr.trim()
        } else {
            self.stdout.trim()
        };

        if text.is_empty() {
            match self.status {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            }
        } else {
            text.to_string()
        }
    }
}

/// Trait for running external commands
///
/// Implemented by [`SystemRunner`] for real execution and by
/// [`crate::bridge::mock::ScriptedRunner`] for tests.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits, capturing output
    ///
    /// Returns `Err` only when the command could not be started at all
    /// (e.g. the program is not installed). A command that starts but exits
    /// nonzero is an `Ok` with a failing [`CommandOutput`].
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Real command runner using `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PushError::BridgeUnavailable(program.to_string())
            } else {
                PushError::CommandFailed {
                    command: program.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_detection() {
        assert!(CommandOutput::success_with("ok").success());
        assert!(!CommandOutput::failure_with(1, "boom").success());

        let signalled = CommandOutput {
            status: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!signalled.success());
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let out = CommandOutput {
            status: Some(1),
            stdout: "something on stdout".to_string(),
            stderr: "error: no devices found".to_string(),
        };
        assert_eq!(out.diagnostic(), "error: no devices found");
    }

    #[test]
    fn test_diagnostic_falls_back_to_stdout_then_status() {
        let out = CommandOutput {
            status: Some(1),
            stdout: "adb: device offline\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(out.diagnostic(), "adb: device offline");

        let silent = CommandOutput::failure_with(127, "");
        assert_eq!(silent.diagnostic(), "exit status 127");

        let signalled = CommandOutput {
            status: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(signalled.diagnostic(), "terminated by signal");
    }

    #[test]
    fn test_missing_program_maps_to_bridge_unavailable() {
        let runner = SystemRunner::new();
        let err = runner
            .run("definitely-not-a-real-binary-5f2a", &["push"])
            .unwrap_err();
        assert!(matches!(err, PushError::BridgeUnavailable(_)));
    }
}
