//! Error types for the media push tool

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the media push tool
#[derive(Error, Debug)]
pub enum PushError {
    /// The device-bridge tool could not be started (not installed / not on PATH)
    #[error("Device-bridge tool '{0}' not found. Install Android platform-tools or set [bridge].program in the config.")]
    BridgeUnavailable(String),

    /// A bridge invocation ran but reported failure
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// File transfer failed
    #[error("Transfer failed for '{filename}': {message}")]
    TransferFailed { filename: String, message: String },

    /// The source folder for a batch push does not exist
    #[error("Folder does not exist: {0}")]
    FolderNotFound(PathBuf),

    /// The source path for a single push is not a regular file
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    /// General I/O error
    #[error("IO error: {0}")]
    IoError(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PushError>;

impl From<std::io::Error> for PushError {
    fn from(err: std::io::Error) -> Self {
        PushError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = PushError::TransferFailed {
            filename: "clip.mp4".to_string(),
            message: "device offline".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transfer failed for 'clip.mp4': device offline"
        );

        let err = PushError::FolderNotFound(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PushError = io.into();
        assert!(matches!(err, PushError::IoError(_)));
    }
}
