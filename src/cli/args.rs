//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Push local media files to an Android device over adb and trigger a gallery rescan
#[derive(Parser, Debug)]
#[command(name = "media-pusher")]
#[command(version = "1.0.0")]
#[command(
    about = "Push local media files to an Android device over adb, with per-file cleanup after verified transfers",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Local folder to push files from (overrides config)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Only push files with these extensions, e.g. --ext mp4 --ext .mov (overrides config)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Destination directory on the device (overrides config)
    #[arg(short, long)]
    pub remote_dir: Option<String>,

    /// Device serial to target, as shown by `adb devices` (overrides config)
    #[arg(short, long)]
    pub serial: Option<String>,

    /// Keep local files after a successful push (disables auto-delete)
    #[arg(short, long)]
    pub keep_local: bool,

    /// Skip the media-library rescan after each push
    #[arg(long)]
    pub no_rescan: bool,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push every matching file under a folder (the default command)
    Push {
        /// Folder to push; falls back to --folder or the configured source directory
        folder: Option<PathBuf>,
    },

    /// Push a single file
    PushFile {
        /// The file to push
        file: PathBuf,
    },

    /// List devices visible to the bridge tool
    Devices,

    /// Open the configuration file in your default editor
    ///
    /// The config file is stored at:
    /// - Windows: %APPDATA%\media_push_tool\config.toml
    /// - Linux/macOS: ~/.config/media_push_tool/config.toml
    ///
    /// If no config file exists, a default one will be created.
    Config {
        /// Show the config file path without opening it
        #[arg(long)]
        path: bool,

        /// Reset config to defaults (creates a fresh config file)
        #[arg(long)]
        reset: bool,
    },

    /// Generate a configuration file at a specific location
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_parses() {
        let args = Args::parse_from(["media-pusher"]);
        assert!(args.command.is_none());
        assert!(!args.keep_local);
        assert!(!args.no_rescan);
    }

    #[test]
    fn test_push_with_flags() {
        let args = Args::parse_from([
            "media-pusher",
            "--ext",
            "mp4",
            "--ext",
            ".mov",
            "--keep-local",
            "push",
            "/videos",
        ]);
        assert_eq!(args.extensions, vec!["mp4", ".mov"]);
        assert!(args.keep_local);
        match args.command {
            Some(Commands::Push { folder }) => {
                assert_eq!(folder, Some(PathBuf::from("/videos")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_push_file_subcommand() {
        let args = Args::parse_from(["media-pusher", "push-file", "/videos/clip.mp4"]);
        match args.command {
            Some(Commands::PushFile { file }) => {
                assert_eq!(file, PathBuf::from("/videos/clip.mp4"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serial_and_remote_dir_overrides() {
        let args = Args::parse_from([
            "media-pusher",
            "--serial",
            "emulator-5554",
            "--remote-dir",
            "/sdcard/DCIM",
            "devices",
        ]);
        assert_eq!(args.serial.as_deref(), Some("emulator-5554"));
        assert_eq!(args.remote_dir.as_deref(), Some("/sdcard/DCIM"));
        assert!(matches!(args.command, Some(Commands::Devices)));
    }
}
