//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands. Handlers
//! receive the final configuration (file values with CLI overrides already
//! applied by `main`).

use crate::bridge::{AdbBridge, DeviceBridge, SystemRunner};
use crate::cli::progress::{print_error, print_header, print_info, print_success, print_warning};
use crate::cli::{Args, Commands};
use crate::core::batch::{push_folder, BatchStats};
use crate::core::config::{
    get_config_path, init_config, open_config_in_editor, Config,
};
use crate::core::pusher::Pusher;
use anyhow::{anyhow, bail, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Run the appropriate command based on CLI arguments
pub fn run_command(args: &Args, config: &Config, shutdown_flag: Arc<AtomicBool>) -> Result<()> {
    match &args.command {
        Some(Commands::Config { path, reset }) => {
            handle_config_command(*path, *reset)?;
        }
        Some(Commands::GenerateConfig { output }) => {
            generate_config_file(output.clone())?;
        }
        Some(Commands::ShowConfig) => {
            show_config(config);
        }
        Some(Commands::Devices) => {
            list_devices(config)?;
        }
        Some(Commands::PushFile { file }) => {
            push_single_file(config, file)?;
        }
        Some(Commands::Push { folder }) => {
            let folder = resolve_source_folder(config, folder.as_deref())?;
            push_source_folder(config, &folder, shutdown_flag)?;
        }
        None => {
            // Bare invocation pushes the configured folder, like the
            // original workflow.
            let folder = resolve_source_folder(config, None)?;
            push_source_folder(config, &folder, shutdown_flag)?;
        }
    }

    Ok(())
}

/// Pick the source folder: positional argument first, then configuration
fn resolve_source_folder(config: &Config, positional: Option<&Path>) -> Result<PathBuf> {
    if let Some(folder) = positional {
        return Ok(folder.to_path_buf());
    }
    if !config.source.directory.as_os_str().is_empty() {
        return Ok(config.source.directory.clone());
    }
    Err(anyhow!(
        "No source folder given. Pass one (`media-pusher push <FOLDER>` or --folder) \
         or set [source].directory in the config."
    ))
}

/// Create the bridge from the current configuration
fn make_bridge(config: &Config) -> AdbBridge<SystemRunner> {
    AdbBridge::new(&config.bridge.program, config.bridge.serial.clone())
}

/// Push every matching file under `folder` and print the summary
fn push_source_folder(
    config: &Config,
    folder: &Path,
    shutdown_flag: Arc<AtomicBool>,
) -> Result<()> {
    let bridge = make_bridge(config);
    let filter = config.extension_filter();
    let options = config.push_options();

    info!("Source folder: {}", folder.display());
    if !filter.is_empty() {
        info!("Extension filter: {}", filter.extensions().join(", "));
    }

    let stats = push_folder(&bridge, folder, &filter, options, shutdown_flag)?;
    print_batch_summary(&stats);

    Ok(())
}

/// Print seen / succeeded / failed counters for a batch run
fn print_batch_summary(stats: &BatchStats) {
    print_header("Push Summary");
    print_info(&format!("Files processed: {}", stats.seen));
    print_success(&format!("Pushed: {}", stats.succeeded));
    if stats.failed > 0 {
        print_error(&format!("Failed: {}", stats.failed));
    } else {
        print_info("Failed: 0");
    }
}

/// Push a single file; a failed copy exits nonzero
fn push_single_file(config: &Config, file: &Path) -> Result<()> {
    let bridge = make_bridge(config);
    let options = config.push_options();
    let pusher = Pusher::new(&bridge, options);

    if pusher.push_file(file) {
        print_success(&format!("Pushed {}", file.display()));
        Ok(())
    } else {
        bail!("Push failed for {}", file.display());
    }
}

/// List devices visible to the bridge tool
fn list_devices(config: &Config) -> Result<()> {
    let bridge = make_bridge(config);
    let devices = bridge.list_devices()?;

    print_header("Connected Devices");
    if devices.is_empty() {
        print_warning("No devices found. Connect a device and enable USB debugging.");
        return Ok(());
    }

    for device in &devices {
        if device.is_ready() {
            print_success(&device.to_string());
        } else {
            print_warning(&device.to_string());
        }
    }

    Ok(())
}

/// Handle the `config` command (open in editor, show path, or reset)
fn handle_config_command(show_path: bool, reset: bool) -> Result<()> {
    if show_path {
        let path = Config::get_active_config_path();
        println!("{}", path.display());
        return Ok(());
    }

    if reset {
        let path = get_config_path()
            .ok_or_else(|| anyhow!("Could not determine configuration directory"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, Config::generate_default_config())?;
        print_success(&format!("Config reset to defaults: {}", path.display()));
        return Ok(());
    }

    let path = open_config_in_editor().map_err(|e| anyhow!(e.to_string()))?;
    print_info(&format!("Opened {}", path.display()));
    Ok(())
}

/// Generate a config file at the given path (or the standard location)
fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let path = match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&path, Config::generate_default_config())?;
            path
        }
        None => init_config().map_err(|e| anyhow!(e.to_string()))?,
    };

    print_success(&format!("Config file written: {}", path.display()));
    Ok(())
}

/// Print the effective configuration
fn show_config(config: &Config) {
    print_header("Current Configuration");

    print_info(&format!(
        "Source folder:      {}",
        if config.source.directory.as_os_str().is_empty() {
            "(not set)".to_string()
        } else {
            config.source.directory.display().to_string()
        }
    ));
    print_info(&format!(
        "Extension filter:   {}",
        if config.source.include_extensions.is_empty() {
            "(all files)".to_string()
        } else {
            config.source.include_extensions.join(", ")
        }
    ));
    print_info(&format!("Remote directory:   {}", config.remote.directory));
    print_info(&format!("Media rescan:       {}", config.remote.rescan));
    print_info(&format!("Auto-delete:        {}", config.cleanup.auto_delete));
    print_info(&format!("Bridge program:     {}", config.bridge.program));
    print_info(&format!(
        "Device serial:      {}",
        config.bridge.serial.as_deref().unwrap_or("(any)")
    ));
    print_info(&format!("Log level:          {}", config.logging.level));
    print_info(&format!(
        "Config file:        {}",
        Config::get_active_config_path().display()
    ));
}
