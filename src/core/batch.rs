//! Batch push workflow
//!
//! Pushes every matching file under a source folder, one at a time, in a
//! stable order. A failed file is counted and the batch carries on; only a
//! missing source folder aborts up front.
//!
//! Deletion policy is strictly per-file: a source file is removed right
//! after its own push is confirmed, never in a second pass over the batch.

use crate::bridge::traits::DeviceBridge;
use crate::core::error::Result;
use crate::core::pusher::{PushOptions, Pusher};
use crate::core::scanner::{collect_candidates, ExtensionFilter};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Counters for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Files processed (candidates actually attempted)
    pub seen: usize,
    /// Pushes that succeeded
    pub succeeded: usize,
    /// Pushes that failed
    pub failed: usize,
}

impl BatchStats {
    fn record(&mut self, success: bool) {
        self.seen += 1;
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Whether every attempted push succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Push every matching file under `dir` to the device
///
/// Candidates are collected and counted up front so progress can show
/// `pos/len`. Returns the final counters; per-file failures are reflected
/// there, not as an `Err`. The shutdown flag stops the batch between files.
pub fn push_folder<B: DeviceBridge>(
    bridge: &B,
    dir: &Path,
    filter: &ExtensionFilter,
    options: PushOptions,
    shutdown_flag: Arc<AtomicBool>,
) -> Result<BatchStats> {
    let candidates = collect_candidates(dir, filter)?;
    let mut stats = BatchStats::default();

    if candidates.is_empty() {
        info!("No matching files under {}", dir.display());
        return Ok(stats);
    }

    info!(
        "Pushing {} file(s) from {} to {}",
        candidates.len(),
        dir.display(),
        options.remote_dir
    );

    let progress = ProgressBar::new(candidates.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/dim}] {pos}/{len} ({percent}%) {msg}")
            .expect("Invalid progress template")
            .progress_chars("━━╾─"),
    );

    let pusher = Pusher::new(bridge, options);

    for path in &candidates {
        if shutdown_flag.load(Ordering::SeqCst) {
            warn!(
                "Shutdown requested, stopping after {}/{} files",
                stats.seen,
                candidates.len()
            );
            break;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.set_message(name);

        let success = pusher.push_file(path);
        stats.record(success);
        progress.inc(1);
    }

    progress.finish_and_clear();

    info!(
        "Batch complete: {} seen, {} succeeded, {} failed",
        stats.seen, stats.succeeded, stats.failed
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::adb::AdbBridge;
    use crate::bridge::mock::ScriptedRunner;
    use crate::bridge::runner::CommandOutput;
    use crate::core::error::PushError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"data").unwrap();
        path
    }

    fn bridge(runner: ScriptedRunner) -> AdbBridge<ScriptedRunner> {
        AdbBridge::with_runner(runner, "adb", None)
    }

    fn no_shutdown() -> Arc<AtomicBool> {
        Arc::new(AtomicBool::new(false))
    }

    #[test]
    fn test_missing_folder_reports_immediately() {
        let bridge = bridge(ScriptedRunner::succeeding());
        let err = push_folder(
            &bridge,
            Path::new("/no/such/folder"),
            &ExtensionFilter::allow_all(),
            PushOptions::default(),
            no_shutdown(),
        )
        .unwrap_err();

        assert!(matches!(err, PushError::FolderNotFound(_)));
        assert!(bridge.runner().calls().is_empty());
    }

    #[test]
    fn test_no_matching_files_is_an_empty_batch() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp4");
        touch(tmp.path(), "b.jpg");
        touch(tmp.path(), "c.png");

        let bridge = bridge(ScriptedRunner::succeeding());
        let stats = push_folder(
            &bridge,
            tmp.path(),
            &ExtensionFilter::new([".mov"]),
            PushOptions::default(),
            no_shutdown(),
        )
        .unwrap();

        assert_eq!(stats, BatchStats::default());
        assert!(bridge.runner().calls().is_empty());
        // Nothing matched, nothing deleted.
        assert!(tmp.path().join("a.mp4").exists());
        assert!(tmp.path().join("b.jpg").exists());
        assert!(tmp.path().join("c.png").exists());
    }

    #[test]
    fn test_full_success_deletes_everything() {
        let tmp = TempDir::new().unwrap();
        let a = touch(tmp.path(), "a.mp4");
        let b = touch(tmp.path(), "b.mp4");
        touch(tmp.path(), "notes.txt");

        let bridge = bridge(ScriptedRunner::succeeding());
        let stats = push_folder(
            &bridge,
            tmp.path(),
            &ExtensionFilter::new(["mp4"]),
            PushOptions::default(),
            no_shutdown(),
        )
        .unwrap();

        assert_eq!(stats.seen, 2);
        assert_eq!(stats.succeeded, 2);
        assert_eq!(stats.failed, 0);
        assert!(stats.all_succeeded());
        assert!(!a.exists());
        assert!(!b.exists());
        // The unmatched file is untouched.
        assert!(tmp.path().join("notes.txt").exists());
    }

    #[test]
    fn test_partial_failure_continues_and_deletes_only_successes() {
        let tmp = TempDir::new().unwrap();
        let bad = touch(tmp.path(), "bad.mp4");
        let good = touch(tmp.path(), "good.mp4");

        let runner = ScriptedRunner::succeeding()
            .respond_when("bad.mp4", CommandOutput::failure_with(1, "device offline"));
        let bridge = bridge(runner);
        let stats = push_folder(
            &bridge,
            tmp.path(),
            &ExtensionFilter::new(["mp4"]),
            PushOptions::default(),
            no_shutdown(),
        )
        .unwrap();

        assert_eq!(stats.seen, 2);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.seen, stats.succeeded + stats.failed);
        assert!(bad.exists(), "failed push leaves its source on disk");
        assert!(!good.exists(), "successful push deletes its source");
    }

    #[test]
    fn test_auto_delete_disabled_keeps_all_sources() {
        let tmp = TempDir::new().unwrap();
        let a = touch(tmp.path(), "a.mp4");
        let b = touch(tmp.path(), "b.mp4");

        let bridge = bridge(ScriptedRunner::succeeding());
        let stats = push_folder(
            &bridge,
            tmp.path(),
            &ExtensionFilter::allow_all(),
            PushOptions {
                auto_delete: false,
                ..PushOptions::default()
            },
            no_shutdown(),
        )
        .unwrap();

        assert_eq!(stats.succeeded, 2);
        assert!(a.exists());
        assert!(b.exists());
    }

    #[test]
    fn test_shutdown_flag_stops_between_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp4");
        touch(tmp.path(), "b.mp4");

        let bridge = bridge(ScriptedRunner::succeeding());
        let flag = Arc::new(AtomicBool::new(true));
        let stats = push_folder(
            &bridge,
            tmp.path(),
            &ExtensionFilter::allow_all(),
            PushOptions::default(),
            flag,
        )
        .unwrap();

        assert_eq!(stats.seen, 0);
        assert!(bridge.runner().calls().is_empty());
    }

    #[test]
    fn test_recursive_batch_counts_nested_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.mp4");
        touch(tmp.path(), "nested/deep/clip.mp4");

        let bridge = bridge(ScriptedRunner::succeeding());
        let stats = push_folder(
            &bridge,
            tmp.path(),
            &ExtensionFilter::new(["mp4"]),
            PushOptions::default(),
            no_shutdown(),
        )
        .unwrap();

        assert_eq!(stats.seen, 2);
        assert_eq!(stats.succeeded, 2);
        // Two pushes and two rescan broadcasts went through the bridge.
        assert_eq!(bridge.runner().count_calls_containing("push"), 2);
        assert_eq!(bridge.runner().count_calls_containing("broadcast"), 2);
    }
}
