//! Candidate selection for batch pushes
//!
//! A candidate is a regular file under the source folder whose suffix passes
//! the optional extension filter. The full list is materialized up front so
//! the batch loop can report "i / total" progress.

use crate::core::error::{PushError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Case-insensitive file extension filter
///
/// An empty filter matches every file. Extensions are accepted with or
/// without a leading dot ("mp4" and ".MP4" both normalize to "mp4").
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from raw extension strings
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// A filter that matches every file
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Whether this filter matches every file
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Check whether a path passes the filter
    pub fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        self.extensions.iter().any(|e| *e == extension)
    }

    /// The normalized extensions, for display
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

/// Collect every file under `dir` that passes the filter
///
/// Walks the tree recursively, keeps regular files only, and returns the
/// candidates sorted by path so batch runs process files in a stable order.
/// Unreadable entries are skipped rather than aborting the walk.
pub fn collect_candidates(dir: &Path, filter: &ExtensionFilter) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(PushError::FolderNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(PushError::FolderNotFound(dir.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| filter.matches(p))
        .collect();

    candidates.sort();
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"data").unwrap();
        path
    }

    #[test]
    fn test_filter_normalization() {
        let filter = ExtensionFilter::new([".JPG", "mp4", ""]);
        assert_eq!(filter.extensions(), &["jpg", "mp4"]);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_matching_is_case_insensitive() {
        let filter = ExtensionFilter::new(["jpg"]);
        assert!(filter.matches(Path::new("photo.jpg")));
        assert!(filter.matches(Path::new("PHOTO.JPG")));
        assert!(!filter.matches(Path::new("clip.mp4")));
        assert!(!filter.matches(Path::new("noextension")));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ExtensionFilter::allow_all();
        assert!(filter.is_empty());
        assert!(filter.matches(Path::new("anything.xyz")));
        assert!(filter.matches(Path::new("noextension")));
    }

    #[test]
    fn test_collect_candidates_recursive() {
        let tmp = TempDir::new().unwrap();
        let a = touch(tmp.path(), "a.mp4");
        let b = touch(tmp.path(), "sub/b.mp4");
        touch(tmp.path(), "sub/notes.txt");
        fs::create_dir_all(tmp.path().join("empty")).unwrap();

        let candidates =
            collect_candidates(tmp.path(), &ExtensionFilter::new(["mp4"])).unwrap();
        assert_eq!(candidates, vec![a, b]);
    }

    #[test]
    fn test_collect_candidates_no_filter_takes_all_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp4");
        touch(tmp.path(), "b.txt");
        touch(tmp.path(), "sub/c");

        let candidates =
            collect_candidates(tmp.path(), &ExtensionFilter::allow_all()).unwrap();
        assert_eq!(candidates.len(), 3);
        // Directories are never candidates.
        assert!(candidates.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_collect_candidates_none_match() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp4");
        touch(tmp.path(), "b.jpg");
        touch(tmp.path(), "c.png");

        let candidates =
            collect_candidates(tmp.path(), &ExtensionFilter::new([".mov"])).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let err =
            collect_candidates(Path::new("/no/such/folder"), &ExtensionFilter::allow_all())
                .unwrap_err();
        assert!(matches!(err, PushError::FolderNotFound(_)));
    }

    #[test]
    fn test_candidates_are_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "z.mp4");
        touch(tmp.path(), "a.mp4");
        touch(tmp.path(), "m.mp4");

        let candidates =
            collect_candidates(tmp.path(), &ExtensionFilter::allow_all()).unwrap();
        let names: Vec<_> = candidates
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.mp4", "m.mp4", "z.mp4"]);
    }
}
