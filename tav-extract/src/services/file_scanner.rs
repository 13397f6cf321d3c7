//! EAF file scanner
//!
//! Walks an annotations tree and collects every `.eaf` file in path order.
//! Entries that cannot be read are logged and left out. Symlinked files are
//! collected; symlinked directories are not descended into.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Names never descended into or collected (exact match)
const IGNORED_NAMES: [&str; 4] = [".git", ".svn", ".DS_Store", "Thumbs.db"];

/// Annotation root could not be scanned
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Recursive `.eaf` collector
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    max_depth: Option<usize>,
}

impl FileScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit recursion depth (1 = files directly under the root)
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Collect EAF files under `root`, sorted by path
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root.exists() {
            return Err(ScanError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let mut walker = WalkDir::new(root).follow_links(false);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut found: Vec<PathBuf> = walker
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| is_file_or_file_link(entry) && has_eaf_extension(entry.path()))
            .map(DirEntry::into_path)
            .collect();

        found.sort();

        tracing::debug!(files = found.len(), "Scanned {}", root.display());
        Ok(found)
    }
}

/// Ignore list applies below the root only
fn is_ignored(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    IGNORED_NAMES.iter().any(|ignored| name == *ignored)
}

/// Regular file, or a symlink resolving to one (dangling links are skipped)
fn is_file_or_file_link(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && entry.path().is_file()
}

fn has_eaf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("eaf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_eaf_extension_detection() {
        assert!(has_eaf_extension(Path::new("GH010406_OT19.eaf")));
        assert!(has_eaf_extension(Path::new("upper/CASE.EAF")));
        assert!(!has_eaf_extension(Path::new("GH010406_OT19.pfsx")));
        assert!(!has_eaf_extension(Path::new("eaf")));
    }

    #[test]
    fn test_missing_root() {
        let result = FileScanner::new().scan(Path::new("/nonexistent/annotations"));
        assert!(matches!(result, Err(ScanError::PathNotFound(_))));
    }

    #[test]
    fn test_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.eaf");
        fs::write(&file, "<x/>").unwrap();

        let result = FileScanner::new().scan(&file);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn test_recursive_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("OT19")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("b.eaf"), "").unwrap();
        fs::write(root.join("OT19").join("a.eaf"), "").unwrap();
        fs::write(root.join("OT19").join("a.pfsx"), "").unwrap();
        fs::write(root.join(".git").join("hidden.eaf"), "").unwrap();

        let files = FileScanner::new().scan(root).unwrap();
        assert_eq!(files, vec![root.join("OT19").join("a.eaf"), root.join("b.eaf")]);
    }

    #[test]
    fn test_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("top.eaf"), "").unwrap();
        fs::write(root.join("nested").join("deep.eaf"), "").unwrap();

        let files = FileScanner::new().with_max_depth(1).scan(root).unwrap();
        assert_eq!(files, vec![root.join("top.eaf")]);
    }

    #[test]
    fn test_ignore_list_matches_whole_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("OT3.github_export")).unwrap();
        fs::write(root.join("OT3.github_export.eaf"), "").unwrap();
        fs::write(root.join("OT3.github_export").join("c.eaf"), "").unwrap();
        fs::write(root.join("Thumbs.db"), "").unwrap();

        let files = FileScanner::new().scan(root).unwrap();
        assert_eq!(
            files,
            vec![
                root.join("OT3.github_export").join("c.eaf"),
                root.join("OT3.github_export.eaf"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_collected() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().join("store");
        let root = temp_dir.path().join("annotations");
        fs::create_dir_all(&store).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(store.join("real.eaf"), "").unwrap();
        std::os::unix::fs::symlink(store.join("real.eaf"), root.join("linked.eaf")).unwrap();
        std::os::unix::fs::symlink(store.join("gone.eaf"), root.join("dangling.eaf")).unwrap();

        let files = FileScanner::new().scan(&root).unwrap();
        assert_eq!(files, vec![root.join("linked.eaf")]);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(FileScanner::new().scan(temp_dir.path()).unwrap().is_empty());
    }
}
