// src/watch/snapshot.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{DirwatchError, Result};
use crate::fs::FileSystem;

/// Names of the watched directory's immediate entries at one instant,
/// restricted by the extension filter.
///
/// Recomputed on every poll and never persisted. Names are kept sorted so
/// each pass processes files in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySnapshot {
    names: Vec<String>,
}

impl DirectorySnapshot {
    /// List `dir` through `fs`, keeping entries whose name ends with `ext`
    /// (all entries when `ext` is `None`).
    ///
    /// Fails with [`DirwatchError::DirectoryNotFound`] or
    /// [`DirwatchError::NotADirectory`] when the watched path is unusable.
    pub fn take(fs: &dyn FileSystem, dir: &Path, ext: Option<&str>) -> Result<Self> {
        if !fs.exists(dir) {
            return Err(DirwatchError::DirectoryNotFound(dir.to_path_buf()));
        }
        if !fs.is_dir(dir) {
            return Err(DirwatchError::NotADirectory(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for path in fs.read_dir(dir)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                debug!("skipping entry with non UTF-8 name: {:?}", path);
                continue;
            };
            if matches_ext(name, ext) {
                names.push(name.to_string());
            }
        }
        names.sort();
        names.dedup();

        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .is_ok()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Plain suffix filter; `None` accepts every name.
fn matches_ext(name: &str, ext: Option<&str>) -> bool {
    match ext {
        Some(ext) => name.ends_with(ext),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn filters_by_extension_and_sorts() {
        let fs = MockFileSystem::new();
        fs.add_file("/w/b.txt", "");
        fs.add_file("/w/a.txt", "");
        fs.add_file("/w/c.log", "");

        let snap = DirectorySnapshot::take(&fs, Path::new("/w"), Some(".txt")).unwrap();
        assert_eq!(snap.names(), ["a.txt", "b.txt"]);
        assert!(snap.contains("a.txt"));
        assert!(!snap.contains("c.log"));
    }

    #[test]
    fn no_filter_keeps_everything() {
        let fs = MockFileSystem::new();
        fs.add_file("/w/a.txt", "");
        fs.add_file("/w/c.log", "");

        let snap = DirectorySnapshot::take(&fs, Path::new("/w"), None).unwrap();
        assert_eq!(snap.len(), 2);
    }

    #[test]
    fn ext_filter_is_a_plain_suffix_match() {
        assert!(matches_ext("a.txt", Some(".txt")));
        assert!(!matches_ext("a.txt.bak", Some(".txt")));
        assert!(!matches_ext("a.log", Some(".txt")));
        assert!(matches_ext("anything.bin", None));
    }

    #[test]
    fn missing_directory_is_reported() {
        let fs = MockFileSystem::new();
        let err = DirectorySnapshot::take(&fs, Path::new("/missing"), None).unwrap_err();
        assert!(matches!(err, DirwatchError::DirectoryNotFound(p) if p == Path::new("/missing")));
    }

    #[test]
    fn file_in_place_of_directory_is_reported() {
        let fs = MockFileSystem::new();
        fs.add_file("/w", "not a dir");
        let err = DirectorySnapshot::take(&fs, Path::new("/w"), None).unwrap_err();
        assert!(matches!(err, DirwatchError::NotADirectory(_)));
    }

    #[test]
    fn empty_directory_gives_empty_snapshot() {
        let fs = MockFileSystem::new();
        fs.add_dir("/w");
        let snap = DirectorySnapshot::take(&fs, Path::new("/w"), Some(".txt")).unwrap();
        assert!(snap.is_empty());
    }
}
