//! Filesystem seam for the output directory
//!
//! The crawler only needs three operations on the output directory, so they
//! are expressed as a trait. `LocalFileSystem` is the real implementation.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing crawl output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Filesystem operations used by the filename allocator and page writer
pub trait FileSystem {
    /// Returns true if something already exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Writes `content` to `path`, replacing any existing file
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Creates `path` and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// `FileSystem` backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_write_and_exists() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFileSystem;
        let path = dir.path().join("page.md");

        assert!(!fs.exists(&path));
        fs.write(&path, "# Title").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Title");
    }

    #[test]
    fn test_local_create_dir_all_nested() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFileSystem;
        let nested = dir.path().join("a").join("b").join("c");

        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());

        // Creating an existing directory is not an error
        fs.create_dir_all(&nested).unwrap();
    }

    #[test]
    fn test_local_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFileSystem;
        let path = dir.path().join("missing").join("page.md");

        assert!(fs.write(&path, "x").is_err());
    }
}
