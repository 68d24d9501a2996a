//! Working directory view

use std::path::PathBuf;

use crate::error::NavigateError;
use crate::navigate::operations::{change_directory, verify_directory};

/// Read access to a client's current working directory.
pub trait FileSystemView: Send + Sync {
    /// Full virtual path of the current directory.
    ///
    /// Fails when the directory no longer resolves to a location inside the
    /// server root.
    fn current_directory(&self) -> Result<String, NavigateError>;
}

/// Virtual directory tree rooted at a real directory on disk.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: PathBuf,
    current_virtual_path: String,
}

impl VirtualFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            current_virtual_path: "/".to_string(),
        }
    }

    /// Virtual path as last set, without checking the disk.
    pub fn current_virtual_path(&self) -> &str {
        &self.current_virtual_path
    }

    /// Moves to `target`, relative to the current directory or absolute.
    pub fn change_directory(&mut self, target: &str) -> Result<&str, NavigateError> {
        let new_path = change_directory(&self.root, &self.current_virtual_path, target)?;
        self.current_virtual_path = new_path;
        Ok(&self.current_virtual_path)
    }
}

impl FileSystemView for VirtualFileSystem {
    fn current_directory(&self) -> Result<String, NavigateError> {
        verify_directory(&self.root, &self.current_virtual_path)?;
        Ok(self.current_virtual_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_current_directory_follows_changes() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("pub")).unwrap();

        let mut view = VirtualFileSystem::new(root.path());
        assert_eq!(view.current_directory().unwrap(), "/");

        view.change_directory("pub").unwrap();
        assert_eq!(view.current_directory().unwrap(), "/pub");
    }

    #[test]
    fn test_failed_change_keeps_directory() {
        let root = tempfile::tempdir().unwrap();
        let mut view = VirtualFileSystem::new(root.path());
        assert!(view.change_directory("nope").is_err());
        assert_eq!(view.current_virtual_path(), "/");
    }

    #[test]
    fn test_removed_directory_fails_lookup() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("gone")).unwrap();

        let mut view = VirtualFileSystem::new(root.path());
        view.change_directory("gone").unwrap();
        fs::remove_dir(root.path().join("gone")).unwrap();

        assert!(matches!(
            view.current_directory(),
            Err(NavigateError::DirectoryNotFound(_))
        ));
    }
}
