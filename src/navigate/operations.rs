//! Navigation operations implementation

use crate::error::NavigateError;
use std::path::{Path, PathBuf};

/// Resolves `target` against `current_virtual_path` into a normalized,
/// `/`-rooted virtual path. `..` never climbs above `/`.
pub fn resolve_virtual_path(current_virtual_path: &str, target: &str) -> Result<String, NavigateError> {
    if target.is_empty() {
        return Err(NavigateError::InvalidPath("Empty path provided".into()));
    }

    if target.contains('\0') {
        return Err(NavigateError::InvalidPath(target.into()));
    }

    let joined = if target.starts_with('/') {
        target.to_string()
    } else {
        format!("{}/{}", current_virtual_path.trim_end_matches('/'), target)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    Ok(format!("/{}", segments.join("/")))
}

/// Maps a virtual path onto the real filesystem below `server_root`
pub fn virtual_to_real_path(server_root: &Path, virtual_path: &str) -> PathBuf {
    let relative = virtual_path.trim_start_matches('/');
    if relative.is_empty() {
        server_root.to_path_buf()
    } else {
        server_root.join(relative)
    }
}

/// Checks that `virtual_path` names an existing directory inside `server_root`
pub fn verify_directory(server_root: &Path, virtual_path: &str) -> Result<(), NavigateError> {
    let real_path = virtual_to_real_path(server_root, virtual_path);

    if !real_path.exists() {
        return Err(NavigateError::DirectoryNotFound(virtual_path.into()));
    }

    if !real_path.is_dir() {
        return Err(NavigateError::NotADirectory(virtual_path.into()));
    }

    // Symlinks may still point outside the root
    let canonical_path = real_path
        .canonicalize()
        .map_err(|_| NavigateError::PermissionDenied(virtual_path.into()))?;
    let server_root_canonical = server_root
        .canonicalize()
        .map_err(|_| NavigateError::InvalidPath("Server root invalid".into()))?;

    if !canonical_path.starts_with(&server_root_canonical) {
        return Err(NavigateError::PathTraversal(virtual_path.into()));
    }

    Ok(())
}

/// Changes the working directory for a client
pub fn change_directory(
    server_root: &Path,
    current_virtual_path: &str,
    target_path: &str,
) -> Result<String, NavigateError> {
    let new_virtual_path = resolve_virtual_path(current_virtual_path, target_path)?;
    verify_directory(server_root, &new_virtual_path)?;
    Ok(new_virtual_path)
}
