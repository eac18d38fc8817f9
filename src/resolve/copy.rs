//! Overwriting tree copy

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::VoltError;

/// Copy a file or directory tree from `src` to `dest`
///
/// Parent directories are created as needed. Existing files are overwritten
/// and existing directories are merged into. An entry whose type differs from
/// the source (file, directory or symlink) is replaced. `src` itself is
/// followed when it is a link; links below it are copied as links.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<(), VoltError> {
    let metadata = fs::metadata(src).map_err(|e| VoltError::io(src, e))?;
    if !metadata.is_dir() {
        return copy_entry(src, metadata.file_type(), dest);
    }

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            VoltError::io(path, e.into())
        })?;

        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            if fs::symlink_metadata(&target).is_ok_and(|m| !m.is_dir()) {
                remove_entry(&target)?;
            }
            fs::create_dir_all(&target).map_err(|e| VoltError::io(&target, e))?;
        } else {
            copy_entry(entry.path(), entry.file_type(), &target)?;
        }
    }

    Ok(())
}

fn copy_entry(src: &Path, file_type: fs::FileType, dest: &Path) -> Result<(), VoltError> {
    if fs::symlink_metadata(dest).is_ok() {
        remove_entry(dest)?;
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| VoltError::io(parent, e))?;
    }

    if file_type.is_symlink() {
        return copy_symlink(src, dest);
    }
    fs::copy(src, dest).map_err(|e| VoltError::io(src, e))?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> Result<(), VoltError> {
    let link = fs::read_link(src).map_err(|e| VoltError::io(src, e))?;
    std::os::unix::fs::symlink(&link, dest).map_err(|e| VoltError::io(dest, e))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, _dest: &Path) -> Result<(), VoltError> {
    tracing::warn!("Skipping symlink {}", src.display());
    Ok(())
}

/// Remove whatever sits at `path` without following a final symlink
fn remove_entry(path: &Path) -> Result<(), VoltError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| VoltError::io(path, e))?;
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| VoltError::io(path, e))
}
