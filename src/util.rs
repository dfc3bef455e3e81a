use crate::error::{AppResult, DomainError};
use crate::hardening::{ALLOW_SYMLINKS, MAX_FILES_PER_IMPORT, MAX_FILE_BYTES, MAX_TOTAL_BYTES};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognised as item files.
pub const ITEM_EXTENSIONS: &[&str] = &["yaml", "yml", "json", "toml"];

/// Lists item files directly under `dir`, sorted, within the size limits.
pub fn list_item_files_guarded(dir: &Path) -> AppResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DomainError::NotFound(format!("directory {}", dir.display())));
    }

    let mut files = Vec::new();
    let mut total = 0usize;

    for e in fs::read_dir(dir)? {
        let e = e?;
        let p = e.path();
        if !p.is_file() {
            continue;
        }
        let ext = p.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
        if !ITEM_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        if !ALLOW_SYMLINKS {
            let md = fs::symlink_metadata(&p)?;
            if md.file_type().is_symlink() {
                tracing::debug!(path = %p.display(), "skipping symlinked item file");
                continue;
            }
        }
        let len = fs::metadata(&p)?.len() as usize;
        check_file_size(&p, len)?;
        total = total.saturating_add(len);
        if total > MAX_TOTAL_BYTES {
            return Err(too_large("batch exceeds total size limit".to_string()));
        }

        files.push(p);
        if files.len() > MAX_FILES_PER_IMPORT {
            return Err(too_large(format!("too many files (> {})", MAX_FILES_PER_IMPORT)));
        }
    }
    files.sort();
    Ok(files)
}

pub fn check_file_size(path: &Path, len: usize) -> AppResult<()> {
    if len > MAX_FILE_BYTES {
        return Err(too_large(format!("file too large: {} ({} bytes)", path.display(), len)));
    }
    Ok(())
}

/// Item names end up in file names; they must not leave the output directory.
pub fn ensure_single_component(name: &str) -> AppResult<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(DomainError::Validation {
            field: "name",
            message: format!("'{}' cannot be used as a file name", name),
        });
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(DomainError::Validation {
            field: "name",
            message: "must not contain path separators".to_string(),
        });
    }
    Ok(())
}

fn too_large(message: String) -> DomainError {
    DomainError::Validation { field: "file", message }
}
