//! Copy and download of generated snippets.
//!
//! Both actions are gated on the record having a name and a label; while the
//! gate is closed they do nothing and report [`ExportOutcome::Disabled`].

use crate::error::{AppResult, DomainError};
use crate::generator;
use crate::lua::check_snippet;
use crate::models::item::ItemRecord;
use crate::models::types::Target;
use crate::util::ensure_single_component;
use std::fs;
use std::path::{Path, PathBuf};

pub const DISABLED_HINT: &str = "Fill in required fields: Item Name and Display Label are required";

/// Destination for copied snippets.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()>;
}

/// The desktop clipboard. Connects lazily on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new().map_err(|e| DomainError::Clipboard(e.to_string()))?;
            self.inner = Some(cb);
        }
        match self.inner.as_mut() {
            Some(cb) => cb
                .set_text(text.to_string())
                .map_err(|e| DomainError::Clipboard(e.to_string())),
            None => Err(DomainError::Clipboard("clipboard unavailable".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Name or label missing; nothing happened.
    Disabled,
    Copied { bytes: usize },
    Written(PathBuf),
}

pub fn copy_to_clipboard(item: &ItemRecord, target: Target, clipboard: &mut dyn Clipboard) -> AppResult<ExportOutcome> {
    if !item.is_exportable() {
        return Ok(ExportOutcome::Disabled);
    }

    let code = generator::generate(item, target);
    if let Err(e) = clipboard.set_text(&code) {
        tracing::warn!(item = %item.name, %target, error = %e, "failed to copy");
        return Err(e);
    }

    tracing::info!(item = %item.name, %target, bytes = code.len(), "copied snippet");
    Ok(ExportOutcome::Copied { bytes: code.len() })
}

/// Writes `<name>_<target>_inventory.lua` into `out_dir`, optionally
/// compiling the snippet first.
pub fn download(item: &ItemRecord, target: Target, out_dir: &Path, check_lua: bool) -> AppResult<ExportOutcome> {
    if !item.is_exportable() {
        return Ok(ExportOutcome::Disabled);
    }
    ensure_single_component(&item.name)?;

    let code = generator::generate(item, target);
    if check_lua {
        check_snippet(target, &code)?;
    }

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(target.file_name(&item.name));
    fs::write(&path, &code)?;

    tracing::info!(item = %item.name, %target, path = %path.display(), "wrote snippet");
    Ok(ExportOutcome::Written(path))
}
