//! Item files: one record per `.yaml`/`.yml`, `.json` or `.toml` file.

use crate::error::{AppResult, DomainError};
use crate::models::item::ItemRecord;
use crate::util::{check_file_size, list_item_files_guarded};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            "toml" => Ok(FileFormat::Toml),
            _ => Err(DomainError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses one record. Weight is clamped the same way an edit clamps it.
pub fn parse_item(text: &str, format: FileFormat) -> AppResult<ItemRecord> {
    let mut item: ItemRecord = match format {
        FileFormat::Yaml => serde_yaml::from_str(text)?,
        FileFormat::Json => serde_json::from_str(text)?,
        FileFormat::Toml => toml::from_str(text)?,
    };
    if !item.weight.is_finite() || item.weight < 0.0 {
        item.weight = 0.0;
    }
    Ok(item)
}

pub fn render_item(item: &ItemRecord, format: FileFormat) -> AppResult<String> {
    let text = match format {
        FileFormat::Yaml => serde_yaml::to_string(item)?,
        FileFormat::Json => serde_json::to_string_pretty(item)?,
        FileFormat::Toml => toml::to_string(item)?,
    };
    Ok(text)
}

/// Reads one item file; the format follows the extension.
pub fn load_item(path: &Path) -> AppResult<ItemRecord> {
    let format = FileFormat::from_path(path)?;
    let len = fs::metadata(path)?.len() as usize;
    check_file_size(path, len)?;

    let text = fs::read_to_string(path)?;
    let item = parse_item(&text, format)?;
    tracing::debug!(path = %path.display(), name = %item.name, "loaded item");
    Ok(item)
}

pub fn save_item(path: &Path, item: &ItemRecord) -> AppResult<()> {
    let format = FileFormat::from_path(path)?;
    fs::write(path, render_item(item, format)?)?;
    tracing::debug!(path = %path.display(), name = %item.name, "saved item");
    Ok(())
}

/// Loads every item file in `dir`. Files that fail to parse are reported
/// alongside the ones that loaded.
pub fn load_dir(dir: &Path) -> AppResult<Vec<(PathBuf, AppResult<ItemRecord>)>> {
    let files = list_item_files_guarded(dir)?;
    Ok(files
        .into_iter()
        .map(|path| {
            let item = load_item(&path);
            (path, item)
        })
        .collect())
}
