use crate::domain::constants::RECORD_EXTENSION;
use crate::domain::errors::GalleryError;
use crate::domain::models::Radio;
use serde_json::error::Category;
use std::path::{Path, PathBuf};

/// Loads every `*.json` record in `dir`, ordered by file name.
///
/// The order returned here is the card order and the `radio<n>.desc`
/// numbering for the whole run.
pub fn load_radios(dir: &Path) -> Result<Vec<Radio>, GalleryError> {
    let mut files = record_files(dir)?;
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut radios = Vec::with_capacity(files.len());
    for path in files {
        let raw = std::fs::read_to_string(&path).map_err(|source| GalleryError::ReadRecord {
            path: path.clone(),
            source,
        })?;
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut radio = decode_radio(&file, &raw)?;
        log::debug!("loaded {} ({} {})", file, radio.year, radio.model);
        radio.file = file;
        radios.push(radio);
    }
    Ok(radios)
}

/// A missing directory yields no records, like an empty one.
fn record_files(dir: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    if !dir.exists() {
        log::debug!("radios directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir).map_err(|source| GalleryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GalleryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_record = path.is_file()
            && path
                .extension()
                .map(|e| e == RECORD_EXTENSION)
                .unwrap_or(false);
        if is_record {
            out.push(path);
        }
    }
    Ok(out)
}

pub fn decode_radio(file: &str, raw: &str) -> Result<Radio, GalleryError> {
    serde_json::from_str(raw).map_err(|source| match source.classify() {
        Category::Data => GalleryError::Schema {
            file: file.to_string(),
            source,
        },
        _ => GalleryError::Parse {
            file: file.to_string(),
            source,
        },
    })
}
