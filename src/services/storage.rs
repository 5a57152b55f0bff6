use crate::domain::errors::GalleryError;
use std::path::Path;

pub fn read_document(path: &Path) -> Result<String, GalleryError> {
    std::fs::read_to_string(path).map_err(|source| GalleryError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// The document is written in a single call, only once the new text is
/// complete in memory.
pub fn write_document(path: &Path, html: &str) -> Result<(), GalleryError> {
    std::fs::write(path, html).map_err(|source| GalleryError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })
}
