use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GalleryError {
    #[error("cannot read radios directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read radio file {}: {source}", .path.display())]
    ReadRecord {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
    #[error("bad radio record in {file}: {source}")]
    Schema {
        file: String,
        source: serde_json::Error,
    },
    #[error("cannot read document {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(
        "Could not find '{start}' / '{end}' markers in {document}\nPlease add these markers around the gallery cards in {document} first."
    )]
    MissingMarkers {
        start: &'static str,
        end: &'static str,
        document: String,
    },
    #[error("'{end}' appears before '{start}' in {document}")]
    MarkersOutOfOrder {
        start: &'static str,
        end: &'static str,
        document: String,
    },
    #[error("cannot write document {}: {source}", .path.display())]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },
}
