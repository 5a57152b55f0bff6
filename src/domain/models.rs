use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One radio, decoded from one file in the radios directory.
#[derive(Debug, Deserialize, Clone)]
pub struct Radio {
    pub year: i64,
    pub model: String,
    /// Inserted into the card verbatim; never checked on disk.
    pub image: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub status: Status,
    pub description_en: String,
    pub description_es: String,
    /// Originating file name, filled in by the loader.
    #[serde(skip)]
    pub file: String,
}

/// Presentation mode of a card. Unrecognised tags keep their raw text for
/// `data-status` but render as `Sale`; `null` reads as `Sale`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(from = "Option<String>")]
pub enum Status {
    #[default]
    Sale,
    Sold,
    Collection,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Sale => "sale",
            Status::Sold => "sold",
            Status::Collection => "collection",
            Status::Other(raw) => raw,
        }
    }
}

impl From<Option<String>> for Status {
    fn from(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return Status::Sale;
        };
        match raw.as_str() {
            "sale" => Status::Sale,
            "sold" => Status::Sold,
            "collection" => Status::Collection,
            _ => Status::Other(raw),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub radios_dir: PathBuf,
    pub index_html: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct RecordSummary {
    pub file: String,
    pub year: i64,
    pub model: String,
    pub status: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub document: String,
    pub records: Vec<RecordSummary>,
    pub changed: bool,
    pub written: bool,
}
