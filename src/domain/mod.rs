//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — radio records, status, build options and report structs.
//! - `constants.rs` — fixed markers, contact address and language table.
//! - `errors.rs` — the `GalleryError` taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `BuildReport` and `RecordSummary` are the `--json` output schema.

pub mod constants;
pub mod errors;
pub mod models;
