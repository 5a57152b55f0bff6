//! Service layer: the build pipeline stages and their side-effect helpers.
//!
//! ## Service map
//! - `loader.rs` — radios directory enumeration and record decoding.
//! - `render.rs` — card markup, price formatting, gallery body.
//! - `gallery.rs` — marker lookup and gallery splice.
//! - `translations.rs` — language block lookup and key value rewriting.
//! - `storage.rs` — document read/write.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Stages are pure `&str -> String` transforms where possible.
//! - Only `storage.rs` touches the document on disk.

pub mod gallery;
pub mod loader;
pub mod output;
pub mod render;
pub mod storage;
pub mod translations;
