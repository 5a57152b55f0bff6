//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `build.rs` — the gallery build run.
//!
//! ## Principles
//! - Delegate transformations to `services/*`.
//! - Keep behavior and output schema stable.

pub mod build;

pub use build::handle_build;
