// src/specs/mod.rs
//! # Endpoint "specs"
//!
//! Per-endpoint specifications for the vendor API. Each spec owns one
//! endpoint: the exact response record shape (vendor field names included,
//! unused metadata decoded and discarded) and the fetch call for it.
//!
//! What does **not** live here: tree-walking, title rewriting, export
//! formatting. Specs only read the wire; the walk lives in `scrape`, the
//! text rules in `core::sanitize`.
//!
//! Specs are testable offline: decoding is plain `serde_json` over fixture
//! strings, and selection helpers (`menu::pick_named`) take slices.

pub mod cards;
pub mod menu;
