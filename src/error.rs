// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can abort a run. "Not found" outcomes (no matching
/// language/book, no flashcard option, zero cards) are not errors and never
/// show up here; they are reported through the progress sink instead.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
