// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Exact-title selector. `Named` compares byte-for-byte, case-sensitive;
/// `All` is discovery mode and matches everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pick {
    All,
    Named(String),
}

impl Pick {
    pub fn matches(&self, title: &str) -> bool {
        match self {
            Pick::All => true,
            Pick::Named(name) => name.as_str() == title,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub language: Pick,
    pub book: Pick,
}

impl ScrapeOptions {
    /// Discovery mode: walk every language and every book.
    pub fn everything() -> Self {
        Self { language: Pick::All, book: Pick::All }
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            language: Pick::Named(s!(DEFAULT_LANGUAGE)),
            book: Pick::Named(s!(DEFAULT_BOOK)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl ExportOptions {
    /// `<out_dir>/<book title>.txt`
    pub fn deck_path(&self, book_title: &str) -> PathBuf {
        self.out_dir.join(format!("{book_title}.{DECK_EXT}"))
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}
