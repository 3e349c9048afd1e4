// src/export.rs

// Deck document assembly and writing. One Deck per book; rows are appended
// chapter by chapter and the whole buffer is written in one go at the end.

use std::fs;
use std::path::Path;

use crate::config::consts::DECK_HEADER;
use crate::core::sanitize::{Direction, deck_label};
use crate::error::Result;
use crate::scrape::Card;

/// Growing output buffer for one book's deck file.
pub struct Deck {
    book_title: String,
    lang_initial: char,
    buf: String,
}

impl Deck {
    pub fn new(book_title: &str, lang_initial: char) -> Self {
        Self {
            book_title: s!(book_title),
            lang_initial,
            buf: s!(DECK_HEADER),
        }
    }

    /// Append one chapter: every card in the forward direction first, then
    /// every card reversed, input order preserved in both blocks. `title`
    /// must already be normalized. Zero cards → zero rows.
    ///
    /// Fields are joined with bare tabs; the cleanup rules guarantee the
    /// side texts are tab- and newline-free, so no quoting is needed.
    pub fn push_chapter(&mut self, title: &str, cards: &[Card]) {
        let forward = deck_label(title, self.lang_initial, Direction::Forward);
        for card in cards {
            self.buf
                .push_str(&tabrow!(&card.side_a, &card.side_b, &self.book_title, &forward));
        }
        let reverse = deck_label(title, self.lang_initial, Direction::Reverse);
        for card in cards {
            self.buf
                .push_str(&tabrow!(&card.side_b, &card.side_a, &self.book_title, &reverse));
        }
    }

    /// True while nothing beyond the fixed header has been appended.
    pub fn is_empty(&self) -> bool {
        self.buf.len() == DECK_HEADER.len()
    }

    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Write the buffer verbatim, creating the output directory if absent.
    /// Overwrites any previous file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        fs::write(path, &self.buf)?;
        Ok(())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
