// src/scrape/mod.rs
mod decks;

pub use decks::{Card, Catalog, LiveCatalog, chapter_cards, clean_cards};
