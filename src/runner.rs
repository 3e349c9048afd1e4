// src/runner.rs
use std::path::PathBuf;

use crate::config::consts::{FLASHCARDS, PROGRESS_CHECKS, ROOT_MENU_ID};
use crate::config::options::AppOptions;
use crate::core::sanitize::normalize_chapter_title;
use crate::error::Result;
use crate::export::Deck;
use crate::progress::Progress;
use crate::scrape::{self, Catalog, LiveCatalog};
use crate::specs::menu::{self, MenuEntry};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: build the live catalog and walk it.
pub fn run(options: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let catalog = LiveCatalog::new()?;
    run_with(&catalog, options, progress)
}

/// The same walk over any catalog. Offline tests drive this directly.
pub fn run_with(
    cat: &impl Catalog,
    options: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let mut summary = RunSummary { files_written: Vec::new() };

    let languages = cat.children(ROOT_MENU_ID)?;
    let mut matched = false;
    for language in &languages {
        if !options.scrape.language.matches(&language.title) {
            continue;
        }
        matched = true;
        progress.log(&format!("Downloading flashcards for language {}", language.title));
        logf!("language {} ({})", language.title, language.id);
        download_language(cat, language, options, progress, &mut summary)?;
    }
    if !matched {
        progress.log("No matching language in the catalog");
    }

    Ok(summary)
}

fn download_language(
    cat: &impl Catalog,
    language: &MenuEntry,
    options: &AppOptions,
    progress: &mut dyn Progress,
    summary: &mut RunSummary,
) -> Result<()> {
    let books = cat.children(language.id)?;
    let mut matched = false;
    for book in &books {
        if !options.scrape.book.matches(&book.title) {
            continue;
        }
        matched = true;
        progress.log(&format!("Downloading flashcards for book {}", book.title));
        logf!("book {} ({})", book.title, book.id);
        if let Some(path) = download_book(cat, language, book, options, progress)? {
            progress.file_done(&path);
            summary.files_written.push(path);
        }
    }
    if !matched {
        progress.log(&format!("No matching book under {}", language.title));
    }
    Ok(())
}

/// One book → at most one deck file. `None` means a valid empty outcome:
/// no flashcard-compatible menu, or zero cards across all chapters.
fn download_book(
    cat: &impl Catalog,
    language: &MenuEntry,
    book: &MenuEntry,
    options: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<Option<PathBuf>> {
    // Books expose flashcards under "Flashcards" or (older titles)
    // "Progress Checks". Neither present → not flashcard-compatible.
    let sections = cat.children(book.id)?;
    let Some(deck_node) = menu::pick_named(&sections, &[FLASHCARDS, PROGRESS_CHECKS]) else {
        progress.log(&format!(
            "Book {} does not have flashcards or progress checks",
            book.title
        ));
        return Ok(None);
    };

    let chapters = cat.children(deck_node.id)?;
    let lang_initial = language.title.chars().next().unwrap_or('?');
    let mut deck = Deck::new(&book.title, lang_initial);

    for chapter in &chapters {
        let cards = scrape::chapter_cards(cat, chapter, progress)?;
        let title = normalize_chapter_title(&chapter.title);
        progress.log(&format!("Chapter: {title}"));
        logd!("chapter {}: {} card(s)", title, cards.len());
        deck.push_chapter(&title, &cards);
    }

    if deck.is_empty() {
        progress.log(&format!("No flashcards found for book {}", book.title));
        return Ok(None);
    }

    let path = options.export.deck_path(&book.title);
    deck.write_to(&path)?;
    logf!("wrote {}", path.display());
    Ok(Some(path))
}
