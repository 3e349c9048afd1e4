// src/scrape/decks.rs

// Recursive descent from a chapter node down to its study-mode leaves.
// Depth varies by node type: a chapter may hold cards directly (terminal
// leaf) or fan out into sections and modes, so the walk recurses instead of
// assuming a fixed shape.

use reqwest::blocking::Client;

use crate::config::consts::STUDY_MODE;
use crate::core::net;
use crate::core::sanitize::{split_fused_sides, strip_field_breaks};
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::cards::{self, RawCard};
use crate::specs::menu::{self, MenuEntry};

/// Where menu levels and cards come from. The live impl hits the vendor
/// API; tests drive the walk with an in-memory tree.
pub trait Catalog {
    fn children(&self, parent_id: u32) -> Result<Vec<MenuEntry>>;
    fn cards(&self, menu_id: u32) -> Result<Vec<RawCard>>;
}

pub struct LiveCatalog {
    client: Client,
}

impl LiveCatalog {
    pub fn new() -> Result<Self> {
        Ok(Self { client: net::client()? })
    }
}

impl Catalog for LiveCatalog {
    fn children(&self, parent_id: u32) -> Result<Vec<MenuEntry>> {
        menu::fetch(&self.client, parent_id)
    }
    fn cards(&self, menu_id: u32) -> Result<Vec<RawCard>> {
        cards::fetch(&self.client, menu_id)
    }
}

/// A cleaned card: both sides single-line, tab-free, non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub side_a: String,
    pub side_b: String,
}

/// All cards under one chapter node, in discovery order.
///
/// Terminal leaves fetch from their "Flashcards: Study Mode" child; internal
/// nodes recurse into each child and concatenate. A leaf without a study
/// mode contributes nothing (reported, not an error).
pub fn chapter_cards(
    cat: &impl Catalog,
    chapter: &MenuEntry,
    progress: &mut dyn Progress,
) -> Result<Vec<Card>> {
    progress.log(&format!("  {}", chapter.title));

    if chapter.flashcards_and_quiz {
        let modes = cat.children(chapter.id)?;
        let Some(mode) = menu::pick_named(&modes, &[STUDY_MODE]) else {
            progress.log(&format!("Chapter {} does not have flashcard mode", chapter.title));
            return Ok(Vec::new());
        };
        Ok(clean_cards(cat.cards(mode.id)?))
    } else {
        let mut out = Vec::new();
        for section in cat.children(chapter.id)? {
            out.extend(chapter_cards(cat, &section, progress)?);
        }
        Ok(out)
    }
}

/// Raw records → emit-ready cards.
///
/// A side-A text containing `"\r\n"` is the one known fused record and goes
/// through `split_fused_sides` instead of the generic strip. Cards with an
/// empty side after cleanup are dropped.
pub fn clean_cards(raw: Vec<RawCard>) -> Vec<Card> {
    let mut out = Vec::new();
    for card in raw {
        if card.side_a.contains("\r\n") {
            for (a, b) in split_fused_sides(&card.side_a) {
                push_full(&mut out, a, b);
            }
        } else {
            push_full(
                &mut out,
                strip_field_breaks(&card.side_a),
                strip_field_breaks(&card.side_b),
            );
        }
    }
    out
}

fn push_full(out: &mut Vec<Card>, side_a: String, side_b: String) {
    if !side_a.is_empty() && !side_b.is_empty() {
        out.push(Card { side_a, side_b });
    }
}
