// src/specs/menu.rs

// GetSubMenus: one level of the vendor's content catalog
// (language → book → section → ... → flashcard mode).

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::API_BASE;
use crate::core::net;
use crate::error::Result;

/// One catalog entry. The vendor sends more than we use; the extra fields
/// stay in the schema so decoding remains strict yet future-tolerant.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "Menu_ID")]
    pub id: u32,
    #[serde(rename = "MenuTitle")]
    pub title: String,
    /// Terminal leaf: this node directly holds flashcards + a quiz instead
    /// of further children.
    #[serde(rename = "FlashCardsAndQuiz", default)]
    pub flashcards_and_quiz: bool,

    // Decoded and discarded.
    #[serde(rename = "TitleInformation", default)]
    pub title_information: String,
    #[serde(rename = "Base64Image", default)]
    pub base64_image: String,
    #[serde(rename = "MenuFormat", default)]
    pub menu_format: String,
    #[serde(rename = "DeckType", default)]
    pub deck_type: String,
    #[serde(rename = "SelfScoring", default)]
    pub self_scoring: bool,
    #[serde(rename = "DeckTitle", default)]
    pub deck_title: String,
    #[serde(rename = "SideALabel", default)]
    pub side_a_label: String,
    #[serde(rename = "SideBLabel", default)]
    pub side_b_label: String,
    #[serde(rename = "DataDeck_ID", default)]
    pub data_deck_id: u32,
    #[serde(rename = "ForceSideA", default)]
    pub force_side_a: bool,
    #[serde(rename = "Unpublished", default)]
    pub unpublished: bool,
}

/// Children of `parent_id`. One request, full list, no pagination.
pub fn fetch(client: &Client, parent_id: u32) -> Result<Vec<MenuEntry>> {
    let url = format!("{API_BASE}/GetSubMenus?parentID={parent_id}");
    net::get_json(client, &url)
}

/// First entry whose title exactly equals one of `names`, in *name*
/// preference order: all entries are tried against `names[0]` before
/// `names[1]` is considered.
pub fn pick_named<'a>(entries: &'a [MenuEntry], names: &[&str]) -> Option<&'a MenuEntry> {
    names
        .iter()
        .find_map(|name| entries.iter().find(|e| e.title == *name))
}
