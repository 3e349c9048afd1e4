// src/specs/cards.rs

// GetFlashCards: raw card records at a study-mode node.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::API_BASE;
use crate::core::net;
use crate::error::Result;

/// One raw card as the vendor sends it. Only the two side texts matter;
/// styling/audio/video/label metadata is decoded and discarded.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCard {
    #[serde(rename = "Card_ID")]
    pub id: u32,
    /// Language side.
    #[serde(rename = "SideA", default)]
    pub side_a: String,
    /// English side.
    #[serde(rename = "SideB", default)]
    pub side_b: String,

    // Decoded and discarded.
    #[serde(rename = "StyleA", default)]
    pub style_a: String,
    #[serde(rename = "StyleB", default)]
    pub style_b: String,
    #[serde(rename = "SideAAudio", default)]
    pub side_a_audio: String,
    #[serde(rename = "SideBAudio", default)]
    pub side_b_audio: String,
    #[serde(rename = "SideAImage", default)]
    pub side_a_image: String,
    #[serde(rename = "SideBImage", default)]
    pub side_b_image: String,
    #[serde(rename = "SideAVideo", default)]
    pub side_a_video: String,
    #[serde(rename = "SideBVideo", default)]
    pub side_b_video: String,
    #[serde(rename = "SideALabel", default)]
    pub side_a_label: String,
    #[serde(rename = "SideBLabel", default)]
    pub side_b_label: String,
    #[serde(rename = "TTSAudio", default)]
    pub tts_audio: bool,
    #[serde(rename = "TTSSideA", default)]
    pub tts_side_a: String,
    #[serde(rename = "TTSSideB", default)]
    pub tts_side_b: String,
}

/// Cards at `menu_id`. An empty array is a legitimate empty deck, not an
/// error.
pub fn fetch(client: &Client, menu_id: u32) -> Result<Vec<RawCard>> {
    let url = format!("{API_BASE}/GetFlashCards?menuID={menu_id}");
    net::get_json(client, &url)
}
