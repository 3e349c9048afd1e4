// src/core/net.rs

// Blocking HTTPS GET + JSON decode against the vendor API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;

pub fn client() -> Result<Client> {
    let client = Client::builder()
        .user_agent("ll_scrape/0.3")
        .timeout(Duration::from_secs(15))
        .build()?;
    Ok(client)
}

/// GET `url`, require a 2xx status, decode the body as JSON.
/// Non-2xx → Transport; body not matching `T` → Decode.
pub fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(serde_json::from_str(&body)?)
}
