// src/fetch/mod.rs

pub mod page;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; tescraper/0.1)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the one `Client` shared by the whole run: fixed timeout, gzip,
/// and headers the site expects from a regular browser.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("building HTTP client")
}
