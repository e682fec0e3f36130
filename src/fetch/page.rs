// src/fetch/page.rs

use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

const TE_BASE: &str = "https://tradingeconomics.com";

/// URL of the indicators table page for one country slug.
pub fn indicators_url(slug: &str) -> Result<Url> {
    let base = Url::parse(TE_BASE).expect("base URL should parse");
    base.join(&format!("{}/indicators", slug))
        .with_context(|| format!("building indicators URL for slug {:?}", slug))
}

/// Fetch the raw indicators page for one country. Exactly one GET goes out
/// per call; a non-2xx status is an error like any other.
pub async fn indicators_page(client: &Client, slug: &str) -> Result<String> {
    let url = indicators_url(slug)?;
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", url))?
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    Ok(body)
}
