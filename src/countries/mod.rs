// src/countries/mod.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One entry of `countries.json`: a display name plus the site path segment
/// addressing that country's indicators page.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    #[serde(alias = "country")]
    pub name: String,
    pub slug: String,
}

/// Load the ordered country list. Any structural problem here is fatal:
/// the run aborts before a single request goes out.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<CountryEntry>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading country list {}", path.display()))?;
    let entries: Vec<CountryEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing country list {}", path.display()))?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if entry.name.trim().is_empty() {
            anyhow::bail!("country entry with empty name (slug {:?})", entry.slug);
        }
        if entry.slug.trim().is_empty() {
            anyhow::bail!("country {:?} has an empty slug", entry.name);
        }
        // Two casings of one slug address the same page.
        if !seen.insert(entry.slug.to_ascii_lowercase()) {
            anyhow::bail!("duplicate slug {:?} in country list", entry.slug);
        }
    }

    Ok(entries)
}
