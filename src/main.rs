use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tescraper::{countries, export, fetch, parse};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "tescraper",
    about = "Scrape per-country economic indicator tables into CSV"
)]
struct Cli {
    /// Path to the country list
    #[arg(long, default_value = "countries.json")]
    countries: PathBuf,

    /// Compact output CSV (country, indicator_name, value)
    #[arg(long, default_value = "indicators.csv")]
    out: PathBuf,

    /// Full output CSV (adds unit and last_updated)
    #[arg(long = "out-full", default_value = "indicators_full.csv")]
    out_full: PathBuf,

    /// Keep only indicators matching this label (repeatable; default: all)
    #[arg(long = "indicator")]
    indicators: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    let cli = Cli::parse();

    // ─── 2) load country list; nothing runs on a bad config ──────────
    let entries = countries::load(&cli.countries)?;
    info!("{} countries configured", entries.len());

    // ─── 3) fetch + parse, one country at a time ─────────────────────
    let client = fetch::build_client()?;
    let mut rows: Vec<parse::IndicatorRow> = Vec::new();
    let mut succeeded = 0usize;
    let mut skipped = 0usize;

    for entry in &entries {
        info!(country = %entry.name, slug = %entry.slug, "scraping");

        let html = match fetch::page::indicators_page(&client, &entry.slug).await {
            Ok(html) => html,
            Err(err) => {
                error!(country = %entry.name, "fetch failed: {:#}", err);
                skipped += 1;
                continue;
            }
        };

        let parsed = match parse::table::extract_rows(&entry.name, &html) {
            Ok(parsed) => parsed,
            Err(err) => {
                error!(country = %entry.name, "parse failed: {:#}", err);
                skipped += 1;
                continue;
            }
        };

        if let Some((period, _)) =
            parse::period::most_recent(parsed.iter().map(|row| row.last_updated.as_str()))
        {
            debug!(country = %entry.name, period = %period, "latest reference period");
        }

        let kept = parse::matching::filter_rows(parsed, &cli.indicators);
        info!(country = %entry.name, rows = kept.len(), "scraped");
        rows.extend(kept);
        succeeded += 1;
    }

    // ─── 4) write both projections ───────────────────────────────────
    export::write_compact(&cli.out, &rows)?;
    export::write_full(&cli.out_full, &rows)?;

    info!(
        succeeded,
        skipped,
        rows = rows.len(),
        "wrote {} and {}",
        cli.out.display(),
        cli.out_full.display()
    );
    Ok(())
}
