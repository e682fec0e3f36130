use anyhow::Result;
use scraper::{ElementRef, Html, Selector};

/// One indicator as scraped from a country page, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRow {
    pub country: String,
    pub indicator_name: String,
    pub value: String,
    pub unit: String,
    pub last_updated: String,
}

/// Header cells that identify the indicators table among the other tables
/// on the page.
const TABLE_SIGNATURE: [&str; 4] = ["last", "previous", "highest", "lowest"];

/// Extract every indicator from a country page.
///
/// Expected row layout: label, last, previous, highest, lowest, unit,
/// reference period. The unit and reference period are taken from the end
/// of the row, so extra middle columns do not shift them.
pub fn extract_rows(country: &str, html: &str) -> Result<Vec<IndicatorRow>> {
    let table_sel = Selector::parse("table").expect("selector should parse");
    let th_sel = Selector::parse("th").expect("selector should parse");
    let tr_sel = Selector::parse("tr").expect("selector should parse");
    let td_sel = Selector::parse("td").expect("selector should parse");

    let doc = Html::parse_document(html);
    let table = doc
        .select(&table_sel)
        .find(|table| is_indicators_table(table, &th_sel))
        .ok_or_else(|| anyhow::anyhow!("no indicators table on page for {}", country))?;

    let mut rows = Vec::new();
    for tr in table.select(&tr_sel) {
        let cells: Vec<String> = tr.select(&td_sel).map(|td| cell_text(&td)).collect();
        // Header rows have no <td>; anything shorter than the full layout
        // is a separator or ad row.
        if cells.len() < 6 {
            continue;
        }
        rows.push(IndicatorRow {
            country: country.to_string(),
            indicator_name: cells[0].clone(),
            value: cells[1].clone(),
            unit: cells[cells.len() - 2].clone(),
            last_updated: cells[cells.len() - 1].clone(),
        });
    }
    Ok(rows)
}

fn is_indicators_table(table: &ElementRef, th_sel: &Selector) -> bool {
    let headers: Vec<String> = table
        .select(th_sel)
        .map(|th| cell_text(&th).to_ascii_lowercase())
        .collect();
    TABLE_SIGNATURE
        .iter()
        .all(|want| headers.iter().any(|have| have == want))
}

/// Collapse an element's text nodes into one whitespace-normalized string.
fn cell_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
