use super::table::IndicatorRow;
use tracing::warn;

/// Find the row for `label`: exact match first, then ASCII
/// case-insensitive exact, then case-insensitive substring.
pub fn find_best_match<'a>(rows: &'a [IndicatorRow], label: &str) -> Option<&'a IndicatorRow> {
    if let Some(row) = rows.iter().find(|row| row.indicator_name == label) {
        return Some(row);
    }
    if let Some(row) = rows
        .iter()
        .find(|row| row.indicator_name.eq_ignore_ascii_case(label))
    {
        return Some(row);
    }
    let needle = label.to_ascii_lowercase();
    rows.iter()
        .find(|row| row.indicator_name.to_ascii_lowercase().contains(&needle))
}

/// Apply the `--indicator` filter to one country's rows, keeping the best
/// match per requested label in request order. An empty request keeps
/// every row.
pub fn filter_rows(rows: Vec<IndicatorRow>, labels: &[String]) -> Vec<IndicatorRow> {
    if labels.is_empty() {
        return rows;
    }
    let mut kept = Vec::with_capacity(labels.len());
    for label in labels {
        match find_best_match(&rows, label) {
            Some(row) => kept.push(row.clone()),
            None => {
                let country = rows.first().map(|row| row.country.as_str()).unwrap_or("?");
                warn!(country = %country, label = %label, "no indicator matched");
            }
        }
    }
    kept
}
