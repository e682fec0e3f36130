use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// "Dec/25" — month abbreviation over two-digit year.
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{3})/(\d{2})$").expect("regex should compile"));

// "Q3/25" or "Q3/2025" — quarters show up on series pages.
static QUARTER_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Q([1-4])/(\d{2}|\d{4})$").expect("regex should compile"));

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse the site's reference-period strings into a date usable for
/// ordering. Quarters map to the first month of the quarter; unknown
/// shapes and placeholders ("n/a", "-") parse to `None`.
pub fn parse_ref_period(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") || s == "-" {
        return None;
    }

    if let Some(caps) = MONTH_YEAR.captures(s) {
        let month = month_number(&caps[1])?;
        let year = 2000 + caps[2].parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Some(caps) = QUARTER_YEAR.captures(s) {
        let quarter: u32 = caps[1].parse().ok()?;
        let year: i32 = match caps[2].len() {
            4 => caps[2].parse().ok()?,
            _ => 2000 + caps[2].parse::<i32>().ok()?,
        };
        return NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    // chrono needs a complete date, so pin "Mar 2024" to the 1st.
    for fmt in ["%b %Y %d", "%B %Y %d"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{} 1", s), fmt) {
            return Some(date);
        }
    }
    None
}

/// Pick the update string with the latest parseable reference period.
/// Strings that do not parse are ignored.
pub fn most_recent<'a, I>(updates: I) -> Option<(&'a str, NaiveDate)>
where
    I: IntoIterator<Item = &'a str>,
{
    updates
        .into_iter()
        .filter_map(|s| parse_ref_period(s).map(|date| (s, date)))
        .max_by_key(|(_, date)| *date)
}

fn month_number(abbr: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(abbr))
        .map(|i| i as u32 + 1)
}
