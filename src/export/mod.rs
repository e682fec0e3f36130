// src/export/mod.rs

use anyhow::{Context, Result};
use csv::Writer;
use std::fs::{self, File};
use std::path::Path;

use crate::parse::IndicatorRow;

/// Write the compact projection: one line per indicator, no metadata.
/// Replaces any existing file at `path`.
pub fn write_compact(path: impl AsRef<Path>, rows: &[IndicatorRow]) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = open_writer(path)?;
    wtr.write_record(["country", "indicator_name", "value"])
        .with_context(|| format!("writing header to {}", path.display()))?;
    for row in rows {
        wtr.write_record([&row.country, &row.indicator_name, &row.value])
            .with_context(|| format!("writing row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Write the full projection with unit and last-updated metadata.
/// Replaces any existing file at `path`.
pub fn write_full(path: impl AsRef<Path>, rows: &[IndicatorRow]) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = open_writer(path)?;
    wtr.write_record(["country", "indicator_name", "value", "unit", "last_updated"])
        .with_context(|| format!("writing header to {}", path.display()))?;
    for row in rows {
        wtr.write_record([
            &row.country,
            &row.indicator_name,
            &row.value,
            &row.unit,
            &row.last_updated,
        ])
        .with_context(|| format!("writing row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

fn open_writer(path: &Path) -> Result<Writer<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    Ok(Writer::from_writer(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<IndicatorRow> {
        vec![
            IndicatorRow {
                country: "Sweden".to_string(),
                indicator_name: "GDP Annual Growth Rate".to_string(),
                value: "1.10".to_string(),
                unit: "percent".to_string(),
                last_updated: "Mar/25".to_string(),
            },
            IndicatorRow {
                country: "Japan".to_string(),
                indicator_name: "Inflation Rate".to_string(),
                value: "2.30".to_string(),
                unit: "percent".to_string(),
                last_updated: "Jun/25".to_string(),
            },
        ]
    }

    #[test]
    fn writes_header_plus_one_line_per_row() {
        let dir = tempdir().unwrap();
        let compact = dir.path().join("indicators.csv");
        let full = dir.path().join("indicators_full.csv");
        let rows = sample_rows();

        write_compact(&compact, &rows).unwrap();
        write_full(&full, &rows).unwrap();

        let compact_text = fs::read_to_string(&compact).unwrap();
        let full_text = fs::read_to_string(&full).unwrap();

        let compact_lines: Vec<&str> = compact_text.lines().collect();
        let full_lines: Vec<&str> = full_text.lines().collect();

        assert_eq!(compact_lines.len(), rows.len() + 1);
        assert_eq!(compact_lines.len(), full_lines.len());
        assert_eq!(compact_lines[0], "country,indicator_name,value");
        assert_eq!(
            full_lines[0],
            "country,indicator_name,value,unit,last_updated"
        );
        assert_eq!(compact_lines[1], "Sweden,GDP Annual Growth Rate,1.10");
        assert_eq!(
            full_lines[2],
            "Japan,Inflation Rate,2.30,percent,Jun/25"
        );
    }

    #[test]
    fn empty_run_still_writes_headers() {
        let dir = tempdir().unwrap();
        let compact = dir.path().join("indicators.csv");
        write_compact(&compact, &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&compact).unwrap(),
            "country,indicator_name,value\n"
        );
    }

    #[test]
    fn reruns_are_byte_identical_and_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("indicators.csv");

        write_compact(&path, &sample_rows()).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        write_compact(&path, &sample_rows()).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);

        // A shorter run replaces the file, it does not append.
        write_compact(&path, &sample_rows()[..1]).unwrap();
        let third = fs::read_to_string(&path).unwrap();
        assert_eq!(third.lines().count(), 2);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("out").join("indicators.csv");
        write_compact(&path, &sample_rows()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        // A file where a directory is needed makes the destination invalid.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("indicators.csv");
        assert!(write_compact(&path, &sample_rows()).is_err());
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("indicators.csv");
        let rows = vec![IndicatorRow {
            country: "Sweden".to_string(),
            indicator_name: "Imports, total".to_string(),
            value: "17,919".to_string(),
            unit: "SEK million".to_string(),
            last_updated: "Jun/25".to_string(),
        }];
        write_compact(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""Imports, total""#));
        assert!(text.contains(r#""17,919""#));
    }
}
