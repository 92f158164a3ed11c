use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::roster::{table::OutputRow, COURSE_HEADER_KEYS};

/// Write one CSV row per student. The column set is the recognized header
/// fields that appear in at least one row (in their canonical order)
/// followed by crsid/LineNo/StudentID/FullName. Zero rows still produce a
/// valid file with the fixed columns.
pub fn write_csv<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    let header_cols: Vec<&str> = COURSE_HEADER_KEYS
        .iter()
        .copied()
        .filter(|key| rows.iter().any(|row| row.header.get(key).is_some()))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut columns: Vec<&str> = header_cols.clone();
    columns.extend(["crsid", "LineNo", "StudentID", "FullName"]);
    csv_writer
        .write_record(&columns)
        .context("writing CSV header")?;

    for row in rows {
        let mut record: Vec<String> = header_cols
            .iter()
            .map(|key| row.header.get(key).unwrap_or_default().to_string())
            .collect();
        record.push(row.crsid.to_string());
        record.push(row.line_no.map(|n| n.to_string()).unwrap_or_default());
        record.push(row.student_id.clone());
        record.push(row.full_name.clone());
        csv_writer.write_record(&record).context("writing CSV row")?;
    }

    csv_writer.flush().context("flushing CSV")?;
    Ok(())
}

pub fn write_csv_file(rows: &[OutputRow], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    write_csv(rows, file)
}

// ── Tests ──
