use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use super::sync::SheetRow;
use crate::scoring::Candidate;

pub const EXPORT_HEADERS: [&str; 15] = [
    "Name",
    "School",
    "Division",
    "Academic",
    "Individual",
    "Group",
    "Special",
    "Pub Lead",
    "Guild Lead",
    "Innovation",
    "Community",
    "Published",
    "Trainings",
    "Interview Total",
    "Grand Total",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export io failure: {0}")]
    Io(#[from] io::Error),
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

/// `ospa_export_<date>.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("ospa_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the header plus one row per candidate and returns the number of
/// candidate rows. Text fields are quoted with doubled-quote escaping.
pub fn write_csv<W: Write>(candidates: &[Candidate], mut writer: W) -> Result<usize, ExportError> {
    writeln!(writer, "{}", EXPORT_HEADERS.join(","))?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::NonNumeric)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for candidate in candidates {
        let row = SheetRow::from(candidate);
        csv_writer.write_record(csv_fields(&row))?;
    }
    csv_writer.flush()?;

    Ok(candidates.len())
}

fn csv_fields(row: &SheetRow) -> [String; 15] {
    [
        row.name.clone(),
        row.school.clone(),
        row.division.clone(),
        row.academic.clone(),
        row.individual.to_string(),
        row.group.to_string(),
        row.special.to_string(),
        row.pub_lead.to_string(),
        row.guild_lead.to_string(),
        row.innovation.to_string(),
        row.community.to_string(),
        row.published.to_string(),
        row.trainings.to_string(),
        format!("{:.2}", row.interview_total),
        format!("{:.2}", row.grand_total),
    ]
}

/// Writes a dated export into `dir`. An empty candidate list is a no-op and yields `None`.
pub fn export_to_dir(
    candidates: &[Candidate],
    dir: &Path,
    date: NaiveDate,
) -> Result<Option<PathBuf>, ExportError> {
    if candidates.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    let file = File::create(&path)?;
    let rows = write_csv(candidates, io::BufWriter::new(file))?;
    info!(path = %path.display(), rows, "candidate export written");
    Ok(Some(path))
}
