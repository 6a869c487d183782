//! Rating table as CSV

use crate::error::RatingError;
use crate::models::report::{RatingRow, RatingTable};
use crate::models::score::ScoreKey;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

fn record(row: &RatingRow) -> Vec<String> {
    let mut fields = vec![
        row.symbol.clone(),
        row.overall_rating.to_string(),
        row.confidence.to_string(),
    ];
    fields.extend(ScoreKey::ALL.iter().map(|key| row.scores.get(*key).to_string()));
    fields
}

/// Header plus one record per row, in table order
pub fn write_csv<W: Write>(table: &RatingTable, writer: W) -> Result<(), RatingError> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(RatingRow::header())?;
    for row in &table.rows {
        csv.write_record(record(row))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(table: &RatingTable) -> Result<String, RatingError> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        RatingError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Write the table to `path`, replacing any existing file
pub fn export_to_path<P: AsRef<Path>>(table: &RatingTable, path: P) -> Result<(), RatingError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(table, file)?;
    info!(rows = table.len(), path = %path.display(), "Exported rating table");
    Ok(())
}
