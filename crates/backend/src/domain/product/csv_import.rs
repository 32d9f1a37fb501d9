//! Batch import of product records from an uploaded CSV file.
//!
//! Rows are processed strictly in file order; a rejected row is recorded
//! and skipped, and the remaining rows continue. This is deliberately the
//! opposite of the form's all-or-nothing submit.

use contracts::domain::product::csv::dto_from_csv_row;
use contracts::domain::product::{ImportFailure, ImportOutcome};
use thiserror::Error;

use super::service;

/// Delimiter shared with the browser-side export.
pub const DELIMITER: u8 = b';';

#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("the file has no header row")]
    MissingHeader,
    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
}

/// Split CSV text into a header row and data rows. Tolerates a UTF-8
/// BOM and ragged rows (short rows read as empty cells downstream).
pub fn parse_rows(text: &str) -> Result<(Vec<String>, Vec<Vec<String>>), CsvImportError> {
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if header.iter().all(|h| h.is_empty()) {
        return Err(CsvImportError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok((header, rows))
}

/// Import every data row, one create per row, continuing past failures.
/// Returns the structured outcome instead of a bare success flag so the
/// caller can surface partial failure.
pub async fn import_products_from_csv(text: &str) -> Result<ImportOutcome, CsvImportError> {
    let (header, rows) = parse_rows(text)?;

    let mut outcome = ImportOutcome::default();
    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        let dto = match dto_from_csv_row(&header, row) {
            Ok(dto) => dto,
            Err(reason) => {
                tracing::warn!("CSV import: row {} rejected: {}", row_number, reason);
                outcome.failures.push(ImportFailure {
                    row: row_number,
                    reason,
                });
                continue;
            }
        };

        match service::create_imported(dto).await {
            Ok(_) => outcome.created += 1,
            Err(e) => {
                tracing::warn!("CSV import: row {} failed to store: {}", row_number, e);
                outcome.failures.push(ImportFailure {
                    row: row_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "CSV import finished: {} created, {} failed",
        outcome.created,
        outcome.failures.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let text = "name;price;stock;minStock;orderUnit\ntea;480;24;5;2\ncocoa;300;10;2;1\n";
        let (header, rows) = parse_rows(text).unwrap();
        assert_eq!(header[0], "name");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["cocoa", "300", "10", "2", "1"]);
    }

    #[test]
    fn tolerates_utf8_bom() {
        let text = "\u{feff}name;price;stock;minStock;orderUnit\ntea;480;24;5;2\n";
        let (header, rows) = parse_rows(text).unwrap();
        assert_eq!(header[0], "name");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn quoted_cells_keep_embedded_delimiters() {
        let text = "name;price;stock;minStock;orderUnit\n\"tea; loose leaf\";480;24;5;2\n";
        let (_, rows) = parse_rows(text).unwrap();
        assert_eq!(rows[0][0], "tea; loose leaf");
    }

    #[test]
    fn bad_row_is_rejected_but_parsing_reports_the_rest() {
        // dto_from_csv_row decides per row; parse itself keeps all rows.
        let text = "name;price;stock;minStock;orderUnit\ntea;NaNju;24;5;2\ncocoa;300;10;2;1\n";
        let (header, rows) = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(contracts::domain::product::csv::dto_from_csv_row(&header, &rows[0]).is_err());
        assert!(contracts::domain::product::csv::dto_from_csv_row(&header, &rows[1]).is_ok());
    }

    #[test]
    fn empty_input_is_a_missing_header() {
        assert!(matches!(
            parse_rows(""),
            Err(CsvImportError::MissingHeader)
        ));
    }
}
