// Tabular importer: turns a spreadsheet-style CSV export into cheque
// records. Field text is passed through untouched; normalization and
// validation happen later, at settlement time.
use crate::config::EngineSettings;
use crate::error::EngineError;
use csv::{ReaderBuilder, StringRecord};
use shared::models::ChequeRecord;
use std::fs::File;
use std::io::BufReader;
use tracing::{info, warn};

// Spreadsheets from the target locale often carry Persian headers.
const AMOUNT_HEADER_ALIASES: [&str; 2] = ["مبلغ", "مبلغ چک"];
const DATE_HEADER_ALIASES: [&str; 2] = ["تاریخ", "تاریخ سررسید"];

pub struct ChequeCsvImporter;

impl ChequeCsvImporter {
    /// Reads `(amount, date)` pairs from a delimited file with a header
    /// row. Columns are located by header name; rows that are entirely
    /// blank in both columns are skipped with a warning.
    pub fn load_records_from_csv(
        file_path: &str,
        settings: &EngineSettings,
    ) -> Result<Vec<ChequeRecord>, EngineError> {
        let file = File::open(file_path)?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(settings.csv_delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let amount_pos = Self::find_column(&headers, &settings.amount_header, &AMOUNT_HEADER_ALIASES)
            .ok_or_else(|| {
                EngineError::CsvDataFormatError(format!(
                    "amount column '{}' not found in header",
                    settings.amount_header
                ))
            })?;
        let date_pos = Self::find_column(&headers, &settings.date_header, &DATE_HEADER_ALIASES)
            .ok_or_else(|| {
                EngineError::CsvDataFormatError(format!(
                    "date column '{}' not found in header",
                    settings.date_header
                ))
            })?;

        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2; // 1-based, after the header row
            let row = result?;
            let amount = Self::get_field(&row, amount_pos, &settings.amount_header, line)?;
            let date = Self::get_field(&row, date_pos, &settings.date_header, line)?;
            if amount.trim().is_empty() && date.trim().is_empty() {
                warn!(line, "Skipping blank row");
                continue;
            }
            records.push(ChequeRecord::new(amount.trim(), date.trim()));
        }

        info!(
            count = records.len(),
            path = %file_path,
            "Imported cheque records from CSV"
        );
        Ok(records)
    }

    fn find_column(headers: &StringRecord, name: &str, aliases: &[&str]) -> Option<usize> {
        headers.iter().position(|header| {
            let header = header.trim();
            header.eq_ignore_ascii_case(name) || aliases.contains(&header)
        })
    }

    fn get_field<'a>(
        row: &'a StringRecord,
        pos: usize,
        name: &str,
        line: usize,
    ) -> Result<&'a str, EngineError> {
        row.get(pos).ok_or_else(|| {
            EngineError::CsvDataFormatError(format!("missing '{}' field at line {}", name, line))
        })
    }
}
