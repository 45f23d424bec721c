// rascalc: import a cheque CSV, compute the weighted-average settlement
// ("ras") date, print the result.
use anyhow::{Context, Result};
use engine::calendar::jalali;
use engine::config::EngineSettings;
use engine::data::csv_import::ChequeCsvImporter;
use engine::services::export::{DocumentExporter, TextSummaryExporter};
use engine::services::settlement;
use shared::utils::group_amount;
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let csv_path = args
        .next()
        .context("usage: rascalc <cheques.csv> [base-date]")?;
    let base_date = args
        .next()
        .unwrap_or_else(|| jalali::format_date(jalali::today()));

    let settings = match std::env::var("RASCALC_CONFIG") {
        Ok(path) => EngineSettings::load_from_file(&path)?,
        Err(_) => EngineSettings::default(),
    };

    let records = ChequeCsvImporter::load_records_from_csv(&csv_path, &settings)?;
    info!(count = records.len(), base_date = %base_date, "Computing settlement");

    let computation = settlement::compute(&base_date, &records);
    if !computation.base_valid {
        anyhow::bail!("base date '{}' is not a valid Jalali date", base_date);
    }

    println!("{:>16}  {:<10}  {:>7}", "amount", "due date", "offset");
    for (record, row) in records.iter().zip(&computation.normalized) {
        let offset = match row.day_offset {
            Some(days) => days.to_string(),
            None => "-".to_string(),
        };
        let marker = if row.flag_invalid { "  (invalid date)" } else { "" };
        println!(
            "{:>16}  {:<10}  {:>7}{}",
            group_amount(row.amount),
            record.raw_date,
            offset,
            marker
        );
    }
    println!();

    match TextSummaryExporter.export(&computation, &base_date) {
        Ok(summary) => std::io::stdout().write_all(&summary)?,
        Err(err) => println!("No settlement date: {}", err),
    }

    Ok(())
}
