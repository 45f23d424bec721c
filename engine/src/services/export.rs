// Seam for document export. Export is only available once a computation
// actually has an aggregate; exporters must refuse to render a partial
// result.
use crate::calendar::jalali;
use crate::error::EngineError;
use shared::models::Computation;
use shared::utils::group_amount;
use std::fmt::Write as _;

pub trait DocumentExporter: Send + Sync {
    fn name(&self) -> &str;
    /// Serializes a finished computation to a document. Fails with
    /// [`EngineError::ExportError`] when the computation has no aggregate.
    fn export(&self, computation: &Computation, base_date_raw: &str) -> Result<Vec<u8>, EngineError>;
}

/// Plain-text exporter used by the CLI; doubles as the reference for what
/// a paged-document renderer must include.
pub struct TextSummaryExporter;

impl DocumentExporter for TextSummaryExporter {
    fn name(&self) -> &str {
        "text-summary"
    }

    fn export(&self, computation: &Computation, base_date_raw: &str) -> Result<Vec<u8>, EngineError> {
        let aggregate = computation.aggregate.as_ref().ok_or_else(|| {
            EngineError::ExportError("nothing to export: no contributing records".to_string())
        })?;

        let mut out = String::new();
        let _ = writeln!(out, "Base date:        {}", base_date_raw.trim());
        let _ = writeln!(out, "Cheques counted:  {}", aggregate.counted_records);
        let _ = writeln!(out, "Total amount:     {}", group_amount(aggregate.total_amount));
        let _ = writeln!(out, "Average offset:   {} days", aggregate.weighted_average_offset);
        let _ = writeln!(
            out,
            "Settlement date:  {}",
            jalali::format_date(aggregate.settlement_date)
        );
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::settlement;
    use shared::models::ChequeRecord;

    #[test]
    fn exports_summary_when_aggregate_exists() {
        let records = [ChequeRecord::new("1000", "1403/01/11")];
        let computation = settlement::compute("1403/01/01", &records);
        let bytes = TextSummaryExporter
            .export(&computation, "1403/01/01")
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("1,000"));
        assert!(text.contains("10 days"));
        assert!(text.contains("1403/01/11"));
    }

    #[test]
    fn refuses_to_export_without_aggregate() {
        let computation = settlement::compute("1403/01/01", &[]);
        let err = TextSummaryExporter
            .export(&computation, "1403/01/01")
            .unwrap_err();
        assert!(matches!(err, EngineError::ExportError(_)));
    }
}
