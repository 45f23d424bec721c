// Seam for optical cheque extraction. The engine never looks at pixels; a
// concrete extractor (remote OCR service, on-device model) runs elsewhere,
// finishes on its own schedule, and hands back one best-guess raw pair that
// flows through the same normalization path as manual input.
use crate::error::EngineError;

/// Best-guess amount and due-date text recovered from a cheque image.
/// Both fields are unvalidated raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCheque {
    pub raw_amount: String,
    pub raw_date: String,
}

pub trait ChequeExtractor: Send + Sync {
    fn name(&self) -> &str;
    fn extract(&self, image: &[u8]) -> Result<ExtractedCheque, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cheque_book::ChequeBook;

    struct FixedExtractor;

    impl ChequeExtractor for FixedExtractor {
        fn name(&self) -> &str {
            "fixed"
        }

        fn extract(&self, image: &[u8]) -> Result<ExtractedCheque, EngineError> {
            if image.is_empty() {
                return Err(EngineError::ExtractionError("empty image".to_string()));
            }
            Ok(ExtractedCheque {
                raw_amount: "۱۲۵۰۰۰".to_string(),
                raw_date: "1403/05/20".to_string(),
            })
        }
    }

    #[test]
    fn extracted_pair_feeds_the_record_list() {
        let extractor = FixedExtractor;
        let extracted = extractor.extract(&[0u8; 4]).unwrap();

        let mut book = ChequeBook::with_base_date("1403/05/10");
        book.add_record(extracted.raw_amount, extracted.raw_date);

        let aggregate = book.compute().aggregate.unwrap();
        assert_eq!(aggregate.total_amount, 125_000);
        assert_eq!(aggregate.weighted_average_offset, 10);
    }

    #[test]
    fn extraction_failures_are_errors_not_records() {
        let err = FixedExtractor.extract(&[]).unwrap_err();
        assert!(matches!(err, EngineError::ExtractionError(_)));
    }
}
