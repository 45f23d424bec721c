// In-memory working set for one editing session: the base date plus the
// ordered cheque list. Holds raw text only; every derived value comes from
// a full settlement pass over a snapshot of this state.
use crate::calendar::jalali;
use crate::services::settlement;
use shared::models::{ChequeRecord, Computation};
use uuid::Uuid;

pub struct ChequeBook {
    base_date: String,
    records: Vec<ChequeRecord>,
}

impl ChequeBook {
    /// Starts an empty session with the base date defaulted to today.
    pub fn new() -> Self {
        Self::with_base_date(jalali::format_date(jalali::today()))
    }

    pub fn with_base_date(base_date: impl Into<String>) -> Self {
        ChequeBook {
            base_date: base_date.into(),
            records: Vec::new(),
        }
    }

    pub fn base_date(&self) -> &str {
        &self.base_date
    }

    pub fn set_base_date(&mut self, base_date: impl Into<String>) {
        self.base_date = base_date.into();
    }

    pub fn records(&self) -> &[ChequeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and returns its stable identifier.
    pub fn add_record(&mut self, raw_amount: impl Into<String>, raw_date: impl Into<String>) -> Uuid {
        let record = ChequeRecord::new(raw_amount, raw_date);
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Appends already-constructed records, e.g. from a tabular import.
    pub fn extend(&mut self, records: Vec<ChequeRecord>) {
        self.records.extend(records);
    }

    pub fn update_amount(&mut self, id: Uuid, raw_amount: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.raw_amount = raw_amount.into();
                true
            }
            None => false,
        }
    }

    pub fn update_date(&mut self, id: Uuid, raw_date: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.raw_date = raw_date.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_record(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Runs a full settlement pass over the current state. Cheap (linear,
    /// small N), so callers re-run it after every edit instead of keeping
    /// incremental accumulators.
    pub fn compute(&self) -> Computation {
        let computation = settlement::compute(&self.base_date, &self.records);
        tracing::debug!(
            records = self.records.len(),
            base_valid = computation.base_valid,
            has_aggregate = computation.aggregate.is_some(),
            "Settlement pass complete"
        );
        computation
    }
}

impl Default for ChequeBook {
    fn default() -> Self {
        Self::new()
    }
}
