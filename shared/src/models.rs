use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use uuid::Uuid;

/// A calendar date in the Iranian solar (Jalali) calendar.
///
/// A triple is only meaningful if it survives the round trip through
/// [`DayIndex`] conversion unchanged; validation lives in the engine's
/// calendar module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// Absolute linear day count. Day 0 is Jalali 979/01/01.
///
/// Subtracting two indices gives the exact signed day difference, including
/// across month, year, and leap-year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayIndex(pub i64);

impl Sub for DayIndex {
    type Output = i64;

    fn sub(self, rhs: DayIndex) -> i64 {
        self.0 - rhs.0
    }
}

impl Add<i64> for DayIndex {
    type Output = DayIndex;

    fn add(self, days: i64) -> DayIndex {
        DayIndex(self.0 + days)
    }
}

/// A single post-dated cheque as entered: raw text for both fields.
///
/// The `id` is opaque and stable across reorderings so list diffing in a
/// front end stays correct; it carries no computational meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChequeRecord {
    pub id: Uuid,
    pub raw_amount: String,
    pub raw_date: String,
}

impl ChequeRecord {
    pub fn new(raw_amount: impl Into<String>, raw_date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            raw_amount: raw_amount.into(),
            raw_date: raw_date.into(),
        }
    }
}

/// Per-record derived view, recomputed on every pass and never persisted.
///
/// `day_offset` is present only when both the record's date and the base
/// date are valid; it may be negative or zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: Uuid,
    pub amount: u64,
    pub date_valid: bool,
    /// Set only once the raw date is long enough that the user has
    /// plausibly finished typing and it is still not valid.
    pub flag_invalid: bool,
    pub day_offset: Option<i64>,
}

/// Aggregate over contributing records. Present only when at least one
/// record has a strictly positive amount and a valid date against a valid
/// base date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub total_amount: u64,
    pub weighted_average_offset: i64,
    pub settlement_date: JalaliDate,
    pub counted_records: usize,
}

/// Full output of one settlement pass over the record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Computation {
    pub normalized: Vec<NormalizedRecord>,
    pub aggregate: Option<AggregateResult>,
    pub base_valid: bool,
}
