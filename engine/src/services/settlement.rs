// The averaging engine: one order-preserving pass over the record list
// that derives per-record day offsets and the amount-weighted settlement
// date. Pure and synchronous; callers re-invoke it whenever the base date
// or any record changes.

use crate::calendar::jalali;
use crate::data::normalize;
use shared::models::{AggregateResult, ChequeRecord, Computation, NormalizedRecord};

/// Computes the derived view for the given base date and record list.
///
/// An invalid base date absorbs everything: no record gets an offset and
/// no aggregate is produced, however well-formed the records are. With a
/// valid base, a record contributes iff its amount is strictly positive
/// and its date is valid.
pub fn compute(base_date_raw: &str, records: &[ChequeRecord]) -> Computation {
    let base_index = jalali::parse_date_string(base_date_raw).map(jalali::to_day_index);

    let mut normalized = Vec::with_capacity(records.len());
    let mut total_amount: u64 = 0;
    let mut total_value_days: i128 = 0;
    let mut counted_records: usize = 0;

    for record in records {
        let amount = normalize::parse_amount(&record.raw_amount);
        let status = normalize::classify_date(&record.raw_date);

        let day_offset = match (base_index, jalali::parse_date_string(&record.raw_date)) {
            (Some(base), Some(date)) => Some(jalali::to_day_index(date) - base),
            _ => None,
        };

        if amount > 0 {
            if let Some(offset) = day_offset {
                total_amount += amount;
                total_value_days += i128::from(amount) * i128::from(offset);
                counted_records += 1;
            }
        }

        normalized.push(NormalizedRecord {
            id: record.id,
            amount,
            date_valid: status.valid,
            flag_invalid: status.flag_invalid,
            day_offset,
        });
    }

    let aggregate = match base_index {
        Some(base) if total_amount > 0 => {
            let weighted_average_offset =
                round_half_away(total_value_days, i128::from(total_amount));
            Some(AggregateResult {
                total_amount,
                weighted_average_offset,
                settlement_date: jalali::from_day_index(base + weighted_average_offset),
                counted_records,
            })
        }
        _ => None,
    };

    Computation {
        normalized,
        aggregate,
        base_valid: base_index.is_some(),
    }
}

/// Nearest-integer division with ties rounded away from zero, so an exact
/// `.5` mean moves the settlement date outward rather than toward the base.
fn round_half_away(numerator: i128, denominator: i128) -> i64 {
    debug_assert!(denominator > 0);
    let doubled = 2 * numerator;
    let rounded = if numerator >= 0 {
        (doubled + denominator) / (2 * denominator)
    } else {
        (doubled - denominator) / (2 * denominator)
    };
    rounded as i64
}
