// Jalali (Iranian solar) calendar arithmetic.
//
// The converter uses the arithmetic 33-year cycle: 8 leap years per cycle,
// months 1-6 have 31 days, 7-11 have 30, and month 12 has 29 (30 in a leap
// year). Day 0 of the absolute index is Jalali 979/01/01, which lines up
// with Gregorian 1600-03-20 and keeps the Gregorian bridge a small integer
// shift.

use chrono::{Datelike, NaiveDate};
use shared::models::{DayIndex, JalaliDate};
use shared::utils::normalize_digits;

/// Supported year range. The 33-year arithmetic rule tracks the
/// astronomical calendar throughout this window.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 3000;

const EPOCH_YEAR: i64 = 979;
/// 33 years = 25 * 365 + 8 * 366.
const DAYS_PER_CYCLE: i64 = 12053;
/// 4 years = 3 * 365 + 366.
const DAYS_PER_BLOCK: i64 = 1461;

const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];
const MONTH_LENGTHS: [u32; 11] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30];

/// Offset between the Jalali epoch and the Gregorian day count anchored at
/// 1600-01-01 (Jalali 979/01/01 = Gregorian 1600-03-20).
const GREGORIAN_EPOCH_SHIFT: i64 = 79;

/// Leap years fall on cycle offsets 0, 4, 8, ..., 28; offset 32 closes the
/// cycle with a common year.
pub fn is_leap_year(year: i32) -> bool {
    let r = (i64::from(year) - EPOCH_YEAR).rem_euclid(33);
    r % 4 == 0 && r != 32
}

pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=11 => MONTH_LENGTHS[(month - 1) as usize],
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Converts a well-formed triple to its absolute day index. Total: callers
/// that need correctness must pre-validate with [`is_valid_date`].
pub fn to_day_index(date: JalaliDate) -> DayIndex {
    let elapsed_years = i64::from(date.year) - EPOCH_YEAR;
    let days = 365 * elapsed_years
        + elapsed_years.div_euclid(33) * 8
        + (elapsed_years.rem_euclid(33) + 3) / 4
        + DAYS_BEFORE_MONTH[(date.month - 1) as usize]
        + i64::from(date.day)
        - 1;
    DayIndex(days)
}

/// Exact inverse of [`to_day_index`] over the supported range.
pub fn from_day_index(index: DayIndex) -> JalaliDate {
    let cycles = index.0.div_euclid(DAYS_PER_CYCLE);
    let mut days = index.0.rem_euclid(DAYS_PER_CYCLE);

    let mut year = EPOCH_YEAR + 33 * cycles + 4 * (days / DAYS_PER_BLOCK);
    days %= DAYS_PER_BLOCK;
    // The first year of each 4-year block is the leap year and absorbs
    // day 365; the remaining three years are 365 days each.
    if days >= 366 {
        year += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let mut month = 1u32;
    for len in MONTH_LENGTHS {
        if days < i64::from(len) {
            break;
        }
        days -= i64::from(len);
        month += 1;
    }

    JalaliDate {
        year: year as i32,
        month,
        day: (days + 1) as u32,
    }
}

pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
        && (1..=12).contains(&month)
        && day >= 1
        && day <= month_length(year, month)
}

/// Parses the canonical `"YYYY/MM/DD"` form. Leading zeros are optional and
/// Persian/Arabic-Indic digits are accepted; anything that does not split
/// into exactly three numeric groups, or fails validation, yields `None`.
pub fn parse_date_string(text: &str) -> Option<JalaliDate> {
    let normalized = normalize_digits(text.trim());
    let mut parts = normalized.split('/');
    let year = parse_group(parts.next()?)? as i32;
    let month = parse_group(parts.next()?)?;
    let day = parse_group(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    if !is_valid_date(year, month, day) {
        return None;
    }
    Some(JalaliDate { year, month, day })
}

fn parse_group(group: &str) -> Option<u32> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}

/// Formats as `"YYYY/MM/DD"` with month and day zero-padded to two digits.
pub fn format_date(date: JalaliDate) -> String {
    format!("{:04}/{:02}/{:02}", date.year, date.month, date.day)
}

/// Today's date in the Jalali calendar, from the system clock.
pub fn today() -> JalaliDate {
    from_gregorian(chrono::Local::now().date_naive())
}

/// Converts a Gregorian calendar date to Jalali through the shared absolute
/// day count.
pub fn from_gregorian(date: NaiveDate) -> JalaliDate {
    from_day_index(DayIndex(gregorian_day_number(date) - GREGORIAN_EPOCH_SHIFT))
}

const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn is_gregorian_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// Days since Gregorian 1600-01-01.
fn gregorian_day_number(date: NaiveDate) -> i64 {
    let year = i64::from(date.year()) - 1600;
    let mut days = 365 * year + (year + 3).div_euclid(4) - (year + 99).div_euclid(100)
        + (year + 399).div_euclid(400);
    days += GREGORIAN_DAYS_BEFORE_MONTH[(date.month() - 1) as usize];
    if date.month() > 2 && is_gregorian_leap(i64::from(date.year())) {
        days += 1;
    }
    days + i64::from(date.day()) - 1
}
