// Calendar arithmetic module.
//
// All day-difference math in the engine goes through the absolute day index
// defined here, so subtracting two dates is a single integer subtraction
// rather than calendar-aware arithmetic.
pub mod jalali;
