//! Reference date parsing.
//!
//! Accepts:
//! - `2024-05-10` (ISO calendar date)
//! - `today`, `yesterday`, `tomorrow`
//! - `today - 3d`, `today + 1w`, `yesterday - 2 days`
//!
//! and expands inclusive day ranges for `--from`/`--to` style inputs.

use chrono::{Days, Local, NaiveDate};
use regex::Regex;
use thiserror::Error;

/// Error type for reference date parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date expression: {0}")]
    InvalidExpression(String),

    #[error("invalid duration unit: {0}")]
    InvalidUnit(String),

    #[error("invalid number in expression: {0}")]
    InvalidNumber(String),

    #[error("range start {0} is after range end {1}")]
    ReversedRange(NaiveDate, NaiveDate),
}

/// The current calendar day in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a reference date relative to the current local day.
pub fn parse_reference_date(input: &str) -> Result<NaiveDate, DateError> {
    parse_reference_date_from(input, today())
}

/// Parse a reference date relative to `today`.
pub fn parse_reference_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let normalized = input.to_lowercase();
    let re = Regex::new(r"^([a-z]+)\s*(?:([+-])\s*(\d+)\s*([a-z]+))?$").expect("valid regex");
    let caps = re
        .captures(&normalized)
        .ok_or_else(|| DateError::InvalidExpression(input.to_string()))?;

    let base = match &caps[1] {
        "today" => today,
        "yesterday" => shift(today, '-', 1, input)?,
        "tomorrow" => shift(today, '+', 1, input)?,
        _ => return Err(DateError::InvalidExpression(input.to_string())),
    };

    let (Some(op), Some(amount), Some(unit)) = (caps.get(2), caps.get(3), caps.get(4)) else {
        return Ok(base);
    };

    let amount: u64 = amount
        .as_str()
        .parse()
        .map_err(|_| DateError::InvalidNumber(amount.as_str().to_string()))?;

    let days = match unit.as_str() {
        "d" | "day" | "days" => Some(amount),
        "w" | "week" | "weeks" => amount.checked_mul(7),
        other => return Err(DateError::InvalidUnit(other.to_string())),
    }
    .ok_or_else(|| DateError::InvalidNumber(amount.to_string()))?;

    let op = if op.as_str() == "+" { '+' } else { '-' };
    shift(base, op, days, input)
}

fn shift(date: NaiveDate, op: char, days: u64, input: &str) -> Result<NaiveDate, DateError> {
    let shifted = match op {
        '+' => date.checked_add_days(Days::new(days)),
        _ => date.checked_sub_days(Days::new(days)),
    };
    shifted.ok_or_else(|| DateError::InvalidNumber(input.to_string()))
}

/// Every day from `from` to `to`, both inclusive.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, DateError> {
    if from > to {
        return Err(DateError::ReversedRange(from, to));
    }
    Ok(from.iter_days().take_while(|d| *d <= to).collect())
}
