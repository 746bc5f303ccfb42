use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A single dated expense. Amounts are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Result<Self, AppError> {
        if !amount.is_finite() {
            return Err(AppError::InvalidInput(format!(
                "amount for {date} is not a finite number"
            )));
        }
        if amount < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "amount for {date} is negative ({amount})"
            )));
        }
        Ok(Self { date, amount })
    }
}

/// Expense as it arrives on the wire, before date parsing and amount validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawExpense {
    pub date: String,
    pub amount: f64,
}

impl TryFrom<RawExpense> for ExpenseRecord {
    type Error = AppError;

    fn try_from(raw: RawExpense) -> Result<Self, Self::Error> {
        let date = parse_expense_date(&raw.date)?;
        ExpenseRecord::new(date, raw.amount)
    }
}

/// Parses `YYYY-MM-DD`, RFC 3339, or a naive ISO-8601 timestamp.
/// Timestamps are truncated to their calendar date.
pub fn parse_expense_date(input: &str) -> Result<NaiveDate, AppError> {
    let s = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(AppError::InvalidInput(format!(
        "unparseable date '{input}' (expected ISO-8601, e.g. 2024-01-31)"
    )))
}

/// The four-record sample used by `folio demo`.
pub fn sample_records() -> Vec<ExpenseRecord> {
    [
        (2024, 1, 1, 250.0),
        (2024, 1, 10, 150.0),
        (2024, 2, 1, 300.0),
        (2024, 2, 15, 100.0),
    ]
    .into_iter()
    .filter_map(|(y, m, d, amount)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| ExpenseRecord { date, amount })
    })
    .collect()
}
