use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::expense::models::{ExpenseRecord, RawExpense};

/// Parses a JSON array of `{ "date": ..., "amount": ... }` objects.
///
/// Any malformed entry rejects the whole input; nothing is coerced or skipped.
pub fn parse_expenses_json(input: &str) -> Result<Vec<ExpenseRecord>, AppError> {
    let raw: Vec<RawExpense> = serde_json::from_str(input)
        .map_err(|e| AppError::InvalidInput(format!("malformed expense data: {e}")))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| {
            ExpenseRecord::try_from(r).map_err(|e| match e {
                AppError::InvalidInput(msg) => AppError::InvalidInput(format!("record {i}: {msg}")),
                other => other,
            })
        })
        .collect()
}

pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRecord>, AppError> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_expenses_json(&content)?;
    info!("Loaded {} expense records from {}", records.len(), path.display());
    Ok(records)
}
