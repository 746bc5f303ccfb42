//! Expense prediction. Fits a line over day offsets and extrapolates past the last observation.
//!
//! Flow: validate → day offsets from the earliest date → OLS fit →
//!       evaluate at `max_offset + horizon` → clamp at zero.
//!
//! Only the final prediction is clamped. The fitted coefficients are reported as-is.

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::expense::models::ExpenseRecord;
use crate::expense::regression::LinearModel;

/// Days past the latest observation at which the line is evaluated.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Full outcome of one prediction call.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub model: LinearModel,
    pub sample_count: usize,
    /// Offset of the latest record, in days since the earliest one.
    pub last_offset: i64,
    pub target_offset: i64,
    /// Line value at `target_offset`, before clamping. May be negative.
    pub raw: f64,
    pub predicted: f64,
}

/// Stateless predictor. Each call fits a fresh model and discards it.
#[derive(Debug, Clone, Copy)]
pub struct ExpensePredictor {
    horizon_days: u32,
}

impl Default for ExpensePredictor {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl ExpensePredictor {
    pub fn with_horizon(horizon_days: u32) -> Self {
        Self { horizon_days }
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn forecast(&self, records: &[ExpenseRecord]) -> Result<Forecast, AppError> {
        let min_date = records
            .iter()
            .map(|r| r.date)
            .min()
            .ok_or_else(|| {
                AppError::InvalidInput("at least one expense record is required".to_string())
            })?;

        let offsets: Vec<i64> = records
            .iter()
            .map(|r| (r.date - min_date).num_days())
            .collect();
        let samples: Vec<(f64, f64)> = offsets
            .iter()
            .zip(records)
            .map(|(offset, r)| (*offset as f64, r.amount))
            .collect();

        let model = LinearModel::fit(&samples)
            .ok_or_else(|| AppError::InvalidInput("no samples to fit".to_string()))?;

        let last_offset = offsets.iter().copied().max().unwrap_or(0);
        let target_offset = last_offset + i64::from(self.horizon_days);
        let raw = model.predict(target_offset as f64);
        if !(model.slope.is_finite() && model.intercept.is_finite() && raw.is_finite()) {
            return Err(AppError::InvalidInput(
                "amounts too large to fit: regression overflowed".to_string(),
            ));
        }
        let predicted = raw.max(0.0);

        debug!(
            "Fitted expense line: slope={:.6}, intercept={:.6}, samples={}, target_offset={}, raw={:.4}",
            model.slope,
            model.intercept,
            samples.len(),
            target_offset,
            raw
        );

        Ok(Forecast {
            model,
            sample_count: samples.len(),
            last_offset,
            target_offset,
            raw,
            predicted,
        })
    }

    /// Predicted amount `horizon_days` after the latest record; never negative.
    pub fn predict_next(&self, records: &[ExpenseRecord]) -> Result<f64, AppError> {
        self.forecast(records).map(|f| f.predicted)
    }
}

/// Predicts with the default 30-day horizon.
pub fn predict_next(records: &[ExpenseRecord]) -> Result<f64, AppError> {
    ExpensePredictor::default().predict_next(records)
}
