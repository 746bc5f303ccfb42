//! Expense prediction: record parsing, OLS fitting and 30-day extrapolation.

pub mod loader;
pub mod models;
pub mod predictor;
pub mod regression;
