//! Session configuration value object.

use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::error::ConfigError;

/// Immutable settings loaded once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Maximum number of records kept in the ledger; the oldest record is
    /// evicted beyond this bound.
    pub max_history_size: usize,
    /// Fractional digits used when formatting results for display.
    pub precision: u32,
    /// Largest accepted operand magnitude.
    pub max_input_value: Decimal,
    /// Persist the full history after every recorded calculation.
    pub auto_save: bool,
    /// History table file location.
    pub history_file: PathBuf,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_history_size: 1000,
            precision: 10,
            max_input_value: Decimal::MAX,
            auto_save: true,
            history_file: PathBuf::from("history/calculator_history.csv"),
        }
    }
}

impl CalculatorConfig {
    /// Rejects non-positive bounds. Called once at session setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history_size == 0 {
            return Err(ConfigError::HistorySizeNotPositive);
        }
        if self.precision == 0 {
            return Err(ConfigError::PrecisionNotPositive);
        }
        if self.max_input_value <= Decimal::ZERO {
            return Err(ConfigError::MaxInputNotPositive);
        }
        Ok(())
    }
}
