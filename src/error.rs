//! Error taxonomy shared across the calculator core.

use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid configuration detected at session setup. Fatal to construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_history_size` was zero.
    #[error("max_history_size must be positive")]
    HistorySizeNotPositive,
    /// `precision` was zero.
    #[error("precision must be positive")]
    PrecisionNotPositive,
    /// `max_input_value` was zero or negative.
    #[error("max_input_value must be positive")]
    MaxInputNotPositive,
}

/// Malformed or out-of-range operand input. No state is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw value did not parse as a decimal number.
    #[error("invalid number format: {0}")]
    InvalidNumber(String),
    /// The value's magnitude exceeds the configured maximum.
    #[error("value exceeds maximum allowed: {0}")]
    AboveLimit(Decimal),
}

/// Unknown operation name or a precondition violation. A failed calculation
/// never becomes a history record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// No registration exists for the requested name.
    #[error("unknown operation: {0}")]
    Unknown(String),
    /// No operation was selected before performing a calculation.
    #[error("operation not set")]
    NotSet,
    /// Division with a zero divisor.
    #[error("division by zero is not allowed")]
    DivisionByZero,
    /// Modulus with a zero divisor.
    #[error("modulus by zero is not allowed")]
    ModulusByZero,
    /// Power with a negative exponent.
    #[error("negative exponents are not supported")]
    NegativeExponent,
    /// Root of a negative base.
    #[error("cannot calculate root of negative number")]
    NegativeRootBase,
    /// Root with a zero index.
    #[error("zero root is undefined")]
    ZeroRootIndex,
    /// Overflow or a non-representable intermediate value.
    #[error("calculation failed: {0}")]
    Arithmetic(String),
    /// A serialized row was missing fields or held unparseable values.
    #[error("invalid calculation data: {0}")]
    InvalidRecord(String),
}

/// I/O or serialization failure during save/load. In-memory history state is
/// never affected.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying file I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed table structure in the history file.
    #[error("history table error: {0}")]
    Table(#[from] csv::Error),
    /// A row parsed but did not reconstruct into a valid record.
    #[error(transparent)]
    Record(#[from] OperationError),
}

/// Any failure surfaced by a calculator session operation.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Session setup rejected the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An operand failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The calculation itself failed.
    #[error(transparent)]
    Operation(#[from] OperationError),
    /// Saving or loading history failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Result alias for session-level operations.
pub type CalcResult<T> = Result<T, CalcError>;
