//! Immutable calculation records and their serialized row form.

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::OperationError, input, op::Operation};

/// Timestamp layout used in persisted rows.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Read-side layout; accepts any fractional-second width.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Legacy rows may omit the fractional seconds entirely.
const TIMESTAMP_FORMAT_NO_FRACTION: &str = "%Y-%m-%dT%H:%M:%S";

/// One executed calculation: operation name, operands, result, timestamp.
///
/// The result is computed exactly once, at construction; the record never
/// changes afterwards. Equality compares operation, operands, and result;
/// the timestamp is not part of record identity.
#[derive(Debug, Clone)]
pub struct CalcRecord {
    operation: String,
    operand1: Decimal,
    operand2: Decimal,
    result: Decimal,
    timestamp: NaiveDateTime,
}

impl CalcRecord {
    /// Executes the named built-in operation on the operands and captures the
    /// result with the current local time.
    pub fn new(
        operation: &str,
        operand1: Decimal,
        operand2: Decimal,
    ) -> Result<Self, OperationError> {
        let op = Operation::from_name(operation)
            .ok_or_else(|| OperationError::Unknown(operation.to_string()))?;
        let result = op.execute(operand1, operand2)?;
        Ok(Self {
            operation: op.name().to_string(),
            operand1,
            operand2,
            result,
            timestamp: now_micros(),
        })
    }

    /// Name of the executed operation.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// First operand.
    pub fn operand1(&self) -> Decimal {
        self.operand1
    }

    /// Second operand.
    pub fn operand2(&self) -> Decimal {
        self.operand2
    }

    /// Result fixed at construction time.
    pub fn result(&self) -> Decimal {
        self.result
    }

    /// Time the calculation was executed (or the persisted time after a
    /// reload).
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Serializes into the row form used by the history table.
    pub fn to_row(&self) -> CalcRow {
        CalcRow {
            operation: self.operation.clone(),
            operand1: self.operand1.to_string(),
            operand2: self.operand2.to_string(),
            result: self.result.to_string(),
            timestamp: self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Rebuilds a record from a row by re-running the operation.
    ///
    /// The stored result is not trusted: a mismatch against the recomputed
    /// value logs a warning and keeps the recomputed one. Unparseable fields
    /// fail with [`OperationError::InvalidRecord`]; precondition violations
    /// propagate as from [`CalcRecord::new`].
    pub fn from_row(row: &CalcRow) -> Result<Self, OperationError> {
        let operand1 = parse_field(&row.operand1)?;
        let operand2 = parse_field(&row.operand2)?;
        let stored_result = parse_field(&row.result)?;

        let mut record = Self::new(&row.operation, operand1, operand2)?;
        record.timestamp = parse_timestamp(&row.timestamp)?;

        if record.result != stored_result {
            tracing::warn!(
                stored = %stored_result,
                computed = %record.result,
                "loaded calculation result differs from computed result"
            );
        }

        Ok(record)
    }

    /// Renders the result rounded to `precision` fractional digits with
    /// trailing zeros stripped.
    pub fn format_result(&self, precision: u32) -> String {
        self.result.round_dp(precision).normalize().to_string()
    }
}

impl PartialEq for CalcRecord {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation
            && self.operand1 == other.operand1
            && self.operand2 == other.operand2
            && self.result == other.result
    }
}

impl Eq for CalcRecord {}

impl fmt::Display for CalcRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.operation, self.operand1, self.operand2, self.result
        )
    }
}

/// Row form persisted to the history table; every field is a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcRow {
    /// Canonical operation name.
    pub operation: String,
    /// First operand as a decimal string.
    pub operand1: String,
    /// Second operand as a decimal string.
    pub operand2: String,
    /// Stored result as a decimal string.
    pub result: String,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

fn parse_field(raw: &str) -> Result<Decimal, OperationError> {
    input::parse_decimal(raw.trim())
        .ok_or_else(|| OperationError::InvalidRecord(format!("bad decimal value: {raw}")))
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, OperationError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_PARSE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT_NO_FRACTION))
        .map_err(|_| OperationError::InvalidRecord(format!("bad timestamp: {raw}")))
}

/// Current local time truncated to whole microseconds, so timestamps survive
/// a serialization round trip unchanged.
pub(crate) fn now_micros() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}
