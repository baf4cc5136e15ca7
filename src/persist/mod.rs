//! History persistence to a delimited row table.

/// Comma-delimited table file sink.
pub mod csv;

use std::sync::Arc;

use crate::{calc::CalcRecord, error::PersistError};

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Durable store for the calculation history.
pub trait HistorySink {
    /// Writes the full record sequence, replacing any prior contents.
    fn save(&self, records: &[Arc<CalcRecord>]) -> PersistResult<()>;

    /// Reads all persisted records, oldest first.
    ///
    /// A missing file yields an empty sequence, not an error.
    fn load(&self) -> PersistResult<Vec<CalcRecord>>;
}
