//! Delimited table file sink with a header row.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::calc::{CalcRecord, CalcRow};

use super::{HistorySink, PersistResult};

/// Column order of the history table.
const HEADER: [&str; 5] = ["operation", "operand1", "operand2", "result", "timestamp"];

/// Writes history as comma-delimited rows under a
/// `operation,operand1,operand2,result,timestamp` header.
#[derive(Debug, Clone)]
pub struct CsvHistorySink {
    path: PathBuf,
}

impl CsvHistorySink {
    /// Creates a sink targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for CsvHistorySink {
    fn save(&self, records: &[Arc<CalcRecord>]) -> PersistResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        if records.is_empty() {
            // serialize() emits the header lazily; an empty history still
            // gets one.
            writer.write_record(HEADER)?;
        }
        for record in records {
            writer.serialize(record.to_row())?;
        }
        writer.flush()?;
        Ok(())
    }

    fn load(&self) -> PersistResult<Vec<CalcRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<CalcRow>() {
            let row = row?;
            records.push(CalcRecord::from_row(&row)?);
        }
        Ok(records)
    }
}
