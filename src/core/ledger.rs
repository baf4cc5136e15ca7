use std::sync::Arc;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::calc::{CalcRecord, now_micros};

/// Undo/redo failure signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The undo stack is empty.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The redo stack is empty.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Immutable snapshot of the ledger's records at one point in time.
///
/// Records are shared by reference across snapshots; only the sequence is
/// copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    records: Vec<Arc<CalcRecord>>,
    taken_at: NaiveDateTime,
}

impl Memento {
    fn capture(records: &[Arc<CalcRecord>]) -> Self {
        Self {
            records: records.to_vec(),
            taken_at: now_micros(),
        }
    }

    /// Snapshot contents, oldest first.
    pub fn records(&self) -> &[Arc<CalcRecord>] {
        &self.records
    }

    /// Time the snapshot was captured.
    pub fn taken_at(&self) -> NaiveDateTime {
        self.taken_at
    }
}

/// Ordered, size-bounded history of calculations with snapshot undo/redo.
///
/// Insertion order is chronological order. Every mutation through
/// [`HistoryLedger::record`] first checkpoints the current sequence, so any
/// run of undos followed by the same number of redos restores the exact
/// record sequence.
#[derive(Debug)]
pub struct HistoryLedger {
    records: Vec<Arc<CalcRecord>>,
    undo: Vec<Memento>,
    redo: Vec<Memento>,
    max_size: usize,
}

impl HistoryLedger {
    /// Creates an empty ledger holding at most `max_size` records.
    pub fn new(max_size: usize) -> Self {
        Self {
            records: Vec::new(),
            undo: Vec::new(),
            redo: Vec::new(),
            max_size,
        }
    }

    /// Appends a record, snapshotting the prior sequence for undo.
    ///
    /// Pending redo snapshots are discarded; when the bound is exceeded the
    /// oldest record is evicted. Returns the shared handle of the appended
    /// record.
    pub fn record(&mut self, record: CalcRecord) -> Arc<CalcRecord> {
        self.undo.push(Memento::capture(&self.records));
        self.redo.clear();

        let record = Arc::new(record);
        self.records.push(Arc::clone(&record));
        if self.records.len() > self.max_size {
            self.records.remove(0);
        }
        record
    }

    /// Restores the most recent undo snapshot, checkpointing the current
    /// sequence for redo.
    pub fn undo(&mut self) -> Result<(), LedgerError> {
        let memento = self.undo.pop().ok_or(LedgerError::NothingToUndo)?;
        self.redo.push(Memento::capture(&self.records));
        self.records = memento.records;
        Ok(())
    }

    /// Restores the most recent redo snapshot, checkpointing the current
    /// sequence for undo.
    pub fn redo(&mut self) -> Result<(), LedgerError> {
        let memento = self.redo.pop().ok_or(LedgerError::NothingToRedo)?;
        self.undo.push(Memento::capture(&self.records));
        self.records = memento.records;
        Ok(())
    }

    /// Drops all records and both snapshot stacks. Not undoable.
    pub fn clear(&mut self) {
        self.records.clear();
        self.undo.clear();
        self.redo.clear();
    }

    /// Installs a loaded record sequence as the new baseline.
    ///
    /// Both snapshot stacks are cleared; replayed state has no in-session
    /// past to step back into.
    pub fn replace(&mut self, records: Vec<CalcRecord>) {
        self.records = records.into_iter().map(Arc::new).collect();
        self.undo.clear();
        self.redo.clear();
    }

    /// Current records, oldest first.
    pub fn records(&self) -> &[Arc<CalcRecord>] {
        &self.records
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Depth of the undo stack.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Depth of the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Configured record bound.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
