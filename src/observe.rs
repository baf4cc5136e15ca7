//! Synchronous observers notified after each recorded calculation.

use std::sync::Arc;

use crate::{
    calc::CalcRecord,
    config::CalculatorConfig,
    error::CalcError,
    persist::{HistorySink, csv::CsvHistorySink},
};

/// Session state shared with observers during notification.
pub struct ObserverContext<'a> {
    /// Session configuration.
    pub config: &'a CalculatorConfig,
    /// Current ledger contents, oldest first, including the new record.
    pub records: &'a [Arc<CalcRecord>],
}

/// Subscriber invoked synchronously after each recorded calculation.
pub trait HistoryObserver {
    /// Handles a newly recorded calculation.
    ///
    /// A failure aborts notification of the remaining observers and surfaces
    /// to the caller; the record itself stays in the ledger.
    fn update(&mut self, record: &CalcRecord, ctx: &ObserverContext<'_>) -> Result<(), CalcError>;
}

/// Handle for removing a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

/// Ordered observer list; notification order is registration order.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<(ObserverId, Box<dyn HistoryObserver>)>,
    next_id: u64,
}

impl ObserverSet {
    /// Creates an empty observer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer at the end of the notification order.
    pub fn add(&mut self, observer: Box<dyn HistoryObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes a registered observer; returns false for an unknown id.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(other, _)| *other == id) {
            Some(pos) => {
                self.observers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Notifies observers in registration order, stopping at the first
    /// failure.
    pub fn notify(
        &mut self,
        record: &CalcRecord,
        ctx: &ObserverContext<'_>,
    ) -> Result<(), CalcError> {
        for (_, observer) in &mut self.observers {
            observer.update(record, ctx)?;
        }
        Ok(())
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// Logs every recorded calculation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl HistoryObserver for LoggingObserver {
    fn update(&mut self, record: &CalcRecord, _ctx: &ObserverContext<'_>) -> Result<(), CalcError> {
        tracing::info!(
            operation = record.operation(),
            operand1 = %record.operand1(),
            operand2 = %record.operand2(),
            result = %record.result(),
            "calculation performed"
        );
        Ok(())
    }
}

/// Persists the full history after each calculation when the session's
/// auto-save flag is enabled.
#[derive(Debug, Clone)]
pub struct AutoSaveObserver {
    sink: CsvHistorySink,
}

impl AutoSaveObserver {
    /// Creates an auto-save observer writing through `sink`.
    pub fn new(sink: CsvHistorySink) -> Self {
        Self { sink }
    }
}

impl HistoryObserver for AutoSaveObserver {
    fn update(&mut self, _record: &CalcRecord, ctx: &ObserverContext<'_>) -> Result<(), CalcError> {
        if !ctx.config.auto_save {
            return Ok(());
        }
        self.sink.save(ctx.records)?;
        tracing::info!(path = %self.sink.path().display(), "history auto-saved");
        Ok(())
    }
}
