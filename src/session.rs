//! Calculator session facade tying the core pieces together.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    calc::CalcRecord,
    config::CalculatorConfig,
    core::ledger::HistoryLedger,
    error::{CalcResult, ConfigError, OperationError},
    input,
    observe::{HistoryObserver, ObserverContext, ObserverId, ObserverSet},
    op::{Operation, OperationRegistry},
    persist::{HistorySink, csv::CsvHistorySink},
};

/// Single-writer calculator session owning the ledger, registry, observers,
/// and persistence sink.
///
/// One calculation is processed start to finish (validate, execute, record,
/// notify, optionally persist) before the next is accepted. Callers that
/// embed a session in a concurrent environment must serialize access
/// externally.
pub struct Calculator {
    config: CalculatorConfig,
    registry: OperationRegistry,
    ledger: HistoryLedger,
    observers: ObserverSet,
    sink: CsvHistorySink,
    strategy: Option<Operation>,
}

impl Calculator {
    /// Validates `config` and opens a session with an empty ledger.
    pub fn new(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sink = CsvHistorySink::new(&config.history_file);
        let ledger = HistoryLedger::new(config.max_history_size);
        Ok(Self {
            registry: OperationRegistry::new(),
            ledger,
            observers: ObserverSet::new(),
            sink,
            strategy: None,
            config,
        })
    }

    /// Opens a session and loads any existing history file.
    ///
    /// A failed load logs a warning and starts with an empty ledger; a
    /// missing file is not a failure.
    pub fn with_saved_history(config: CalculatorConfig) -> Result<Self, ConfigError> {
        let mut session = Self::new(config)?;
        if let Err(err) = session.load_history() {
            tracing::warn!(error = %err, "could not load existing history");
        }
        Ok(session)
    }

    /// Session configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Read access to the underlying ledger.
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// Mutable access to the operation registry, for registering additional
    /// names.
    pub fn registry_mut(&mut self) -> &mut OperationRegistry {
        &mut self.registry
    }

    /// Selects the operation applied by the next [`Calculator::perform`].
    pub fn set_operation(&mut self, name: &str) -> Result<(), OperationError> {
        let op = self.registry.create(name)?;
        self.strategy = Some(op);
        tracing::info!(operation = op.name(), "operation selected");
        Ok(())
    }

    /// Validates the raw operands, runs the selected operation, records the
    /// calculation, and notifies observers.
    ///
    /// Validation and execution failures leave the ledger untouched. An
    /// observer failure propagates after the record was already appended and
    /// its undo snapshot pushed: the calculation stands, its side effects may
    /// not.
    pub fn perform(&mut self, a: &str, b: &str) -> CalcResult<Decimal> {
        let op = self.strategy.ok_or(OperationError::NotSet)?;
        let a = input::validate_number(a, &self.config)?;
        let b = input::validate_number(b, &self.config)?;

        let record = CalcRecord::new(op.name(), a, b)?;
        let result = record.result();
        let record = self.ledger.record(record);

        let ctx = ObserverContext {
            config: &self.config,
            records: self.ledger.records(),
        };
        self.observers.notify(&record, &ctx)?;
        Ok(result)
    }

    /// Undoes the last recorded calculation. False when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        self.ledger.undo().is_ok()
    }

    /// Redoes the last undone calculation. False when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        self.ledger.redo().is_ok()
    }

    /// Writes the current history to the configured file.
    pub fn save_history(&self) -> CalcResult<()> {
        self.sink.save(self.ledger.records())?;
        tracing::info!(path = %self.sink.path().display(), "history saved");
        Ok(())
    }

    /// Replaces the ledger contents with the persisted history.
    ///
    /// A missing file loads as empty. Undo/redo snapshots are discarded.
    pub fn load_history(&mut self) -> CalcResult<()> {
        let records = self.sink.load()?;
        self.ledger.replace(records);
        tracing::info!(count = self.ledger.len(), "history loaded");
        Ok(())
    }

    /// Drops all records and undo/redo snapshots.
    pub fn clear_history(&mut self) {
        self.ledger.clear();
        tracing::info!("history cleared");
    }

    /// Renders a record's result with the configured display precision.
    pub fn format_result(&self, record: &CalcRecord) -> String {
        record.format_result(self.config.precision)
    }

    /// One formatted line per record, oldest first.
    pub fn show_history(&self) -> Vec<String> {
        self.ledger
            .records()
            .iter()
            .map(|record| record.to_string())
            .collect()
    }

    /// Current ledger contents, oldest first.
    pub fn history(&self) -> &[Arc<CalcRecord>] {
        self.ledger.records()
    }

    /// Registers an observer at the end of the notification order.
    pub fn add_observer(&mut self, observer: Box<dyn HistoryObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    /// Removes a registered observer; returns false for an unknown id.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }
}
