//! Interactive calculator core with undoable, persistent history.
//!
//! # Examples
//!
//! In-memory usage with [`core::ledger::HistoryLedger`]:
//! ```
//! use rust_decimal::Decimal;
//! use tallylog::{calc::CalcRecord, core::ledger::HistoryLedger};
//!
//! let mut ledger = HistoryLedger::new(100);
//! let record = CalcRecord::new("add", Decimal::from(2), Decimal::from(3)).expect("add");
//! assert_eq!(record.result(), Decimal::from(5));
//!
//! let _ = ledger.record(record);
//! assert_eq!(ledger.len(), 1);
//! assert!(ledger.undo().is_ok());
//! assert!(ledger.is_empty());
//! assert!(ledger.redo().is_ok());
//! assert_eq!(ledger.len(), 1);
//! ```
//!
//! Full session with observers and persistence:
//! ```no_run
//! use tallylog::{
//!     config::CalculatorConfig,
//!     observe::LoggingObserver,
//!     session::Calculator,
//! };
//!
//! let mut calc = Calculator::new(CalculatorConfig::default()).expect("config");
//! calc.add_observer(Box::new(LoggingObserver));
//! calc.set_operation("add").expect("operation");
//! let result = calc.perform("2", "3").expect("perform");
//! assert_eq!(result.to_string(), "5");
//! calc.save_history().expect("save");
//! ```
#![deny(missing_docs)]

/// Immutable calculation records and serialized rows.
pub mod calc;
/// Session configuration value object.
pub mod config;
/// History ledger and snapshot undo/redo.
pub mod core;
/// Error taxonomy for the calculator core.
pub mod error;
/// Operand parsing and range validation.
pub mod input;
/// Observer trait, set, and built-in observers.
pub mod observe;
/// Arithmetic strategies and the operation registry.
pub mod op;
/// History persistence to a delimited table file.
pub mod persist;
/// Calculator session facade.
pub mod session;
