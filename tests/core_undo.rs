use rust_decimal::Decimal;

use tallylog::{
    calc::CalcRecord,
    core::ledger::{HistoryLedger, LedgerError},
};

fn entry(op: &str, a: i64, b: i64) -> CalcRecord {
    CalcRecord::new(op, Decimal::from(a), Decimal::from(b)).expect("entry")
}

#[test]
fn record_appends_in_order() {
    let mut ledger = HistoryLedger::new(100);
    ledger.record(entry("add", 2, 3));
    ledger.record(entry("multiply", 4, 2));

    let records = ledger.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].operation(), "add");
    assert_eq!(records[0].result(), Decimal::from(5));
    assert_eq!(records[1].operation(), "multiply");
    assert_eq!(records[1].result(), Decimal::from(8));
}

#[test]
fn undo_then_redo_restores_exact_sequence() {
    let mut ledger = HistoryLedger::new(100);
    ledger.record(entry("add", 2, 3));
    ledger.record(entry("subtract", 9, 4));
    let before = ledger.records().to_vec();

    ledger.undo().expect("undo");
    assert_eq!(ledger.len(), 1);

    ledger.redo().expect("redo");
    assert_eq!(ledger.records(), &before[..]);
}

#[test]
fn two_undos_and_one_redo_walk_the_history() {
    let mut ledger = HistoryLedger::new(100);
    ledger.record(entry("add", 2, 3));
    ledger.record(entry("multiply", 4, 2));
    ledger.record(entry("subtract", 5, 3));

    ledger.undo().expect("undo 1");
    ledger.undo().expect("undo 2");
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].operation(), "add");
    assert_eq!(ledger.records()[0].result(), Decimal::from(5));

    ledger.redo().expect("redo");
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[1].operation(), "multiply");
    assert_eq!(ledger.records()[1].result(), Decimal::from(8));
}

#[test]
fn empty_stacks_signal_failure_without_changing_state() {
    let mut ledger = HistoryLedger::new(100);
    assert_eq!(ledger.undo(), Err(LedgerError::NothingToUndo));
    assert_eq!(ledger.redo(), Err(LedgerError::NothingToRedo));
    assert!(ledger.is_empty());

    ledger.record(entry("add", 1, 1));
    assert_eq!(ledger.redo(), Err(LedgerError::NothingToRedo));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn record_after_undo_discards_pending_redo() {
    let mut ledger = HistoryLedger::new(100);
    ledger.record(entry("add", 1, 2));
    ledger.record(entry("add", 3, 4));

    ledger.undo().expect("undo");
    assert_eq!(ledger.redo_len(), 1);

    ledger.record(entry("average", 10, 20));
    assert_eq!(ledger.redo_len(), 0);
    assert_eq!(ledger.redo(), Err(LedgerError::NothingToRedo));
}

#[test]
fn ledger_evicts_oldest_at_capacity() {
    let mut ledger = HistoryLedger::new(3);
    for i in 0..5 {
        ledger.record(entry("add", i, 1));
    }

    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.records()[0].operand1(), Decimal::from(2));
    assert_eq!(ledger.records()[2].operand1(), Decimal::from(4));
}

#[test]
fn undo_restores_evicted_record() {
    let mut ledger = HistoryLedger::new(2);
    ledger.record(entry("add", 1, 0));
    ledger.record(entry("add", 2, 0));
    ledger.record(entry("add", 3, 0));
    assert_eq!(ledger.records()[0].operand1(), Decimal::from(2));

    ledger.undo().expect("undo");
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[0].operand1(), Decimal::from(1));
}

#[test]
fn clear_drops_records_and_both_stacks() {
    let mut ledger = HistoryLedger::new(100);
    ledger.record(entry("add", 1, 2));
    ledger.record(entry("add", 3, 4));
    ledger.undo().expect("undo");

    ledger.clear();
    assert!(ledger.is_empty());
    assert_eq!(ledger.undo_len(), 0);
    assert_eq!(ledger.redo_len(), 0);
    assert_eq!(ledger.undo(), Err(LedgerError::NothingToUndo));
    assert_eq!(ledger.redo(), Err(LedgerError::NothingToRedo));
}

#[test]
fn replace_installs_new_baseline() {
    let mut ledger = HistoryLedger::new(100);
    ledger.record(entry("add", 1, 2));
    ledger.undo().expect("undo");

    ledger.replace(vec![entry("multiply", 6, 7), entry("mod", 10, 3)]);
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.undo_len(), 0);
    assert_eq!(ledger.redo_len(), 0);
    assert_eq!(ledger.records()[0].result(), Decimal::from(42));
    assert_eq!(ledger.records()[1].result(), Decimal::from(1));
}
