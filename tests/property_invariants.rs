use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use tallylog::{
    calc::{CalcRecord, CalcRow},
    core::ledger::{HistoryLedger, LedgerError},
};

const OPS: [&str; 4] = ["add", "subtract", "multiply", "average"];

#[derive(Debug, Clone)]
enum Action {
    Perform { op: usize, a: i32, b: i32 },
    Undo,
    Redo,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..OPS.len(), -10_000i32..10_000, -10_000i32..10_000)
            .prop_map(|(op, a, b)| Action::Perform { op, a, b }),
        1 => Just(Action::Undo),
        1 => Just(Action::Redo),
    ]
}

fn entry(op: &str, a: i32, b: i32) -> CalcRecord {
    CalcRecord::new(op, Decimal::from(a), Decimal::from(b)).expect("entry")
}

fn snapshot(ledger: &HistoryLedger) -> Vec<Arc<CalcRecord>> {
    ledger.records().to_vec()
}

proptest! {
    #[test]
    fn random_sequences_stay_bounded_and_round_trip_undo_redo(
        actions in prop::collection::vec(action_strategy(), 1..200),
    ) {
        let mut ledger = HistoryLedger::new(8);

        for action in actions {
            match action {
                Action::Perform { op, a, b } => {
                    let _ = ledger.record(entry(OPS[op], a, b));
                }
                Action::Undo => {
                    let _ = ledger.undo();
                }
                Action::Redo => {
                    let _ = ledger.redo();
                }
            }

            prop_assert!(ledger.len() <= ledger.max_size());
        }

        let target = snapshot(&ledger);

        loop {
            match ledger.undo() {
                Ok(()) => {}
                Err(LedgerError::NothingToUndo) => break,
                Err(other) => prop_assert!(false, "unexpected undo error: {other}"),
            }
        }

        loop {
            match ledger.redo() {
                Ok(()) => {}
                Err(LedgerError::NothingToRedo) => break,
                Err(other) => prop_assert!(false, "unexpected redo error: {other}"),
            }
        }

        prop_assert_eq!(snapshot(&ledger), target);
    }

    #[test]
    fn exact_operations_match_decimal_arithmetic(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
    ) {
        let (a_dec, b_dec) = (Decimal::from(a), Decimal::from(b));

        let sum = CalcRecord::new("add", a_dec, b_dec).expect("add");
        prop_assert_eq!(sum.result(), a_dec + b_dec);

        let diff = CalcRecord::new("subtract", a_dec, b_dec).expect("subtract");
        prop_assert_eq!(diff.result(), a_dec - b_dec);

        let product = CalcRecord::new("multiply", a_dec, b_dec).expect("multiply");
        prop_assert_eq!(product.result(), a_dec * b_dec);

        let mean = CalcRecord::new("average", a_dec, b_dec).expect("average");
        prop_assert_eq!(mean.result(), (a_dec + b_dec) / Decimal::TWO);
    }

    #[test]
    fn zero_divisor_never_creates_a_record(
        a in -1_000i64..1_000,
    ) {
        let mut ledger = HistoryLedger::new(8);
        let a_dec = Decimal::from(a);

        prop_assert!(CalcRecord::new("divide", a_dec, Decimal::ZERO).is_err());
        prop_assert!(CalcRecord::new("mod", a_dec, Decimal::ZERO).is_err());
        prop_assert_eq!(ledger.len(), 0);
        prop_assert_eq!(ledger.undo(), Err(LedgerError::NothingToUndo));
    }

    #[test]
    fn row_round_trip_preserves_record_identity(
        op in 0usize..OPS.len(),
        a in -100_000i64..100_000,
        b in -100_000i64..100_000,
    ) {
        let original = CalcRecord::new(OPS[op], Decimal::from(a), Decimal::from(b))
            .expect("record");

        let row: CalcRow = original.to_row();
        let restored = CalcRecord::from_row(&row).expect("from_row");

        prop_assert_eq!(&restored, &original);
        prop_assert_eq!(restored.timestamp(), original.timestamp());
    }
}
