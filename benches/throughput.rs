use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;

use tallylog::{calc::CalcRecord, core::ledger::HistoryLedger};

fn entry(i: i64) -> CalcRecord {
    CalcRecord::new("add", Decimal::from(i), Decimal::from(i + 1)).expect("entry")
}

fn bench_records(c: &mut Criterion) {
    c.bench_function("ledger_record_5k", |b| {
        b.iter(|| {
            let mut ledger = HistoryLedger::new(256);
            for i in 0..5_000i64 {
                let _ = ledger.record(entry(i));
            }
        });
    });
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    c.bench_function("ledger_undo_redo_500", |b| {
        b.iter(|| {
            let mut ledger = HistoryLedger::new(500);
            for i in 0..500i64 {
                let _ = ledger.record(entry(i));
            }
            while ledger.undo().is_ok() {}
            while ledger.redo().is_ok() {}
        });
    });
}

fn bench_format_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_result");
    let record =
        CalcRecord::new("divide", Decimal::from(1), Decimal::from(7)).expect("divide");

    for precision in [2u32, 10u32, 28u32] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |b, &precision| {
                b.iter(|| {
                    let _ = record.format_result(precision);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_records, bench_undo_redo_cycle, bench_format_result);
criterion_main!(benches);
