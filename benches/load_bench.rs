use std::io::Write;

use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::NamedTempFile;

use uspop_bench::data::{load, Strategy};

const ROWS: usize = 5_000;

/// Benchmark against `uspop.csv` when present, otherwise a generated file.
fn fixture() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    match std::fs::read("uspop.csv") {
        Ok(bytes) => tmp.write_all(&bytes).unwrap(),
        Err(_) => {
            writeln!(tmp, "City,State,Population,Latitude,Longitude").unwrap();
            for i in 0..ROWS {
                let lat = 25.0 + (i % 2400) as f64 * 0.01;
                let long = -125.0 + (i % 5800) as f64 * 0.01;
                writeln!(tmp, "Town {i},XX,{},{lat:.7},{long:.7}", i * 3).unwrap();
            }
        }
    }
    tmp.flush().unwrap();
    tmp
}

fn benchmark_strategies(c: &mut Criterion) {
    let tmp = fixture();
    let path = tmp.path();

    let mut group = c.benchmark_group("load");
    for (name, strategy) in [
        ("lines", Strategy::Lines),
        ("csv_records", Strategy::CsvRecords),
        ("csv_serde", Strategy::CsvSerde),
        ("split_all", Strategy::SplitAll),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| load(std::hint::black_box(path), strategy).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
