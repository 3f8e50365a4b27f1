use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use mobile_ledger::{PhoneRecord, RecordStore};
use tempfile::TempDir;

fn record(i: usize) -> PhoneRecord {
    PhoneRecord::new(format!("Owner{}", i), "Pixel8", "699", "128GB", "2024", "Blue")
}

fn bench_append(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let mut store = RecordStore::new(dir.path().join("Mobile.txt"));
    let mut i = 0;

    c.bench_function("append", |b| {
        b.iter(|| {
            i += 1;
            store.append(record(i)).unwrap();
        })
    });
}

fn bench_open(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Mobile.txt");
    let mut store = RecordStore::new(&path);
    for i in 0..10_000 {
        store.append(record(i)).unwrap();
    }

    c.bench_function("open_10k", |b| {
        b.iter_batched(
            || path.clone(),
            |path| RecordStore::open(path).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_append, bench_open);
criterion_main!(benches);
