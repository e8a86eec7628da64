use build_info::BuildInfoRecord;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn primitive_round_trip(c: &mut Criterion) {
    let mut record: BuildInfoRecord = BuildInfoRecord::new().expect("generated string fits");
    c.bench_function("set_get_uint64", |b| {
        b.iter(|| {
            record.set_uint64(black_box(42));
            black_box(record.get_uint64())
        })
    });
}

fn string_copies(c: &mut Criterion) {
    let mut record: BuildInfoRecord = BuildInfoRecord::new().expect("generated string fits");
    let mut buf = [0u8; 8];
    c.bench_function("get_string", |b| {
        b.iter(|| black_box(record.get_string(black_box(&mut buf))))
    });
    c.bench_function("set_string", |b| {
        b.iter(|| black_box(record.set_string(black_box(b"TESTA"), 6)))
    });
    c.bench_function("set_string_rejected", |b| {
        b.iter(|| black_box(record.set_string(black_box(b"TESTAB"), 7)))
    });
}

criterion_group!(benches, primitive_round_trip, string_copies);
criterion_main!(benches);
