use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tirscan_core::config::PredictorConfig;
use tirscan_core::expression::ExpressionTable;
use tirscan_core::spacing::predict_spacing;

fn bench_predict_spacing(c: &mut Criterion) {
    let table = ExpressionTable::from_entries([
        ("AAGGAG".to_string(), 1.5),
        ("AGGAGG".to_string(), 2.9),
        ("GGAGGA".to_string(), 2.1),
        ("AGGAGA".to_string(), 1.2),
    ])
    .unwrap();
    let config = PredictorConfig::default();
    let leader = "ACGTACGTACGTAGGAGGTTACGTAATG";

    c.bench_function("predict_spacing", |b| {
        b.iter(|| predict_spacing(black_box(leader), &table, &config))
    });
}

criterion_group!(benches, bench_predict_spacing);
criterion_main!(benches);
