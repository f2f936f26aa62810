use std::sync::Arc;

use canonical::{IdentityScript, Normalizer, StopwordSet, FALLBACK_STOPWORDS};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new(Arc::new(StopwordSet::new(FALLBACK_STOPWORDS)))
        .with_script_converter(Arc::new(IdentityScript));
    let mut group = c.benchmark_group("normalize");

    for repeat in [1usize, 4, 16].iter() {
        let text = "国家重点西湖风景名胜区，北京市朝阳区！".repeat(*repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("repeat_{repeat}"), |b| {
            b.iter(|| normalizer.normalize(black_box(&text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
