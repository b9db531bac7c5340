use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spc_img::{build_image, Source, SLOT_SIZE};

fn sources() -> Vec<Source> {
    (0..16)
        .map(|i| {
            // Mix of short, exact and oversized inputs
            let len = match i % 3 {
                0 => SLOT_SIZE / 2,
                1 => SLOT_SIZE,
                _ => SLOT_SIZE + 4096,
            };
            Source::from_bytes(format!("{i}.spc"), vec![i as u8; len])
        })
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let mut out = Vec::with_capacity(spc_img::image_size(16));

    c.bench_function("build_image_16_slots", |b| {
        b.iter(|| {
            out.clear();
            build_image(black_box(&mut out), sources()).expect("Failed to build image");
        })
    });
}

criterion_group!(benches, build_benchmark);
criterion_main!(benches);
