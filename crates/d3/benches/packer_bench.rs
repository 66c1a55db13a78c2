//! Benchmarks for shelf packing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shelfpack_d3::{
    CompatibilityRules, IncrementalPacker, Item, Packer, PackerConfig, ShelfPacker, SplitPolicy,
};

fn mixed_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let w = 5.0 + (i % 7) as f64 * 3.0;
            let h = 4.0 + (i % 5) as f64 * 2.0;
            let d = 6.0 + (i % 3) as f64 * 4.0;
            let category = if i % 4 == 0 { "toxic" } else { "normal" };
            Item::new(w, h, d, category)
        })
        .collect()
}

fn rules() -> CompatibilityRules {
    CompatibilityRules::new().with_rule("toxic", ["toxic"])
}

fn packer_benchmark(c: &mut Criterion) {
    let items = mixed_items(200);
    let config = PackerConfig::new(100.0, 50.0, 60.0, 8);

    c.bench_function("pack_200_mixed_items", |b| {
        b.iter(|| {
            let mut packer = ShelfPacker::new(config.clone(), rules()).unwrap();
            packer.add_items(black_box(items.iter().cloned())).unwrap();
            black_box(packer.pack())
        })
    });

    let guillotine = config.clone().with_split_policy(SplitPolicy::Guillotine);
    c.bench_function("pack_200_mixed_items_guillotine", |b| {
        b.iter(|| {
            let mut packer = ShelfPacker::new(guillotine.clone(), rules()).unwrap();
            packer.add_items(black_box(items.iter().cloned())).unwrap();
            black_box(packer.pack())
        })
    });

    let mut seed = ShelfPacker::new(config.clone(), rules()).unwrap();
    seed.add_items(items.iter().take(150).cloned()).unwrap();
    let snapshot = seed.pack().to_snapshot();
    let new_items: Vec<Item> = items.iter().skip(150).cloned().collect();

    c.bench_function("resume_and_pack_50_items", |b| {
        b.iter(|| {
            let mut packer =
                IncrementalPacker::new(config.clone(), rules(), Some(snapshot.clone())).unwrap();
            packer.add_items(black_box(new_items.iter().cloned())).unwrap();
            black_box(packer.pack())
        })
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
