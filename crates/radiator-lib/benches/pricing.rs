use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use radiator_lib::catalog::Catalog;
use radiator_lib::pricing::{calculate_total_price, CapMaterial, FinType, PricingOptions};
use radiator_lib::{ConfigEdit, Configuration};
use std::hint::black_box;

static FULL_CONFIGURATION: Lazy<Configuration> = Lazy::new(|| {
    let catalog = Catalog::builtin();
    let preset = catalog.preset_for_model("dmax").expect("dmax preset");
    Configuration::new()
        .with_preset(preset, catalog.model("dmax"), catalog)
        .with_features(catalog.features().to_vec())
});

static PREMIUM_OPTIONS: Lazy<PricingOptions> = Lazy::new(|| PricingOptions {
    fin_type: FinType::VShaped,
    fin_density: 20,
    cap_material: CapMaterial::Copper,
});

fn benchmark_pricing(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    c.bench_function("price_copper_custom", |b| {
        let copper = catalog.material("copper");
        let custom = catalog.size("custom");
        let options = PricingOptions::default();
        b.iter(|| black_box(calculate_total_price(copper, custom, &[], &options)));
    });

    c.bench_function("price_all_features_premium", |b| {
        let brass = catalog.material("brass");
        let large = catalog.size("large");
        let features = catalog.features();
        b.iter(|| black_box(calculate_total_price(brass, large, features, &PREMIUM_OPTIONS)));
    });

    c.bench_function("edit_width_and_reprice", |b| {
        let config = &*FULL_CONFIGURATION;
        b.iter(|| {
            let edited = config.apply(ConfigEdit::Width(black_box(30.0)));
            black_box(edited.total_price())
        });
    });
}

criterion_group!(benches, benchmark_pricing);
criterion_main!(benches);
