use std::io::Write;
use std::path::PathBuf;

use radiator_lib::catalog::{load_features, load_materials, Catalog, SizeKind};
use radiator_lib::error::Error;
use radiator_lib::pricing::{calculate_total_price, PricingOptions};
use radiator_lib::Configuration;
use tempfile::NamedTempFile;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[test]
fn loads_material_fixture_into_catalog() {
    let catalog = Catalog::builtin()
        .clone()
        .with_materials_from_path(&fixtures_dir().join("materials.csv"))
        .expect("fixture should load");

    assert_eq!(catalog.materials().len(), 4);
    let stainless = catalog.material("Stainless").expect("stainless present");
    assert_eq!(stainless.price_per_square_inch, 1.10);
    assert!(stainless.image.is_empty());

    // sizes and vehicles are untouched
    assert_eq!(catalog.sizes().len(), Catalog::builtin().sizes().len());
    assert!(catalog.preset_for_model("camry").is_some());
}

#[test]
fn overridden_prices_flow_into_pricing() {
    let catalog = Catalog::builtin()
        .clone()
        .with_materials_from_path(&fixtures_dir().join("materials.csv"))
        .expect("materials load")
        .with_features_from_path(&fixtures_dir().join("features.csv"))
        .expect("features load");

    // 18 * 12 * 0.55 = 118.8, + 120 base, + 90 fan
    let fan = catalog.feature("fan").expect("fan").clone();
    let total = calculate_total_price(
        catalog.material("aluminum"),
        catalog.size("small"),
        &[fan],
        &PricingOptions::default(),
    );
    assert_eq!(total, 328.8);
    assert!(catalog.feature("cap").is_none());
}

#[test]
fn rejects_duplicate_material_ids_case_insensitive() {
    let csv = "id,name,description,price_per_square_inch\n".to_string()
        + "Copper,Copper,,0.8\n"
        + "copper,Copper again,,0.9\n";

    let err = load_materials(csv.as_bytes()).expect_err("should reject duplicates");
    match err {
        Error::DuplicateCatalogId { id } => assert_eq!(id, "copper"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_negative_feature_price() {
    let csv = "id,name,description,price\nfan,Fan,,-5\n";
    let err = load_features(csv.as_bytes()).expect_err("should reject negative price");
    match err {
        Error::CatalogValidation { message } => assert!(message.contains("price")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn loads_materials_from_temporary_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "id , name , description , price_per_square_inch").expect("write");
    writeln!(file, " titanium , Titanium , Exotic , 2.5 ").expect("write");

    let catalog = Catalog::default()
        .with_materials_from_path(file.path())
        .expect("temp csv loads");
    let titanium = catalog.material("titanium").expect("trimmed id");
    assert_eq!(titanium.name, "Titanium");
    assert_eq!(titanium.price_per_square_inch, 2.5);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = Catalog::default()
        .with_materials_from_path(&fixtures_dir().join("does-not-exist.csv"))
        .expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn preset_keeps_current_material_when_recommendation_is_not_offered() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "id,name,description,price_per_square_inch").expect("write");
    writeln!(file, "aluminum,Aluminum,,0.5").expect("write");
    writeln!(file, "copper,Copper,,0.85").expect("write");

    let catalog = Catalog::builtin()
        .clone()
        .with_materials_from_path(file.path())
        .expect("temp csv loads");
    assert!(catalog.material("brass").is_none());

    let preset = catalog.preset_for_model("camry").expect("camry preset");
    assert_eq!(preset.recommended_material, "brass");

    let aluminum = catalog.material("aluminum").expect("aluminum").clone();
    let configuration = Configuration::new().with_material(aluminum);
    let applied = configuration.with_preset(preset, catalog.model("camry"), &catalog);

    let material = applied.material().expect("material kept");
    assert_eq!(material.id, "aluminum");
    let size = applied.size().expect("preset size");
    assert_eq!(size.kind, SizeKind::Preset);
    assert_eq!((size.width, size.height, size.thickness), (26.0, 16.0, 2.2));
    assert_eq!(applied.fin_type(), preset.fin_type);
    assert_eq!(applied.fin_density(), 14);
}
