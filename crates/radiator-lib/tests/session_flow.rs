use radiator_lib::catalog::Catalog;
use radiator_lib::error::Error;
use radiator_lib::pricing::{CapMaterial, FinType};
use radiator_lib::{
    ConfigEdit, ConfiguratorSession, ContactDetails, JsonQuoteSink, PresetComparison,
    QuoteRequest, QuoteSink, Recommendation, Screen,
};

#[test]
fn vehicle_to_quote_walkthrough() {
    let catalog = Catalog::builtin();
    let mut session = ConfiguratorSession::new(catalog);

    session.select_brand("nissan").expect("nissan exists");
    let models: Vec<&str> = catalog
        .models_for_brand("nissan")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(models, vec!["almera", "kicks", "navara"]);

    session.select_model("navara").expect("navara exists");
    session
        .apply_preset_for_selected_model()
        .expect("navara has a preset");
    assert_eq!(session.screen(), Screen::Configuration);

    let seeded_price = session.total_price();
    session.edit(ConfigEdit::FinType(FinType::VShaped));
    let expected = seeded_price + 5.0;
    assert!((session.total_price() - expected).abs() < 1e-9);

    session.toggle_feature("fan").expect("fan exists");
    let expected = seeded_price + 90.0;
    assert!((session.total_price() - expected).abs() < 1e-9);

    let model = session.selected_model().expect("model still selected");
    let comparison = PresetComparison::for_model(catalog, model, session.configuration())
        .expect("comparison available");
    assert_eq!(comparison.current_price, session.total_price());

    let advice = Recommendation::for_configuration(session.configuration());
    assert_eq!(advice.fin_type, FinType::VShaped);

    let contact = ContactDetails::new("Niran", "niran@example.co.th").with_phone("081-234-5678");
    let request = QuoteRequest::new(contact, session.configuration().clone())
        .expect("complete and valid");
    let mut sink = JsonQuoteSink::new(Vec::new());
    sink.submit(&request).expect("delivered");
    let written = String::from_utf8(sink.into_inner()).expect("utf8");
    assert!(written.contains("\"Radiator for Navara\""));
    assert!(written.contains("081-234-5678"));
}

#[test]
fn dimension_edits_leave_a_standard_size_unchanged() {
    let catalog = Catalog::builtin();
    let mut session = ConfiguratorSession::new(catalog);
    session.select_material("aluminum").expect("aluminum");
    session.select_size("small").expect("small");
    let before = session.configuration().clone();
    // 216 sq in of aluminum, the fixed small base price and the 14 fpi surcharge
    assert_eq!(session.total_price(), 238.0);

    session.edit(ConfigEdit::Width(18.0));
    session.edit(ConfigEdit::Thickness(3.0));

    assert_eq!(session.configuration(), &before);
    assert_eq!(session.configuration().size(), catalog.size("small"));
    assert_eq!(session.total_price(), 238.0);
}

#[test]
fn invalid_dimension_is_stored_as_zero() {
    let mut session = ConfiguratorSession::new(Catalog::builtin());
    session.select_material("copper").expect("copper");
    session.select_size("custom").expect("custom");
    session.edit(ConfigEdit::Width(f64::NAN));

    let size = session.configuration().size().expect("size selected");
    assert_eq!(size.width, 0.0);
    // no area: only the fee floor and the 14 fpi surcharge remain
    assert_eq!(session.total_price(), 160.0);
}

#[test]
fn preset_resets_cap_and_keeps_features() {
    let mut session = ConfiguratorSession::new(Catalog::builtin());
    session.show_configuration();
    session.toggle_feature("coating").expect("coating");
    session.edit(ConfigEdit::CapMaterial(CapMaterial::Copper));

    session.select_model("crv").expect("crv");
    session.apply_preset_for_selected_model().expect("preset");

    let config = session.configuration();
    assert_eq!(config.cap_material(), CapMaterial::Plastic);
    assert!(config.has_feature("coating"));
    assert_eq!(config.material().map(|m| m.id.as_str()), Some("copper"));
}

#[test]
fn unknown_ids_are_reported() {
    let mut session = ConfiguratorSession::new(Catalog::builtin());
    assert!(matches!(
        session.select_material("unobtainium"),
        Err(Error::UnknownMaterial { .. })
    ));
    assert!(matches!(
        session.select_brand("ford"),
        Err(Error::UnknownBrand { .. })
    ));
    match session.select_model("navarra") {
        Err(Error::UnknownModel { suggestions, .. }) => {
            assert!(suggestions.contains(&"navara".to_string()))
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(session.revision(), 0);
}
