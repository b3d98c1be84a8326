//! Presentation-layer state for one configurator session.
//!
//! The session owns the current [`Configuration`], the vehicle selection and the
//! screen being shown. Every change replaces the configuration and recomputes
//! the price before returning, so the price is never stale.

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{CarBrand, CarModel, Catalog, RadiatorPreset};
use crate::configuration::{ConfigEdit, Configuration};
use crate::error::{Error, Result};

/// The two views a session can be on. Switching between them is unguarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    VehicleSelection,
    Configuration,
}

/// One user's configurator session over a shared catalog.
#[derive(Debug, Clone)]
pub struct ConfiguratorSession<'a> {
    catalog: &'a Catalog,
    screen: Screen,
    brand: Option<&'a CarBrand>,
    model: Option<&'a CarModel>,
    configuration: Configuration,
    total_price: f64,
    revision: u64,
}

impl<'a> ConfiguratorSession<'a> {
    /// Fresh session on the vehicle selection screen with an empty configuration.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::VehicleSelection,
            brand: None,
            model: None,
            configuration: Configuration::new(),
            total_price: 0.0,
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_brand(&self) -> Option<&'a CarBrand> {
        self.brand
    }

    pub fn selected_model(&self) -> Option<&'a CarModel> {
        self.model
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Price of the current configuration.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Incremented whenever the configuration is replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Preset for the selected model, if a model is selected and has one.
    pub fn selected_preset(&self) -> Option<&'a RadiatorPreset> {
        self.model
            .and_then(|model| self.catalog.preset_for_model(&model.id))
    }

    pub fn show_vehicle_selection(&mut self) {
        self.screen = Screen::VehicleSelection;
    }

    pub fn show_configuration(&mut self) {
        self.screen = Screen::Configuration;
    }

    /// Select a brand. Any previously selected model is cleared.
    pub fn select_brand(&mut self, brand_id: &str) -> Result<()> {
        let brand = self.catalog.require_brand(brand_id)?;
        self.brand = Some(brand);
        self.model = None;
        Ok(())
    }

    /// Select a model. The brand follows the model.
    pub fn select_model(&mut self, model_id: &str) -> Result<()> {
        let model = self.catalog.require_model(model_id)?;
        self.brand = self.catalog.brand(&model.brand_id);
        self.model = Some(model);
        Ok(())
    }

    /// Forget the vehicle selection and return to the vehicle screen.
    pub fn clear_vehicle(&mut self) {
        self.brand = None;
        self.model = None;
        self.screen = Screen::VehicleSelection;
    }

    /// Apply the selected model's preset and move to the configuration screen.
    pub fn apply_preset_for_selected_model(&mut self) -> Result<()> {
        let model = self.model.ok_or(Error::NoModelSelected)?;
        let preset = self
            .catalog
            .preset_for_model(&model.id)
            .ok_or_else(|| Error::PresetNotFound {
                model_id: model.id.clone(),
            })?;

        info!(model = %model.id, preset = %preset.id, "applying radiator preset");
        let next = self
            .configuration
            .with_preset(preset, Some(model), self.catalog);
        self.replace(next);
        self.screen = Screen::Configuration;
        Ok(())
    }

    pub fn select_material(&mut self, material_id: &str) -> Result<()> {
        let material = self.catalog.require_material(material_id)?.clone();
        let next = self.configuration.with_material(material);
        self.replace(next);
        Ok(())
    }

    pub fn select_size(&mut self, size_id: &str) -> Result<()> {
        let size = self.catalog.require_size(size_id)?.clone();
        let next = self.configuration.with_size(size);
        self.replace(next);
        Ok(())
    }

    pub fn toggle_feature(&mut self, feature_id: &str) -> Result<()> {
        let feature = self.catalog.require_feature(feature_id)?;
        let next = self.configuration.with_feature_toggled(feature);
        self.replace(next);
        Ok(())
    }

    pub fn edit(&mut self, edit: ConfigEdit) {
        let next = self.configuration.apply(edit);
        self.replace(next);
    }

    /// Discard all state, as when the user navigates away.
    pub fn reset(&mut self) {
        *self = Self::new(self.catalog);
    }

    fn replace(&mut self, next: Configuration) {
        self.total_price = next.total_price();
        self.configuration = next;
        self.revision += 1;
        debug!(
            revision = self.revision,
            total_price = self.total_price,
            "configuration replaced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{CapMaterial, FinType};

    #[test]
    fn starts_on_vehicle_selection_with_zero_price() {
        let session = ConfiguratorSession::new(Catalog::builtin());
        assert_eq!(session.screen(), Screen::VehicleSelection);
        assert_eq!(session.total_price(), 0.0);
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn changing_brand_clears_model() {
        let mut session = ConfiguratorSession::new(Catalog::builtin());
        session.select_model("civic").expect("civic exists");
        assert_eq!(
            session.selected_brand().map(|b| b.id.as_str()),
            Some("honda")
        );
        session.select_brand("mazda").expect("mazda exists");
        assert!(session.selected_model().is_none());
    }

    #[test]
    fn applying_preset_switches_screen_and_prices() {
        let mut session = ConfiguratorSession::new(Catalog::builtin());
        session.select_model("camry").expect("camry exists");
        session
            .apply_preset_for_selected_model()
            .expect("camry has preset");
        assert_eq!(session.screen(), Screen::Configuration);
        assert_eq!(session.configuration().fin_type(), FinType::Wavy);
        let price = session.configuration().total_price();
        assert!(price > 0.0);
        assert_eq!(session.total_price(), price);
    }

    #[test]
    fn preset_without_model_is_an_error() {
        let mut session = ConfiguratorSession::new(Catalog::builtin());
        let err = session
            .apply_preset_for_selected_model()
            .expect_err("no model selected");
        assert!(matches!(err, Error::NoModelSelected));
    }

    #[test]
    fn price_tracks_every_edit() {
        let mut session = ConfiguratorSession::new(Catalog::builtin());
        session.select_material("copper").expect("copper");
        assert_eq!(session.total_price(), 0.0);
        session.select_size("custom").expect("custom");
        // 496.15 at baseline plus 10 for the editor's 14 fpi starting density
        assert_eq!(session.total_price(), 506.15);
        session.edit(ConfigEdit::CapMaterial(CapMaterial::Brass));
        assert_eq!(session.total_price(), 521.15);
        assert_eq!(session.revision(), 3);
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = ConfiguratorSession::new(Catalog::builtin());
        session.select_model("dmax").expect("dmax");
        session.apply_preset_for_selected_model().expect("preset");
        session.reset();
        assert_eq!(session.screen(), Screen::VehicleSelection);
        assert!(session.selected_model().is_none());
        assert!(!session.configuration().is_complete());
        assert_eq!(session.revision(), 0);
    }
}
