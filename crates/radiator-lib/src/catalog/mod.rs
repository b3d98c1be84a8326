//! Static reference data: materials, sizes, features, vehicles and presets.
//!
//! - [`materials`] - Core materials and CSV loading
//! - [`sizes`] - Standard/custom sizes and dimension sanitising
//! - [`features`] - Flat-priced add-ons and CSV loading
//! - [`vehicles`] - Car brands, models and recommended presets
//!
//! A [`Catalog`] is built once and never mutated. [`Catalog::builtin`] returns
//! the compiled-in tables; material and feature tables can be swapped for CSV
//! files via [`Catalog::with_materials_from_path`] and
//! [`Catalog::with_features_from_path`].

pub mod features;
pub mod materials;
pub mod sizes;
pub mod vehicles;

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};

pub use features::{load_features, Feature};
pub use materials::{load_materials, Material};
pub use sizes::{
    parse_dimension, sanitize_dimension, DimensionLimits, RadiatorSize, SizeKind, CUSTOM_SIZE_ID,
    DEFAULT_CUSTOM_HEIGHT, DEFAULT_CUSTOM_THICKNESS, DEFAULT_CUSTOM_WIDTH,
};
pub use vehicles::{CarBrand, CarModel, RadiatorPreset};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-model error.
const SUGGESTION_LIMIT: usize = 3;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    materials: materials::builtin_materials(),
    sizes: sizes::builtin_sizes(),
    features: features::builtin_features(),
    brands: vehicles::builtin_brands(),
    models: vehicles::builtin_models(),
    presets: vehicles::builtin_presets(),
});

/// Immutable collection of everything the configurator can offer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    materials: Vec<Material>,
    sizes: Vec<RadiatorSize>,
    features: Vec<Feature>,
    brands: Vec<CarBrand>,
    models: Vec<CarModel>,
    presets: Vec<RadiatorPreset>,
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Replace the material table with the contents of a CSV file.
    pub fn with_materials_from_path(mut self, path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        self.materials = load_materials(file)?;
        debug!(path = %path.display(), count = self.materials.len(), "loaded material table");
        Ok(self)
    }

    /// Replace the feature table with the contents of a CSV file.
    pub fn with_features_from_path(mut self, path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        self.features = load_features(file)?;
        debug!(path = %path.display(), count = self.features.len(), "loaded feature table");
        Ok(self)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn sizes(&self) -> &[RadiatorSize] {
        &self.sizes
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn brands(&self) -> &[CarBrand] {
        &self.brands
    }

    pub fn models(&self) -> &[CarModel] {
        &self.models
    }

    /// Look up a material by id (case-insensitive).
    pub fn material(&self, id: &str) -> Option<&Material> {
        let key = normalize_id(id);
        self.materials.iter().find(|m| m.id == key)
    }

    /// Look up a size by id (case-insensitive).
    pub fn size(&self, id: &str) -> Option<&RadiatorSize> {
        let key = normalize_id(id);
        self.sizes.iter().find(|s| s.id == key)
    }

    /// Look up a feature by id (case-insensitive).
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        let key = normalize_id(id);
        self.features.iter().find(|f| f.id == key)
    }

    /// Look up a car brand by id (case-insensitive).
    pub fn brand(&self, id: &str) -> Option<&CarBrand> {
        let key = normalize_id(id);
        self.brands.iter().find(|b| b.id == key)
    }

    /// Look up a car model by id (case-insensitive).
    pub fn model(&self, id: &str) -> Option<&CarModel> {
        let key = normalize_id(id);
        self.models.iter().find(|m| m.id == key)
    }

    /// All models belonging to a brand, in catalog order.
    pub fn models_for_brand(&self, brand_id: &str) -> Vec<&CarModel> {
        let key = normalize_id(brand_id);
        self.models.iter().filter(|m| m.brand_id == key).collect()
    }

    /// Recommended radiator for a model, if one is on file.
    pub fn preset_for_model(&self, model_id: &str) -> Option<&RadiatorPreset> {
        let key = normalize_id(model_id);
        self.presets.iter().find(|p| p.model_id == key)
    }

    /// Resolve a model id, producing an error with close matches when unknown.
    pub fn require_model(&self, id: &str) -> Result<&CarModel> {
        self.model(id).ok_or_else(|| Error::UnknownModel {
            name: id.to_string(),
            suggestions: self.fuzzy_model_matches(id, SUGGESTION_LIMIT),
        })
    }

    pub fn require_material(&self, id: &str) -> Result<&Material> {
        self.material(id)
            .ok_or_else(|| Error::UnknownMaterial { id: id.to_string() })
    }

    pub fn require_size(&self, id: &str) -> Result<&RadiatorSize> {
        self.size(id)
            .ok_or_else(|| Error::UnknownSize { id: id.to_string() })
    }

    pub fn require_feature(&self, id: &str) -> Result<&Feature> {
        self.feature(id)
            .ok_or_else(|| Error::UnknownFeature { id: id.to_string() })
    }

    pub fn require_brand(&self, id: &str) -> Result<&CarBrand> {
        self.brand(id)
            .ok_or_else(|| Error::UnknownBrand { id: id.to_string() })
    }

    /// Model ids or names similar to `query`, best match first.
    pub fn fuzzy_model_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = normalize_id(query);
        let mut scored: Vec<(f64, &str)> = self
            .models
            .iter()
            .map(|model| {
                let by_id = strsim::jaro_winkler(&needle, &model.id);
                let by_name = strsim::jaro_winkler(&needle, &normalize_id(&model.name));
                (by_id.max(by_name), model.id.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }
}

/// Normalize an id for case-insensitive lookup.
pub(crate) fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_has_a_brand_and_a_preset() {
        let catalog = Catalog::builtin();
        for model in catalog.models() {
            assert!(catalog.brand(&model.brand_id).is_some(), "{}", model.id);
            let preset = catalog
                .preset_for_model(&model.id)
                .unwrap_or_else(|| panic!("preset for {}", model.id));
            assert!(catalog.material(&preset.recommended_material).is_some());
        }
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.material(" Copper ").map(|m| m.id.as_str()),
            Some("copper")
        );
        assert_eq!(catalog.models_for_brand("TOYOTA").len(), 3);
    }

    #[test]
    fn missing_preset_is_absent_not_an_error() {
        assert!(Catalog::builtin().preset_for_model("model-t").is_none());
    }

    #[test]
    fn unknown_model_error_suggests_close_ids() {
        let err = Catalog::builtin()
            .require_model("corola")
            .expect_err("typo is unknown");
        let message = err.to_string();
        assert!(message.contains("Did you mean"), "{message}");
        assert!(message.contains("corolla"), "{message}");
    }
}
