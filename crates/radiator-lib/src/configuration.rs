//! The user's in-progress radiator selection.
//!
//! A [`Configuration`] is an immutable record: every edit returns a new value
//! that copies all other fields and replaces only the edited one. Owners detect
//! a change by comparing values (or the session revision), never by observing
//! in-place mutation.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{CarModel, Catalog, Feature, Material, RadiatorPreset, RadiatorSize};
use crate::pricing::{
    calculate_total_price, price_breakdown, CapMaterial, FinType, PriceBreakdown, PricingOptions,
    DEFAULT_FIN_DENSITY,
};

/// A single field-level edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigEdit {
    Width(f64),
    Height(f64),
    Thickness(f64),
    FinType(FinType),
    FinDensity(u32),
    CapMaterial(CapMaterial),
}

/// Current selections for one configurator session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    material: Option<Material>,
    size: Option<RadiatorSize>,
    features: Vec<Feature>,
    fin_type: FinType,
    fin_density: u32,
    cap_material: CapMaterial,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    /// Empty configuration with the editor's starting fin and cap choices.
    pub fn new() -> Self {
        Self {
            material: None,
            size: None,
            features: Vec::new(),
            fin_type: FinType::Straight,
            fin_density: DEFAULT_FIN_DENSITY,
            cap_material: CapMaterial::Plastic,
        }
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    pub fn size(&self) -> Option<&RadiatorSize> {
        self.size.as_ref()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn fin_type(&self) -> FinType {
        self.fin_type
    }

    pub fn fin_density(&self) -> u32 {
        self.fin_density
    }

    pub fn cap_material(&self) -> CapMaterial {
        self.cap_material
    }

    /// Whether a feature with this id is selected.
    pub fn has_feature(&self, id: &str) -> bool {
        self.features.iter().any(|f| f.id == id)
    }

    /// Material and size are both chosen, so the configuration can be priced.
    pub fn is_complete(&self) -> bool {
        self.material.is_some() && self.size.is_some()
    }

    /// Pricing options derived from the fin and cap selections.
    pub fn pricing_options(&self) -> PricingOptions {
        PricingOptions {
            fin_type: self.fin_type,
            fin_density: self.fin_density,
            cap_material: self.cap_material,
        }
    }

    /// Total price of the configuration; `0.0` until material and size are set.
    pub fn total_price(&self) -> f64 {
        calculate_total_price(
            self.material.as_ref(),
            self.size.as_ref(),
            &self.features,
            &self.pricing_options(),
        )
    }

    /// Price components, or `None` until material and size are set.
    pub fn price_breakdown(&self) -> Option<PriceBreakdown> {
        price_breakdown(
            self.material.as_ref(),
            self.size.as_ref(),
            &self.features,
            &self.pricing_options(),
        )
    }

    #[must_use]
    pub fn with_material(&self, material: Material) -> Self {
        Self {
            material: Some(material),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_size(&self, size: RadiatorSize) -> Self {
        Self {
            size: Some(size),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_features(&self, features: Vec<Feature>) -> Self {
        Self {
            features: dedup_features(features),
            ..self.clone()
        }
    }

    /// Add the feature when absent, remove it when present.
    #[must_use]
    pub fn with_feature_toggled(&self, feature: &Feature) -> Self {
        Self {
            features: toggle_feature(&self.features, feature),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_width(&self, width: f64) -> Self {
        self.apply(ConfigEdit::Width(width))
    }

    #[must_use]
    pub fn with_height(&self, height: f64) -> Self {
        self.apply(ConfigEdit::Height(height))
    }

    #[must_use]
    pub fn with_thickness(&self, thickness: f64) -> Self {
        self.apply(ConfigEdit::Thickness(thickness))
    }

    #[must_use]
    pub fn with_fin_type(&self, fin_type: FinType) -> Self {
        self.apply(ConfigEdit::FinType(fin_type))
    }

    #[must_use]
    pub fn with_fin_density(&self, fin_density: u32) -> Self {
        self.apply(ConfigEdit::FinDensity(fin_density))
    }

    #[must_use]
    pub fn with_cap_material(&self, cap_material: CapMaterial) -> Self {
        self.apply(ConfigEdit::CapMaterial(cap_material))
    }

    /// Copy of this configuration with exactly one field replaced.
    ///
    /// Dimension edits are ignored while no size, or a standard size, is selected.
    #[must_use]
    pub fn apply(&self, edit: ConfigEdit) -> Self {
        debug!(?edit, "applying configuration edit");
        match edit {
            ConfigEdit::Width(width) => self.resize(|size| (width, size.height, size.thickness)),
            ConfigEdit::Height(height) => self.resize(|size| (size.width, height, size.thickness)),
            ConfigEdit::Thickness(thickness) => {
                self.resize(|size| (size.width, size.height, thickness))
            }
            ConfigEdit::FinType(fin_type) => Self {
                fin_type,
                ..self.clone()
            },
            ConfigEdit::FinDensity(fin_density) => Self {
                fin_density,
                ..self.clone()
            },
            ConfigEdit::CapMaterial(cap_material) => Self {
                cap_material,
                ..self.clone()
            },
        }
    }

    /// Seed size, fin geometry and material from a vehicle preset.
    ///
    /// Selected features are kept; the cap goes back to plastic because presets
    /// describe a pressure rating, not a cap material. If the recommended
    /// material is not in `catalog` the current material is left as is.
    #[must_use]
    pub fn with_preset(
        &self,
        preset: &RadiatorPreset,
        model: Option<&CarModel>,
        catalog: &Catalog,
    ) -> Self {
        let material = catalog
            .material(&preset.recommended_material)
            .cloned()
            .or_else(|| self.material.clone());

        Self {
            material,
            size: Some(preset.to_size(model)),
            features: self.features.clone(),
            fin_type: preset.fin_type,
            fin_density: preset.fin_density,
            cap_material: CapMaterial::Plastic,
        }
    }

    fn resize(&self, dimensions: impl FnOnce(&RadiatorSize) -> (f64, f64, f64)) -> Self {
        match &self.size {
            Some(size) => {
                let (width, height, thickness) = dimensions(size);
                Self {
                    size: Some(size.resized(width, height, thickness)),
                    ..self.clone()
                }
            }
            None => self.clone(),
        }
    }
}

/// Return a new feature set with `feature` toggled: removed when its id is
/// present, appended otherwise.
pub fn toggle_feature(current: &[Feature], feature: &Feature) -> Vec<Feature> {
    if current.iter().any(|f| f.id == feature.id) {
        current
            .iter()
            .filter(|f| f.id != feature.id)
            .cloned()
            .collect()
    } else {
        let mut next = current.to_vec();
        next.push(feature.clone());
        next
    }
}

fn dedup_features(features: Vec<Feature>) -> Vec<Feature> {
    let mut unique: Vec<Feature> = Vec::with_capacity(features.len());
    for feature in features {
        if !unique.iter().any(|f| f.id == feature.id) {
            unique.push(feature);
        }
    }
    unique
}
