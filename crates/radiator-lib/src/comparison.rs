//! Comparison between the current configuration and the vehicle's preset.

use serde::Serialize;

use crate::catalog::{CarModel, Catalog, Material, RadiatorPreset};
use crate::configuration::Configuration;
use crate::pricing::constants::{PRESET_ESTIMATE_AREA_RATE, PRESET_ESTIMATE_BASE};
use crate::pricing::round_to_cents;

/// How far the current configuration's price is from the preset estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetComparison {
    pub model_id: String,
    pub model_name: String,
    /// Estimated price of the preset with its recommended material.
    pub preset_price: f64,
    pub current_price: f64,
    /// `current_price - preset_price`.
    pub difference: f64,
    /// Difference as a percentage of the preset price.
    pub percentage: f64,
    pub more_expensive: bool,
}

/// Rough price of a preset in its recommended material.
///
/// This is a catalog estimate (`100 + area × 0.15 + area × material rate`),
/// not a run of the full pricing function.
pub fn estimate_preset_price(preset: &RadiatorPreset, material: &Material) -> f64 {
    let area = preset.area();
    round_to_cents(
        PRESET_ESTIMATE_BASE
            + area * PRESET_ESTIMATE_AREA_RATE
            + area * material.price_per_square_inch,
    )
}

impl PresetComparison {
    /// Compare `configuration` against the preset of `model`.
    ///
    /// Returns `None` when the model has no preset, the preset's material is
    /// not in the catalog or the configuration cannot be priced yet.
    pub fn for_model(
        catalog: &Catalog,
        model: &CarModel,
        configuration: &Configuration,
    ) -> Option<Self> {
        if !configuration.is_complete() {
            return None;
        }
        let preset = catalog.preset_for_model(&model.id)?;
        let material = catalog.material(&preset.recommended_material)?;

        let preset_price = estimate_preset_price(preset, material);
        let current_price = configuration.total_price();
        let difference = round_to_cents(current_price - preset_price);
        let percentage = if preset_price > 0.0 {
            round_to_cents(difference / preset_price * 100.0)
        } else {
            0.0
        };

        Some(Self {
            model_id: model.id.clone(),
            model_name: model.name.clone(),
            preset_price,
            current_price,
            difference,
            percentage,
            more_expensive: difference > 0.0,
        })
    }
}
