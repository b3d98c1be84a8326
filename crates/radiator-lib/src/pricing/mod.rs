//! Radiator price calculation.
//!
//! The price of a configuration is a weighted sum over a handful of numeric
//! fields plus table lookups:
//!
//! - material cost: face area × material price per square inch
//! - base fee: the catalog price for standard sizes, otherwise
//!   `max(area × 0.25 + sqrt(area) × thickness^1.5 × 1.2, 150)`
//! - feature cost: sum of the flat prices of the selected add-ons
//! - fin type, fin density and cap material surcharges
//!
//! The total is rounded to cents. Missing material or size prices to `0`.
//!
//! # Example
//!
//! ```
//! use radiator_lib::catalog::Catalog;
//! use radiator_lib::pricing::{calculate_total_price, PricingOptions};
//!
//! let catalog = Catalog::builtin();
//! let copper = catalog.material("copper");
//! let custom = catalog.size("custom");
//! let total = calculate_total_price(copper, custom, &[], &PricingOptions::default());
//! assert_eq!(total, 496.15);
//! ```

pub mod constants;
pub mod options;

use serde::Serialize;

use crate::catalog::{Feature, Material, RadiatorSize, SizeKind};

pub use constants::{
    BASELINE_FIN_DENSITY, CUSTOM_AREA_RATE, CUSTOM_CORE_RATE, DEFAULT_FIN_DENSITY,
    FIN_DENSITY_SURCHARGES, MINIMUM_CUSTOM_FEE,
};
pub use options::{fin_density_surcharge, CapMaterial, FinType, PricingOptions};

/// Individual components that make up a configuration's price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub area: f64,
    pub material_cost: f64,
    pub base_fee: f64,
    pub features_cost: f64,
    pub fin_type_surcharge: f64,
    pub fin_density_surcharge: f64,
    pub cap_material_surcharge: f64,
    /// Sum of all components, rounded to cents.
    pub total: f64,
}

impl PriceBreakdown {
    /// Sum of the fin type, fin density and cap surcharges.
    pub fn surcharges(&self) -> f64 {
        self.fin_type_surcharge + self.fin_density_surcharge + self.cap_material_surcharge
    }
}

/// Dimension-derived fee for custom and preset sizes.
///
/// Formula: `max(area × CUSTOM_AREA_RATE + sqrt(area) × thickness^1.5 × CUSTOM_CORE_RATE,
/// MINIMUM_CUSTOM_FEE)`. Non-positive dimensions contribute nothing, leaving the floor.
pub fn calculate_custom_base_fee(width: f64, height: f64, thickness: f64) -> f64 {
    let width = width.max(0.0);
    let height = height.max(0.0);
    let thickness = thickness.max(0.0);

    let area = width * height;
    let core = area.sqrt() * thickness.powf(1.5);
    (area * CUSTOM_AREA_RATE + core * CUSTOM_CORE_RATE).max(MINIMUM_CUSTOM_FEE)
}

/// Base fee for a size: fixed for standard sizes, computed otherwise.
pub fn base_fee(size: &RadiatorSize) -> f64 {
    match size.kind {
        SizeKind::Standard => size.base_price,
        SizeKind::Custom | SizeKind::Preset => {
            calculate_custom_base_fee(size.width, size.height, size.thickness)
        }
    }
}

/// Compute every price component, or `None` when material or size is missing.
pub fn price_breakdown(
    material: Option<&Material>,
    size: Option<&RadiatorSize>,
    features: &[Feature],
    options: &PricingOptions,
) -> Option<PriceBreakdown> {
    let (material, size) = (material?, size?);

    let area = size.area().max(0.0);
    let material_cost = area * material.price_per_square_inch;
    let base_fee = base_fee(size);
    let features_cost: f64 = features.iter().map(|feature| feature.price).sum();
    let fin_type_surcharge = options.fin_type.surcharge();
    let fin_density_surcharge = fin_density_surcharge(options.fin_density);
    let cap_material_surcharge = options.cap_material.surcharge();

    let total = round_to_cents(
        material_cost
            + base_fee
            + features_cost
            + fin_type_surcharge
            + fin_density_surcharge
            + cap_material_surcharge,
    );

    Some(PriceBreakdown {
        area,
        material_cost,
        base_fee,
        features_cost,
        fin_type_surcharge,
        fin_density_surcharge,
        cap_material_surcharge,
        total: total.max(0.0),
    })
}

/// Total price of a configuration in dollars, rounded to cents.
///
/// Returns `0.0` when either the material or the size is missing.
pub fn calculate_total_price(
    material: Option<&Material>,
    size: Option<&RadiatorSize>,
    features: &[Feature],
    options: &PricingOptions,
) -> f64 {
    price_breakdown(material, size, features, options)
        .map(|breakdown| breakdown.total)
        .unwrap_or(0.0)
}

/// Round a dollar amount to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
