//! Pricing constants shared by the base fee, surcharge and comparison rules.

/// Per-square-inch component of the computed base fee.
pub const CUSTOM_AREA_RATE: f64 = 0.25;

/// Weight of the `sqrt(area) × thickness^1.5` core-volume term in the base fee.
pub const CUSTOM_CORE_RATE: f64 = 1.2;

/// Floor applied to the computed base fee so small cores are never priced below it.
pub const MINIMUM_CUSTOM_FEE: f64 = 150.0;

/// Fin density (fins per inch) that carries no surcharge.
pub const BASELINE_FIN_DENSITY: u32 = 10;

/// Fin density the custom editor starts with.
pub const DEFAULT_FIN_DENSITY: u32 = 14;

/// Fin density surcharge table: (fins per inch, dollars).
pub const FIN_DENSITY_SURCHARGES: [(u32, f64); 6] = [
    (10, 0.0),
    (12, 5.0),
    (14, 10.0),
    (16, 15.0),
    (18, 20.0),
    (20, 25.0),
];

/// Flat handling charge in the preset price estimate.
pub const PRESET_ESTIMATE_BASE: f64 = 100.0;

/// Per-square-inch charge in the preset price estimate.
pub const PRESET_ESTIMATE_AREA_RATE: f64 = 0.15;
