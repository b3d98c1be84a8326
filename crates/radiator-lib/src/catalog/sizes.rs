//! Radiator core sizes and dimension handling.

use serde::{Deserialize, Serialize};

/// Id of the user-editable size entry in the catalog.
pub const CUSTOM_SIZE_ID: &str = "custom";

/// Dimensions the custom editor starts from (inches).
pub const DEFAULT_CUSTOM_WIDTH: f64 = 24.0;
pub const DEFAULT_CUSTOM_HEIGHT: f64 = 16.0;
pub const DEFAULT_CUSTOM_THICKNESS: f64 = 2.5;

/// How a size entry is priced and whether its dimensions may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeKind {
    /// Fixed catalog dimensions with a fixed base price.
    Standard,
    /// User-entered dimensions, base fee computed from the dimensions.
    Custom,
    /// Dimensions seeded from a vehicle preset, priced like a custom size.
    Preset,
}

impl SizeKind {
    /// Whether the dimensions of this kind can be edited in place.
    pub fn is_editable(self) -> bool {
        !matches!(self, SizeKind::Standard)
    }
}

/// Radiator core size. Dimensions are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiatorSize {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    /// Fixed base price for standard sizes; ignored for computed kinds.
    pub base_price: f64,
    pub kind: SizeKind,
}

impl RadiatorSize {
    /// Custom size with the supplied dimensions (each sanitised).
    pub fn custom(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            id: CUSTOM_SIZE_ID.to_string(),
            name: "Custom Size".to_string(),
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
            thickness: sanitize_dimension(thickness),
            base_price: 0.0,
            kind: SizeKind::Custom,
        }
    }

    /// Face area (width × height) in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Copy of this size with new dimensions.
    ///
    /// Standard sizes have fixed catalog dimensions and come back unchanged.
    pub fn resized(&self, width: f64, height: f64, thickness: f64) -> Self {
        if !self.kind.is_editable() {
            return self.clone();
        }
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
            thickness: sanitize_dimension(thickness),
            ..self.clone()
        }
    }
}

/// Input ranges offered by the custom size editor.
///
/// These are front-end hints; pricing accepts any non-negative dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionLimits {
    pub width: (f64, f64),
    pub height: (f64, f64),
    pub thickness: (f64, f64),
    pub thickness_step: f64,
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self {
            width: (8.0, 48.0),
            height: (8.0, 36.0),
            thickness: (1.0, 5.0),
            thickness_step: 0.5,
        }
    }
}

/// Clamp a dimension to a usable value: negative or non-finite input becomes `0.0`.
pub fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        if value != 0.0 {
            tracing::warn!(value, "clamping invalid dimension to 0");
        }
        0.0
    }
}

/// Parse raw dimension input, treating anything unparseable as `0.0`.
pub fn parse_dimension(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(sanitize_dimension)
        .unwrap_or(0.0)
}

pub(crate) fn builtin_sizes() -> Vec<RadiatorSize> {
    let standard = |id: &str, name: &str, width, height, thickness, base_price| RadiatorSize {
        id: id.to_string(),
        name: name.to_string(),
        width,
        height,
        thickness,
        base_price,
        kind: SizeKind::Standard,
    };

    vec![
        standard("small", "Small (Standard)", 18.0, 12.0, 2.0, 120.0),
        standard("medium", "Medium (Performance)", 24.0, 16.0, 2.5, 180.0),
        standard("large", "Large (Racing)", 30.0, 18.0, 3.0, 250.0),
        RadiatorSize::custom(
            DEFAULT_CUSTOM_WIDTH,
            DEFAULT_CUSTOM_HEIGHT,
            DEFAULT_CUSTOM_THICKNESS,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dimension_clamps_garbage_to_zero() {
        assert_eq!(parse_dimension("26.5"), 26.5);
        assert_eq!(parse_dimension(" 12 "), 12.0);
        assert_eq!(parse_dimension(""), 0.0);
        assert_eq!(parse_dimension("wide"), 0.0);
        assert_eq!(parse_dimension("-4"), 0.0);
        assert_eq!(parse_dimension("NaN"), 0.0);
        assert_eq!(parse_dimension("inf"), 0.0);
    }

    #[test]
    fn resizing_standard_size_keeps_catalog_dimensions() {
        let medium = builtin_sizes()
            .into_iter()
            .find(|s| s.id == "medium")
            .expect("medium size");
        let resized = medium.resized(30.0, medium.height, medium.thickness);
        assert_eq!(resized, medium);
        assert_eq!(resized.kind, SizeKind::Standard);
        assert_eq!(resized.width, 24.0);
    }

    #[test]
    fn resizing_custom_size_sanitises_each_dimension() {
        let custom = RadiatorSize::custom(24.0, 16.0, 2.5);
        let resized = custom.resized(30.0, -1.0, f64::NAN);
        assert_eq!(resized.id, CUSTOM_SIZE_ID);
        assert_eq!(resized.width, 30.0);
        assert_eq!(resized.height, 0.0);
        assert_eq!(resized.thickness, 0.0);
    }

    #[test]
    fn custom_size_starts_with_positive_dimensions() {
        let custom = builtin_sizes()
            .into_iter()
            .find(|s| s.kind == SizeKind::Custom)
            .expect("custom size");
        assert!(custom.width > 0.0);
        assert!(custom.height > 0.0);
        assert!(custom.thickness > 0.0);
        assert_eq!(custom.area(), 384.0);
    }
}
