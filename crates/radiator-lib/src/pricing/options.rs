//! Fin geometry and cap options with their surcharge tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{BASELINE_FIN_DENSITY, FIN_DENSITY_SURCHARGES};

/// Fin profile between the core tubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinType {
    /// Plain straight fins (baseline).
    #[default]
    Straight,
    /// Wave-formed fins.
    Wavy,
    /// Louvered (slanted) fins.
    Louvered,
    /// V-shaped fins.
    VShaped,
}

impl FinType {
    pub const ALL: [FinType; 4] = [
        FinType::Straight,
        FinType::Wavy,
        FinType::Louvered,
        FinType::VShaped,
    ];

    /// Surcharge in dollars over straight fins.
    pub fn surcharge(self) -> f64 {
        match self {
            FinType::Straight => 0.0,
            FinType::Wavy => 15.0,
            FinType::Louvered => 20.0,
            FinType::VShaped => 25.0,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FinType::Straight => "Straight fins",
            FinType::Wavy => "Wavy fins",
            FinType::Louvered => "Louvered fins",
            FinType::VShaped => "V-shaped fins",
        }
    }
}

impl fmt::Display for FinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FinType::Straight => "straight",
            FinType::Wavy => "wavy",
            FinType::Louvered => "louvered",
            FinType::VShaped => "v-shaped",
        };
        f.write_str(value)
    }
}

impl FromStr for FinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" => Ok(FinType::Straight),
            "wavy" | "wave" => Ok(FinType::Wavy),
            "louvered" | "louvred" | "slanted" => Ok(FinType::Louvered),
            "v-shaped" | "v_shaped" | "vshaped" | "v" => Ok(FinType::VShaped),
            other => Err(Error::InvalidOption {
                kind: "fin type",
                value: other.to_string(),
                expected: "straight, wavy, louvered or v-shaped",
            }),
        }
    }
}

/// Material of the filler cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapMaterial {
    /// Plastic cap (baseline).
    #[default]
    Plastic,
    Brass,
    Copper,
}

impl CapMaterial {
    pub const ALL: [CapMaterial; 3] = [
        CapMaterial::Plastic,
        CapMaterial::Brass,
        CapMaterial::Copper,
    ];

    /// Surcharge in dollars over a plastic cap.
    pub fn surcharge(self) -> f64 {
        match self {
            CapMaterial::Plastic => 0.0,
            CapMaterial::Brass => 15.0,
            CapMaterial::Copper => 20.0,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CapMaterial::Plastic => "Plastic cap",
            CapMaterial::Brass => "Brass cap",
            CapMaterial::Copper => "Copper cap",
        }
    }
}

impl fmt::Display for CapMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CapMaterial::Plastic => "plastic",
            CapMaterial::Brass => "brass",
            CapMaterial::Copper => "copper",
        };
        f.write_str(value)
    }
}

impl FromStr for CapMaterial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plastic" => Ok(CapMaterial::Plastic),
            "brass" => Ok(CapMaterial::Brass),
            "copper" => Ok(CapMaterial::Copper),
            other => Err(Error::InvalidOption {
                kind: "cap material",
                value: other.to_string(),
                expected: "plastic, brass or copper",
            }),
        }
    }
}

/// Surcharge in dollars for a fin density; densities outside the table cost nothing extra.
pub fn fin_density_surcharge(fins_per_inch: u32) -> f64 {
    FIN_DENSITY_SURCHARGES
        .iter()
        .find(|(density, _)| *density == fins_per_inch)
        .map(|(_, price)| *price)
        .unwrap_or(0.0)
}

/// Optional pricing inputs. The default is the lowest-cost baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingOptions {
    pub fin_type: FinType,
    pub fin_density: u32,
    pub cap_material: CapMaterial,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            fin_type: FinType::Straight,
            fin_density: BASELINE_FIN_DENSITY,
            cap_material: CapMaterial::Plastic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_options_carry_no_surcharge() {
        let options = PricingOptions::default();
        assert_eq!(options.fin_type.surcharge(), 0.0);
        assert_eq!(fin_density_surcharge(options.fin_density), 0.0);
        assert_eq!(options.cap_material.surcharge(), 0.0);
    }

    #[test]
    fn unlisted_density_is_free() {
        assert_eq!(fin_density_surcharge(13), 0.0);
        assert_eq!(fin_density_surcharge(0), 0.0);
        assert_eq!(fin_density_surcharge(18), 20.0);
    }

    #[test]
    fn fin_type_parses_display_form() {
        for fin in FinType::ALL {
            assert_eq!(fin.to_string().parse::<FinType>().expect("parses"), fin);
        }
    }

    #[test]
    fn unknown_fin_type_names_the_accepted_values() {
        let err = "zigzag".parse::<FinType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown fin type 'zigzag'; expected straight, wavy, louvered or v-shaped"
        );
        assert!(matches!(err, Error::InvalidOption { .. }));
    }

    #[test]
    fn cap_material_parse_is_case_insensitive() {
        assert_eq!(
            "Copper".parse::<CapMaterial>().expect("parses"),
            CapMaterial::Copper
        );
    }

    #[test]
    fn unknown_cap_material_reports_kind_and_value() {
        let err = "Gold".parse::<CapMaterial>().unwrap_err();
        match err {
            Error::InvalidOption { kind, value, .. } => {
                assert_eq!(kind, "cap material");
                assert_eq!(value, "gold");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
