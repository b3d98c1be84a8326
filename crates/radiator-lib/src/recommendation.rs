//! Advice text describing the consequences of the fin and cap choices.

use std::fmt;

use serde::Serialize;

use crate::configuration::Configuration;
use crate::pricing::{CapMaterial, FinType};

/// Fin density band used to pick the density advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityBand {
    /// Up to 12 fins per inch.
    Low,
    /// 13 to 16 fins per inch.
    Medium,
    /// Above 16 fins per inch.
    High,
}

impl DensityBand {
    pub fn for_density(fins_per_inch: u32) -> Self {
        match fins_per_inch {
            0..=12 => DensityBand::Low,
            13..=16 => DensityBand::Medium,
            _ => DensityBand::High,
        }
    }
}

/// Recommended cap pressure range in psi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressureRange {
    pub min_psi: u32,
    pub max_psi: u32,
}

impl fmt::Display for PressureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} psi", self.min_psi, self.max_psi)
    }
}

pub fn cap_pressure(cap: CapMaterial) -> PressureRange {
    let (min_psi, max_psi) = match cap {
        CapMaterial::Plastic => (13, 15),
        CapMaterial::Copper => (16, 18),
        CapMaterial::Brass => (15, 17),
    };
    PressureRange { min_psi, max_psi }
}

pub fn fin_type_advice(fin_type: FinType) -> &'static str {
    match fin_type {
        FinType::Straight => {
            "Straight fins are the traditional layout: durable, easy to clean and fine for everyday cars."
        }
        FinType::Wavy => {
            "Wavy fins break up the airflow for better heat transfer than straight fins with little extra cleaning effort."
        }
        FinType::Louvered => {
            "Louvered fins cut into the airstream for strong heat transfer, suited to towing and hot climates."
        }
        FinType::VShaped => {
            "V-shaped fins shed 15-20% more heat than straight fins, suited to turbocharged or hard-working engines."
        }
    }
}

pub fn fin_density_advice(band: DensityBand) -> &'static str {
    match band {
        DensityBand::Low => {
            "Low fin density (10-12 fpi) is easy to clean and suits dusty roads and off-road use."
        }
        DensityBand::Medium => {
            "Medium fin density (14-16 fpi) balances cooling performance against maintenance for general use."
        }
        DensityBand::High => {
            "High fin density (18-20 fpi) gives the most cooling, suited to performance cars and track use."
        }
    }
}

pub fn cap_material_advice(cap: CapMaterial) -> &'static str {
    match cap {
        CapMaterial::Plastic => {
            "A plastic cap is light and inexpensive for everyday use but wears out sooner than metal caps."
        }
        CapMaterial::Copper => {
            "A copper cap conducts heat very well and resists corrosion, suited to maximum cooling builds."
        }
        CapMaterial::Brass => {
            "A brass cap is tough and corrosion resistant with a long service life, suited to classic cars."
        }
    }
}

/// Advice for one configuration's fin and cap selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub fin_type: FinType,
    pub fin_type_advice: &'static str,
    pub fin_density: u32,
    pub density_band: DensityBand,
    pub fin_density_advice: &'static str,
    pub cap_material: CapMaterial,
    pub cap_material_advice: &'static str,
    pub cap_pressure: PressureRange,
}

impl Recommendation {
    pub fn for_configuration(configuration: &Configuration) -> Self {
        Self::new(
            configuration.fin_type(),
            configuration.fin_density(),
            configuration.cap_material(),
        )
    }

    pub fn new(fin_type: FinType, fin_density: u32, cap_material: CapMaterial) -> Self {
        let density_band = DensityBand::for_density(fin_density);
        Self {
            fin_type,
            fin_type_advice: fin_type_advice(fin_type),
            fin_density,
            density_band,
            fin_density_advice: fin_density_advice(density_band),
            cap_material,
            cap_material_advice: cap_material_advice(cap_material),
            cap_pressure: cap_pressure(cap_material),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_bands_split_at_12_and_16() {
        assert_eq!(DensityBand::for_density(10), DensityBand::Low);
        assert_eq!(DensityBand::for_density(12), DensityBand::Low);
        assert_eq!(DensityBand::for_density(14), DensityBand::Medium);
        assert_eq!(DensityBand::for_density(16), DensityBand::Medium);
        assert_eq!(DensityBand::for_density(18), DensityBand::High);
    }

    #[test]
    fn cap_pressure_follows_cap_material() {
        assert_eq!(cap_pressure(CapMaterial::Plastic).to_string(), "13-15 psi");
        assert_eq!(cap_pressure(CapMaterial::Copper).to_string(), "16-18 psi");
        assert_eq!(cap_pressure(CapMaterial::Brass).to_string(), "15-17 psi");
    }

    #[test]
    fn default_configuration_gets_medium_density_advice() {
        let advice = Recommendation::for_configuration(&Configuration::new());
        assert_eq!(advice.density_band, DensityBand::Medium);
        assert_eq!(advice.cap_pressure.min_psi, 13);
    }
}
