//! Car brands, models and the radiator recommended for each model.

use serde::{Deserialize, Serialize};

use crate::pricing::FinType;

use super::sizes::{RadiatorSize, SizeKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarBrand {
    pub id: String,
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    /// Production year range, e.g. `2018-2023`.
    pub years: String,
    pub image: String,
}

/// Recommended radiator for one car model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiatorPreset {
    pub id: String,
    pub model_id: String,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub fin_type: FinType,
    pub fin_density: u32,
    pub recommended_material: String,
    /// Description of the factory cap rating.
    pub cap_type: String,
}

impl RadiatorPreset {
    /// Face area of the recommended core in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Size entry representing this preset, named after the model.
    pub fn to_size(&self, model: Option<&CarModel>) -> RadiatorSize {
        let name = match model {
            Some(model) => format!("Radiator for {}", model.name),
            None => format!("Radiator for {}", self.model_id),
        };
        RadiatorSize {
            id: format!("preset_{}", self.model_id),
            name,
            width: self.width,
            height: self.height,
            thickness: self.thickness,
            base_price: 0.0,
            kind: SizeKind::Preset,
        }
    }
}

const STANDARD_PRESSURE_CAP: &str = "Standard pressure (1.1 bar)";
const HIGH_PRESSURE_CAP: &str = "High pressure (1.3 bar)";

pub(crate) fn builtin_brands() -> Vec<CarBrand> {
    [
        ("toyota", "Toyota"),
        ("honda", "Honda"),
        ("nissan", "Nissan"),
        ("isuzu", "Isuzu"),
        ("mazda", "Mazda"),
    ]
    .into_iter()
    .map(|(id, name)| CarBrand {
        id: id.to_string(),
        name: name.to_string(),
        logo: format!("/images/{id}-logo.png"),
    })
    .collect()
}

pub(crate) fn builtin_models() -> Vec<CarModel> {
    [
        ("camry", "toyota", "Camry", "2018-2023"),
        ("corolla", "toyota", "Corolla", "2019-2023"),
        ("fortuner", "toyota", "Fortuner", "2016-2023"),
        ("civic", "honda", "Civic", "2016-2022"),
        ("crv", "honda", "CR-V", "2017-2023"),
        ("accord", "honda", "Accord", "2018-2023"),
        ("almera", "nissan", "Almera", "2020-2023"),
        ("kicks", "nissan", "Kicks", "2020-2023"),
        ("navara", "nissan", "Navara", "2015-2022"),
        ("dmax", "isuzu", "D-Max", "2019-2023"),
        ("mu-x", "isuzu", "MU-X", "2020-2023"),
        ("mazda2", "mazda", "Mazda 2", "2019-2023"),
        ("mazda3", "mazda", "Mazda 3", "2020-2023"),
        ("cx-5", "mazda", "CX-5", "2017-2023"),
    ]
    .into_iter()
    .map(|(id, brand_id, name, years)| CarModel {
        id: id.to_string(),
        brand_id: brand_id.to_string(),
        name: name.to_string(),
        years: years.to_string(),
        image: format!("/images/{brand_id}-{id}.jpg"),
    })
    .collect()
}

/// Model id, width, height, thickness, fin type, fin density, material, cap.
type PresetRow = (
    &'static str,
    f64,
    f64,
    f64,
    FinType,
    u32,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const PRESET_ROWS: [PresetRow; 14] = [
    ("camry",    26.0, 16.0, 2.2, FinType::Wavy,     14, "brass",  STANDARD_PRESSURE_CAP),
    ("corolla",  24.0, 14.0, 2.0, FinType::Straight, 12, "brass",  STANDARD_PRESSURE_CAP),
    ("fortuner", 28.0, 19.0, 2.5, FinType::Wavy,     16, "copper", HIGH_PRESSURE_CAP),
    ("civic",    25.0, 15.0, 2.2, FinType::Wavy,     14, "brass",  STANDARD_PRESSURE_CAP),
    ("crv",      27.0, 17.0, 2.5, FinType::Wavy,     16, "copper", HIGH_PRESSURE_CAP),
    ("accord",   26.0, 16.0, 2.2, FinType::Wavy,     14, "brass",  HIGH_PRESSURE_CAP),
    ("almera",   23.0, 14.0, 2.0, FinType::Straight, 12, "brass",  STANDARD_PRESSURE_CAP),
    ("kicks",    24.0, 15.0, 2.2, FinType::Wavy,     14, "brass",  STANDARD_PRESSURE_CAP),
    ("navara",   29.0, 20.0, 2.8, FinType::Louvered, 18, "copper", HIGH_PRESSURE_CAP),
    ("dmax",     28.0, 20.0, 2.8, FinType::Louvered, 18, "copper", HIGH_PRESSURE_CAP),
    ("mu-x",     27.0, 19.0, 2.6, FinType::Louvered, 16, "copper", HIGH_PRESSURE_CAP),
    ("mazda2",   23.0, 14.0, 2.0, FinType::Straight, 12, "brass",  STANDARD_PRESSURE_CAP),
    ("mazda3",   25.0, 15.0, 2.2, FinType::Wavy,     14, "brass",  STANDARD_PRESSURE_CAP),
    ("cx-5",     26.0, 17.0, 2.5, FinType::Wavy,     16, "copper", HIGH_PRESSURE_CAP),
];

pub(crate) fn builtin_presets() -> Vec<RadiatorPreset> {
    PRESET_ROWS
        .iter()
        .map(|&(model_id, width, height, thickness, fin_type, fin_density, material, cap)| {
            RadiatorPreset {
                id: format!("{model_id}_standard"),
                model_id: model_id.to_string(),
                width,
                height,
                thickness,
                fin_type,
                fin_density,
                recommended_material: material.to_string(),
                cap_type: cap.to_string(),
            }
        })
        .collect()
}
