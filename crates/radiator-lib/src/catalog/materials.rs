//! Core materials and their per-area pricing.

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::normalize_id;

/// Radiator core material offered by the configurator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in dollars per square inch of core face area.
    #[serde(alias = "pricePerSquareInch", alias = "price")]
    pub price_per_square_inch: f64,
    #[serde(default)]
    pub image: String,
}

impl Material {
    /// Validate material attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "material id must not be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("material '{}' must have a name", self.id),
            });
        }
        if !self.price_per_square_inch.is_finite() || self.price_per_square_inch < 0.0 {
            return Err(Error::CatalogValidation {
                message: format!(
                    "price_per_square_inch for material '{}' must be a finite non-negative number",
                    self.id
                ),
            });
        }
        Ok(())
    }
}

/// Read a material table from CSV.
///
/// Expected header: `id,name,description,price_per_square_inch[,image]`.
/// Ids are compared case-insensitively and must be unique.
pub fn load_materials<R: Read>(reader: R) -> Result<Vec<Material>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut seen = HashSet::new();
    let mut materials = Vec::new();

    for (row, record) in csv_reader.deserialize::<Material>().enumerate() {
        let mut material: Material = record.map_err(|err| Error::CatalogValidation {
            message: format!("invalid material row {}: {err}", row + 2),
        })?;
        material.id = normalize_id(&material.id);
        material.validate()?;

        if !seen.insert(material.id.clone()) {
            return Err(Error::DuplicateCatalogId { id: material.id });
        }
        materials.push(material);
    }

    Ok(materials)
}

pub(crate) fn builtin_materials() -> Vec<Material> {
    vec![
        Material {
            id: "aluminum".to_string(),
            name: "Aluminum".to_string(),
            description: "Lightweight with excellent heat dissipation, suits most applications."
                .to_string(),
            price_per_square_inch: 0.5,
            image: "/placeholder.svg".to_string(),
        },
        Material {
            id: "copper".to_string(),
            name: "Copper".to_string(),
            description: "Superior thermal conductivity for high-performance cooling.".to_string(),
            price_per_square_inch: 0.8,
            image: "/placeholder.svg".to_string(),
        },
        Material {
            id: "brass".to_string(),
            name: "Brass".to_string(),
            description: "Corrosion resistant with good heat transfer for harsh environments."
                .to_string(),
            price_per_square_inch: 0.7,
            image: "/placeholder.svg".to_string(),
        },
    ]
}
