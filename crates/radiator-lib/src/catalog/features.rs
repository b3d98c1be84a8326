//! Optional flat-priced add-ons.

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::normalize_id;

/// Add-on that can be toggled on a configuration independently of its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Flat price in dollars.
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl Feature {
    /// Validate feature attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "feature id must not be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("feature '{}' must have a name", self.id),
            });
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::CatalogValidation {
                message: format!(
                    "price for feature '{}' must be a finite non-negative number",
                    self.id
                ),
            });
        }
        Ok(())
    }
}

/// Read a feature table from CSV.
///
/// Expected header: `id,name,description,price[,image]`.
pub fn load_features<R: Read>(reader: R) -> Result<Vec<Feature>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut seen = HashSet::new();
    let mut features = Vec::new();

    for (row, record) in csv_reader.deserialize::<Feature>().enumerate() {
        let mut feature: Feature = record.map_err(|err| Error::CatalogValidation {
            message: format!("invalid feature row {}: {err}", row + 2),
        })?;
        feature.id = normalize_id(&feature.id);
        feature.validate()?;

        if !seen.insert(feature.id.clone()) {
            return Err(Error::DuplicateCatalogId { id: feature.id });
        }
        features.push(feature);
    }

    Ok(features)
}

pub(crate) fn builtin_features() -> Vec<Feature> {
    vec![
        Feature {
            id: "fan".to_string(),
            name: "High-Flow Cooling Fan".to_string(),
            description: "Increases airflow through the radiator for improved cooling efficiency."
                .to_string(),
            price: 85.0,
            image: "/placeholder.svg".to_string(),
        },
        Feature {
            id: "shroud".to_string(),
            name: "Custom Fan Shroud".to_string(),
            description: "Directs airflow across the whole core.".to_string(),
            price: 65.0,
            image: "/placeholder.svg".to_string(),
        },
        Feature {
            id: "cap".to_string(),
            name: "High-Pressure Radiator Cap".to_string(),
            description: "Raises system pressure so coolant can run hotter without boiling."
                .to_string(),
            price: 25.0,
            image: "/placeholder.svg".to_string(),
        },
        Feature {
            id: "coating".to_string(),
            name: "Ceramic Coating".to_string(),
            description: "Thermal protection and a durable finish for external components."
                .to_string(),
            price: 110.0,
            image: "/placeholder.svg".to_string(),
        },
    ]
}
