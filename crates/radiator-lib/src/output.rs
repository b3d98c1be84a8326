//! Serialisable summaries of a configuration for front-ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::pricing::{round_to_cents, PriceBreakdown};

/// Thai baht per US dollar used for display conversion.
pub const THB_PER_USD: f64 = 30.0;

/// Currency a price is displayed in. Prices are always computed in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Thb,
}

impl Currency {
    /// Convert a dollar amount for display, rounded to cents.
    pub fn convert(self, usd: f64) -> f64 {
        match self {
            Currency::Usd => round_to_cents(usd),
            Currency::Thb => round_to_cents(usd * THB_PER_USD),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Thb => "THB",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Thb => "฿",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" | "$" => Ok(Currency::Usd),
            "thb" | "baht" => Ok(Currency::Thb),
            other => Err(Error::InvalidOption {
                kind: "currency",
                value: other.to_string(),
                expected: "usd or thb",
            }),
        }
    }
}

/// One priced row of a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

/// Dimensions shown in a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDimensions {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

/// Priced overview of a configuration in one display currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub currency: Currency,
    pub material: Option<String>,
    pub size: Option<String>,
    pub dimensions: Option<SummaryDimensions>,
    pub fin_type: String,
    pub fin_density: u32,
    pub cap_material: String,
    pub features: Vec<String>,
    pub line_items: Vec<LineItem>,
    pub total: f64,
}

impl QuoteSummary {
    pub fn new(configuration: &Configuration, currency: Currency) -> Self {
        let line_items = configuration
            .price_breakdown()
            .map(|breakdown| line_items(configuration, &breakdown, currency))
            .unwrap_or_default();

        Self {
            currency,
            material: configuration.material().map(|m| m.name.clone()),
            size: configuration.size().map(|s| s.name.clone()),
            dimensions: configuration.size().map(|s| SummaryDimensions {
                width: s.width,
                height: s.height,
                thickness: s.thickness,
            }),
            fin_type: configuration.fin_type().label().to_string(),
            fin_density: configuration.fin_density(),
            cap_material: configuration.cap_material().label().to_string(),
            features: configuration
                .features()
                .iter()
                .map(|f| f.name.clone())
                .collect(),
            line_items,
            total: currency.convert(configuration.total_price()),
        }
    }
}

fn line_items(
    configuration: &Configuration,
    breakdown: &PriceBreakdown,
    currency: Currency,
) -> Vec<LineItem> {
    let mut items = vec![
        LineItem {
            label: "Material".to_string(),
            amount: currency.convert(breakdown.material_cost),
        },
        LineItem {
            label: "Base fee".to_string(),
            amount: currency.convert(breakdown.base_fee),
        },
    ];
    items.extend(configuration.features().iter().map(|feature| LineItem {
        label: feature.name.clone(),
        amount: currency.convert(feature.price),
    }));
    for (label, amount) in [
        (
            configuration.fin_type().label(),
            breakdown.fin_type_surcharge,
        ),
        ("Fin density", breakdown.fin_density_surcharge),
        (
            configuration.cap_material().label(),
            breakdown.cap_material_surcharge,
        ),
    ] {
        if amount > 0.0 {
            items.push(LineItem {
                label: label.to_string(),
                amount: currency.convert(amount),
            });
        }
    }
    items
}
