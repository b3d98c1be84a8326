//! Radiator configurator library entry points.
//!
//! This crate holds the catalog of materials, sizes, add-on features and
//! vehicle presets, the pricing function, the immutable configuration record
//! and the session state a front-end drives. Front-ends (the CLI) should only
//! depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod comparison;
pub mod configuration;
pub mod error;
pub mod market;
pub mod output;
pub mod pricing;
pub mod quote;
pub mod recommendation;
pub mod session;

pub use catalog::{
    CarBrand, CarModel, Catalog, DimensionLimits, Feature, Material, RadiatorPreset,
    RadiatorSize, SizeKind,
};
pub use comparison::PresetComparison;
pub use configuration::{toggle_feature, ConfigEdit, Configuration};
pub use error::{Error, Result};
pub use market::{MarketFeed, MetalQuote, StaticMarketFeed};
pub use output::{Currency, QuoteSummary};
pub use pricing::{
    calculate_total_price, price_breakdown, CapMaterial, FinType, PriceBreakdown, PricingOptions,
};
pub use quote::{ContactDetails, JsonQuoteSink, QuoteRequest, QuoteSink};
pub use recommendation::Recommendation;
pub use session::{ConfiguratorSession, Screen};
