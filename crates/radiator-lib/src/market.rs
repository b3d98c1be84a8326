//! Reference metal prices shown alongside the configurator.
//!
//! Quotes are display data only and do not feed the pricing function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Pounds per kilogram.
pub const POUNDS_PER_KG: f64 = 2.20462;

/// Market price of one metal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalQuote {
    pub metal: String,
    /// Price per kilogram in `currency`.
    pub price_per_kg: f64,
    pub currency: String,
    /// Change since the previous quote, in `currency` per kilogram.
    pub change: f64,
    pub updated: DateTime<Utc>,
}

impl MetalQuote {
    /// Price per pound in `currency`.
    pub fn price_per_lb(&self) -> f64 {
        self.price_per_kg / POUNDS_PER_KG
    }

    pub fn is_rising(&self) -> bool {
        self.change > 0.0
    }
}

/// Source of metal quotes.
///
/// Implementations may talk to a remote service; the library ships only the
/// fixed reference feed. A feed that cannot reach its source reports
/// [`Error::MarketFeed`](crate::Error::MarketFeed).
pub trait MarketFeed {
    /// Current quotes, one per metal.
    fn quotes(&self) -> Result<Vec<MetalQuote>>;

    /// Quote for a single metal, if the feed carries it.
    fn quote(&self, metal: &str) -> Result<Option<MetalQuote>> {
        let metal = metal.trim().to_lowercase();
        Ok(self.quotes()?.into_iter().find(|q| q.metal == metal))
    }
}

/// Feed returning fixed Thai market reference prices.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketFeed {
    updated: Option<DateTime<Utc>>,
}

impl StaticMarketFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the `updated` timestamp instead of using the current time.
    pub fn with_timestamp(updated: DateTime<Utc>) -> Self {
        Self {
            updated: Some(updated),
        }
    }
}

impl MarketFeed for StaticMarketFeed {
    fn quotes(&self) -> Result<Vec<MetalQuote>> {
        let updated = self.updated.unwrap_or_else(Utc::now);
        Ok([("copper", 129.50, 1.50), ("brass", 95.25, -0.75)]
            .into_iter()
            .map(|(metal, price_per_kg, change)| MetalQuote {
                metal: metal.to_string(),
                price_per_kg,
                currency: "THB".to_string(),
                change,
                updated,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn feed() -> StaticMarketFeed {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        StaticMarketFeed::with_timestamp(at)
    }

    #[test]
    fn static_feed_carries_copper_and_brass() {
        let quotes = feed().quotes().expect("static feed");
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].metal, "copper");
        assert_eq!(quotes[0].price_per_kg, 129.50);
        assert!(quotes[0].is_rising());
        assert!(!quotes[1].is_rising());
    }

    #[test]
    fn converts_to_price_per_pound() {
        let brass = feed().quote("Brass").expect("feed").expect("brass quote");
        assert!((brass.price_per_lb() - 95.25 / 2.20462).abs() < 1e-9);
    }

    #[test]
    fn unknown_metal_is_absent() {
        assert!(feed().quote("gold").expect("feed").is_none());
    }

    struct OfflineFeed;

    impl MarketFeed for OfflineFeed {
        fn quotes(&self) -> Result<Vec<MetalQuote>> {
            Err(crate::Error::MarketFeed {
                message: "price service unreachable".to_string(),
            })
        }
    }

    #[test]
    fn single_quote_lookup_propagates_feed_failure() {
        let err = OfflineFeed.quote("copper").unwrap_err();
        assert!(matches!(err, crate::Error::MarketFeed { .. }));
        assert_eq!(
            err.to_string(),
            "market feed failed: price service unreachable"
        );
    }
}
