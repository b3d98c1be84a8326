use thiserror::Error;

/// Convenient result alias for the radiator configurator library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a material id is not present in the catalog.
    #[error("unknown material: {id}")]
    UnknownMaterial { id: String },

    /// Raised when a radiator size id is not present in the catalog.
    #[error("unknown radiator size: {id}")]
    UnknownSize { id: String },

    /// Raised when a feature id is not present in the catalog.
    #[error("unknown feature: {id}")]
    UnknownFeature { id: String },

    /// Raised when a car brand id is not present in the catalog.
    #[error("unknown car brand: {id}")]
    UnknownBrand { id: String },

    /// Raised when a car model could not be found in the catalog.
    #[error("unknown car model: {name}{}", format_suggestions(.suggestions))]
    UnknownModel {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a model exists but has no recommended radiator.
    #[error("no radiator preset available for model {model_id}")]
    PresetNotFound { model_id: String },

    /// Raised when an action needs a selected car model and none is set.
    #[error("no car model selected")]
    NoModelSelected,

    /// Raised when catalog data fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when duplicate ids are encountered during catalog load.
    #[error("duplicate catalog id encountered: {id}")]
    DuplicateCatalogId { id: String },

    /// Raised when a quote is requested before material and size are chosen.
    #[error("configuration is incomplete: select a material and a size first")]
    IncompleteConfiguration,

    /// Raised when contact details on a quote request are unusable.
    #[error("invalid contact {field}: {reason}")]
    InvalidContact { field: &'static str, reason: String },

    /// Raised when a named option (fin type, cap material, currency) is not recognised.
    #[error("unknown {kind} '{value}'; expected {expected}")]
    InvalidOption {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Raised by [`MarketFeed`](crate::market::MarketFeed) implementations that
    /// cannot reach their price source.
    #[error("market feed failed: {message}")]
    MarketFeed { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_without_suggestions_is_plain() {
        let err = Error::UnknownModel {
            name: "zzz".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown car model: zzz");
    }

    #[test]
    fn unknown_model_lists_multiple_suggestions() {
        let err = Error::UnknownModel {
            name: "mazda".to_string(),
            suggestions: vec!["mazda2".to_string(), "mazda3".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown car model: mazda. Did you mean one of: 'mazda2', 'mazda3'?"
        );
    }
}
