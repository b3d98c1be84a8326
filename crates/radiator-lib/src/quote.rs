//! Quote requests and where they are delivered.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::output::{Currency, QuoteSummary};

/// Customer contact details attached to a quote request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            message: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = non_blank(message.into());
        self
    }

    /// Name and email are required; the email must contain `@`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidContact {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(Error::InvalidContact {
                field: "email",
                reason: "must not be empty".to_string(),
            });
        }
        if !email.contains('@') {
            return Err(Error::InvalidContact {
                field: "email",
                reason: format!("'{email}' is not an email address"),
            });
        }
        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A validated request for an official quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub contact: ContactDetails,
    pub configuration: Configuration,
    pub summary: QuoteSummary,
    /// Total price in dollars at the time of submission.
    pub total_price: f64,
    pub submitted_at: DateTime<Utc>,
}

impl QuoteRequest {
    /// Build a request, pricing the configuration now.
    ///
    /// Fails when material or size is missing or the contact details are invalid.
    pub fn new(contact: ContactDetails, configuration: Configuration) -> Result<Self> {
        Self::at(contact, configuration, Currency::Usd, Utc::now())
    }

    /// As [`QuoteRequest::new`] with the summary shown in `currency`.
    pub fn with_currency(
        contact: ContactDetails,
        configuration: Configuration,
        currency: Currency,
    ) -> Result<Self> {
        Self::at(contact, configuration, currency, Utc::now())
    }

    /// As [`QuoteRequest::new`] with an explicit display currency and timestamp.
    pub fn at(
        contact: ContactDetails,
        configuration: Configuration,
        currency: Currency,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !configuration.is_complete() {
            return Err(Error::IncompleteConfiguration);
        }
        contact.validate()?;

        let summary = QuoteSummary::new(&configuration, currency);
        Ok(Self {
            total_price: configuration.total_price(),
            contact,
            configuration,
            summary,
            submitted_at,
        })
    }
}

/// Destination for submitted quote requests.
pub trait QuoteSink {
    fn submit(&mut self, request: &QuoteRequest) -> Result<()>;
}

/// Writes each request as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonQuoteSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonQuoteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> QuoteSink for JsonQuoteSink<W> {
    fn submit(&mut self, request: &QuoteRequest) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, request)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        info!(
            email = %request.contact.email,
            total_price = request.total_price,
            "quote request submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn complete_configuration() -> Configuration {
        let catalog = Catalog::builtin();
        Configuration::new()
            .with_material(catalog.material("brass").expect("brass").clone())
            .with_size(catalog.size("medium").expect("medium").clone())
    }

    #[test]
    fn rejects_incomplete_configuration() {
        let contact = ContactDetails::new("Somchai", "somchai@example.com");
        let err = QuoteRequest::new(contact, Configuration::new()).expect_err("incomplete");
        assert!(matches!(err, Error::IncompleteConfiguration));
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let contact = ContactDetails::new("Somchai", "somchai.example.com");
        let err = QuoteRequest::new(contact, complete_configuration()).expect_err("bad email");
        assert!(matches!(err, Error::InvalidContact { field: "email", .. }));
    }

    #[test]
    fn rejects_blank_name() {
        let contact = ContactDetails::new("  ", "a@b.co");
        let err = contact.validate().expect_err("blank name");
        assert!(matches!(err, Error::InvalidContact { field: "name", .. }));
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let contact = ContactDetails::new("A", "a@b.co")
            .with_phone("   ")
            .with_message(" call after 5 ");
        assert!(contact.phone.is_none());
        assert_eq!(contact.message.as_deref(), Some("call after 5"));
    }

    #[test]
    fn json_sink_writes_priced_request() {
        let contact = ContactDetails::new("Somchai", "somchai@example.com");
        let request = QuoteRequest::new(contact, complete_configuration()).expect("valid");
        let mut sink = JsonQuoteSink::new(Vec::new());
        sink.submit(&request).expect("written");

        let value: serde_json::Value =
            serde_json::from_slice(&sink.into_inner()).expect("valid json");
        assert_eq!(value["contact"]["email"], "somchai@example.com");
        assert_eq!(value["total_price"], request.total_price);
        assert!(value["contact"]["phone"].is_null());
    }
}
