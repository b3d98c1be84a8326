//! `quote` subcommand: validate and submit a quote request.

use std::fs::OpenOptions;
use std::io;

use anyhow::{Context, Result};

use radiator_cli::output::{format_quote_receipt, OutputFormat};
use radiator_lib::{Catalog, ContactDetails, JsonQuoteSink, QuoteRequest, QuoteSink};

use super::configure_session;
use crate::{ConfigArgs, ContactArgs, GlobalOptions};

pub fn handle_quote(
    catalog: &Catalog,
    global: &GlobalOptions,
    args: &ConfigArgs,
    contact_args: &ContactArgs,
) -> Result<()> {
    let session = configure_session(catalog, args)?;

    let mut contact = ContactDetails::new(contact_args.name.trim(), contact_args.email.trim());
    if let Some(phone) = &contact_args.phone {
        contact = contact.with_phone(phone.as_str());
    }
    if let Some(message) = &contact_args.message {
        contact = contact.with_message(message.as_str());
    }

    let request =
        QuoteRequest::with_currency(contact, session.configuration().clone(), global.currency)
            .context("quote request rejected")?;

    match &contact_args.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            JsonQuoteSink::new(file).submit(&request)?;
            if global.format == OutputFormat::Text {
                print!("{}", format_quote_receipt(&request));
                println!("Request written to {}", path.display());
            }
        }
        None => match global.format {
            OutputFormat::Json => JsonQuoteSink::new(io::stdout().lock()).submit(&request)?,
            OutputFormat::Text => print!("{}", format_quote_receipt(&request)),
        },
    }
    Ok(())
}
