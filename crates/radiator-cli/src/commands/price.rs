//! `price` subcommand: price a configuration, optionally against its preset.

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

use radiator_cli::output::{
    format_comparison, format_recommendation, format_summary, render_json, OutputFormat,
};
use radiator_cli::terminal::ColorPalette;
use radiator_lib::{Catalog, PresetComparison, PriceBreakdown, QuoteSummary, Recommendation};

use super::configure_session;
use crate::{ConfigArgs, GlobalOptions};

/// JSON shape of the `price` subcommand. `breakdown` and `comparison` are in dollars.
#[derive(Serialize)]
struct PriceReport {
    summary: QuoteSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<PriceBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<PresetComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<Recommendation>,
}

pub fn handle_price(
    catalog: &Catalog,
    global: &GlobalOptions,
    args: &ConfigArgs,
    compare: bool,
    advice: bool,
) -> Result<()> {
    if compare && args.model.is_none() {
        bail!("--compare needs --model to know which preset to compare against");
    }

    let session = configure_session(catalog, args)?;
    let configuration = session.configuration();
    debug!(
        revision = session.revision(),
        total = session.total_price(),
        "configuration priced"
    );

    let comparison = if compare {
        session
            .selected_model()
            .and_then(|model| PresetComparison::for_model(catalog, model, configuration))
    } else {
        None
    };
    let recommendation = advice.then(|| Recommendation::for_configuration(configuration));
    let summary = QuoteSummary::new(configuration, global.currency);

    match global.format {
        OutputFormat::Json => render_json(&PriceReport {
            summary,
            breakdown: configuration.price_breakdown(),
            comparison,
            recommendation,
        })?,
        OutputFormat::Text => {
            let palette = ColorPalette::detect();
            print!("{}", format_summary(&summary, &palette));
            if let Some(comparison) = &comparison {
                println!();
                print!(
                    "{}",
                    format_comparison(comparison, global.currency, &palette)
                );
            } else if compare {
                println!("\nNo preset comparison available for this configuration.");
            }
            if let Some(recommendation) = &recommendation {
                println!();
                print!("{}", format_recommendation(recommendation));
            }
        }
    }
    Ok(())
}
