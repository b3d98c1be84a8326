//! `market` subcommand: reference metal prices.

use anyhow::{Context, Result};

use radiator_cli::output::{format_market, render_json, OutputFormat};
use radiator_cli::terminal::ColorPalette;
use radiator_lib::{MarketFeed, StaticMarketFeed};

use crate::GlobalOptions;

pub fn handle_market(global: &GlobalOptions) -> Result<()> {
    let feed = StaticMarketFeed::new();
    let quotes = feed.quotes().context("failed to fetch metal prices")?;
    match global.format {
        OutputFormat::Json => render_json(&quotes)?,
        OutputFormat::Text => print!("{}", format_market(&quotes, &ColorPalette::detect())),
    }
    Ok(())
}
