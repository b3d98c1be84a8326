//! Catalog listing subcommands: brands, models, materials, sizes and features.

use anyhow::Result;

use radiator_cli::output::{
    format_brands, format_dimension_limits, format_features, format_materials, format_models,
    format_sizes, render_json, OutputFormat,
};
use radiator_lib::{Catalog, DimensionLimits};

use crate::GlobalOptions;

pub fn handle_brands(catalog: &Catalog, global: &GlobalOptions) -> Result<()> {
    match global.format {
        OutputFormat::Json => render_json(catalog.brands())?,
        OutputFormat::Text => print!("{}", format_brands(catalog.brands())),
    }
    Ok(())
}

pub fn handle_models(catalog: &Catalog, global: &GlobalOptions, brand_id: &str) -> Result<()> {
    let brand = catalog.require_brand(brand_id)?;
    let models = catalog.models_for_brand(&brand.id);
    match global.format {
        OutputFormat::Json => render_json(&models)?,
        OutputFormat::Text => print!("{}", format_models(brand, &models)),
    }
    Ok(())
}

pub fn handle_materials(catalog: &Catalog, global: &GlobalOptions) -> Result<()> {
    match global.format {
        OutputFormat::Json => render_json(catalog.materials())?,
        OutputFormat::Text => print!("{}", format_materials(catalog.materials(), global.currency)),
    }
    Ok(())
}

pub fn handle_sizes(catalog: &Catalog, global: &GlobalOptions) -> Result<()> {
    match global.format {
        OutputFormat::Json => render_json(catalog.sizes())?,
        OutputFormat::Text => {
            print!("{}", format_sizes(catalog.sizes(), global.currency));
            print!("{}", format_dimension_limits(&DimensionLimits::default()));
        }
    }
    Ok(())
}

pub fn handle_features(catalog: &Catalog, global: &GlobalOptions) -> Result<()> {
    match global.format {
        OutputFormat::Json => render_json(catalog.features())?,
        OutputFormat::Text => print!("{}", format_features(catalog.features(), global.currency)),
    }
    Ok(())
}
