//! `preset` subcommand: a model's recommended radiator.

use anyhow::Result;
use serde::Serialize;

use radiator_cli::output::{format_preset, render_json, OutputFormat};
use radiator_lib::catalog::{CarModel, RadiatorPreset};
use radiator_lib::comparison::estimate_preset_price;
use radiator_lib::{Catalog, Error};

use crate::GlobalOptions;

#[derive(Serialize)]
struct PresetReport<'a> {
    model: &'a CarModel,
    preset: &'a RadiatorPreset,
    estimated_price: Option<f64>,
}

pub fn handle_preset(catalog: &Catalog, global: &GlobalOptions, model_id: &str) -> Result<()> {
    let model = catalog.require_model(model_id)?;
    let preset = catalog
        .preset_for_model(&model.id)
        .ok_or_else(|| Error::PresetNotFound {
            model_id: model.id.clone(),
        })?;
    let material = catalog.material(&preset.recommended_material);
    let estimated_price = material.map(|m| estimate_preset_price(preset, m));

    match global.format {
        OutputFormat::Json => render_json(&PresetReport {
            model,
            preset,
            estimated_price: estimated_price.map(|p| global.currency.convert(p)),
        })?,
        OutputFormat::Text => print!(
            "{}",
            format_preset(model, preset, material, estimated_price, global.currency)
        ),
    }
    Ok(())
}
