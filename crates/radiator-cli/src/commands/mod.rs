// Subcommand handlers.
//
// main.rs parses arguments and dispatches here; each module owns one group of
// subcommands. Shared catalog and configuration setup lives in this file.

pub mod catalog;
pub mod market;
pub mod preset;
pub mod price;
pub mod quote;

use anyhow::{Context, Result};
use tracing::debug;

use radiator_lib::catalog::{parse_dimension, CUSTOM_SIZE_ID};
use radiator_lib::{Catalog, ConfigEdit, ConfiguratorSession};

use crate::{ConfigArgs, GlobalOptions};

/// Built-in catalog with any CSV overrides from the global options applied.
pub fn load_catalog(global: &GlobalOptions) -> Result<Catalog> {
    let mut catalog = Catalog::builtin().clone();

    if let Some(path) = &global.materials {
        catalog = catalog
            .with_materials_from_path(path)
            .with_context(|| format!("failed to load material data from {}", path.display()))?;
    }
    if let Some(path) = &global.features {
        catalog = catalog
            .with_features_from_path(path)
            .with_context(|| format!("failed to load feature data from {}", path.display()))?;
    }

    Ok(catalog)
}

/// Drive a session through the edits described by `args`.
///
/// Order: preset, size, material, features, fin and cap, then dimensions.
/// Dimensions given without a size, or with a standard size, switch to the
/// custom size first; a standard size's dimensions carry over as the start.
pub fn configure_session<'a>(
    catalog: &'a Catalog,
    args: &ConfigArgs,
) -> Result<ConfiguratorSession<'a>> {
    let mut session = ConfiguratorSession::new(catalog);

    if let Some(model) = &args.model {
        session.select_model(model)?;
        session
            .apply_preset_for_selected_model()
            .with_context(|| format!("cannot seed configuration from model '{model}'"))?;
    }
    if let Some(size) = &args.size {
        session.select_size(size)?;
    }
    if let Some(material) = &args.material {
        session.select_material(material)?;
    }
    for feature in &args.feature_ids {
        session.toggle_feature(feature)?;
    }
    if let Some(fin_type) = args.fin_type {
        session.edit(ConfigEdit::FinType(fin_type));
    }
    if let Some(fin_density) = args.fin_density {
        session.edit(ConfigEdit::FinDensity(fin_density));
    }
    if let Some(cap) = args.cap {
        session.edit(ConfigEdit::CapMaterial(cap));
    }

    let dimensions = [
        dimension_edit(args.width.as_deref(), ConfigEdit::Width),
        dimension_edit(args.height.as_deref(), ConfigEdit::Height),
        dimension_edit(args.thickness.as_deref(), ConfigEdit::Thickness),
    ];
    if dimensions.iter().any(Option::is_some) {
        let current = session.configuration().size().cloned();
        if !current.as_ref().is_some_and(|size| size.kind.is_editable()) {
            debug!("dimensions given without an editable size; selecting the custom size");
            session.select_size(CUSTOM_SIZE_ID)?;
            if let Some(standard) = current {
                session.edit(ConfigEdit::Width(standard.width));
                session.edit(ConfigEdit::Height(standard.height));
                session.edit(ConfigEdit::Thickness(standard.thickness));
            }
        }
    }
    for edit in dimensions.into_iter().flatten() {
        session.edit(edit);
    }

    Ok(session)
}

fn dimension_edit(raw: Option<&str>, edit: fn(f64) -> ConfigEdit) -> Option<ConfigEdit> {
    raw.map(|raw| edit(parse_dimension(raw)))
}
