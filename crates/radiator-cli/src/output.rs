//! Output formatting for catalogs, price summaries and quotes.
//!
//! Text renderers return `String`s so the command handlers decide where they
//! go; JSON goes straight to stdout via [`render_json`].

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use radiator_lib::catalog::{
    CarBrand, CarModel, DimensionLimits, Feature, Material, RadiatorPreset, RadiatorSize,
};
use radiator_lib::{
    Currency, MetalQuote, PresetComparison, QuoteRequest, QuoteSummary, Recommendation,
};

use crate::terminal::{format_money, supports_color, supports_unicode, ColorPalette};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when the locale is UTF-8 and respects
/// `NO_COLOR` and `TERM=dumb`.
pub fn print_logo() {
    use crate::terminal::colors;

    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────────╮{reset}
{cyan}│{orange}   R A D I A T O R   C O N F I G U R A T O R {cyan}│{reset}
{cyan}├──────────────────────────────────────────┤{reset}
{cyan}│{orange}                 [ C L I ]                {cyan}│{reset}
{cyan}╰──────────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+------------------------------------------+
|  RADIATOR CONFIGURATOR                   |
|  >> COMMAND LINE INTERFACE               |
+------------------------------------------+{reset}"
        );
    }
}

/// Write any serialisable value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

pub fn format_brands(brands: &[CarBrand]) -> String {
    let mut out = format!("Car brands ({}):\n", brands.len());
    let _ = writeln!(out, "{:<12} Name", "Id");
    for brand in brands {
        let _ = writeln!(out, "{:<12} {}", brand.id, brand.name);
    }
    out
}

pub fn format_models(brand: &CarBrand, models: &[&CarModel]) -> String {
    let mut out = format!("{} models ({}):\n", brand.name, models.len());
    let _ = writeln!(out, "{:<12} {:<12} Years", "Id", "Name");
    for model in models {
        let _ = writeln!(out, "{:<12} {:<12} {}", model.id, model.name, model.years);
    }
    out
}

pub fn format_materials(materials: &[Material], currency: Currency) -> String {
    let mut out = format!("Materials ({}):\n", materials.len());
    let _ = writeln!(out, "{:<12} {:<16} {:>14}", "Id", "Name", "Per sq in");
    for material in materials {
        let _ = writeln!(
            out,
            "{:<12} {:<16} {:>14}",
            material.id,
            material.name,
            format_money(currency.convert(material.price_per_square_inch), currency)
        );
    }
    out
}

pub fn format_sizes(sizes: &[RadiatorSize], currency: Currency) -> String {
    let mut out = format!("Radiator sizes ({}):\n", sizes.len());
    let _ = writeln!(
        out,
        "{:<10} {:<22} {:<16} {:>12}",
        "Id", "Name", "W x H x T (in)", "Base"
    );
    for size in sizes {
        let base = if size.kind.is_editable() {
            "computed".to_string()
        } else {
            format_money(currency.convert(size.base_price), currency)
        };
        let _ = writeln!(
            out,
            "{:<10} {:<22} {:<16} {:>12}",
            size.id,
            size.name,
            format_dimensions(size.width, size.height, size.thickness),
            base
        );
    }
    out
}

/// Input ranges accepted by the custom size editor.
pub fn format_dimension_limits(limits: &DimensionLimits) -> String {
    format!(
        "Custom size ranges: width {}-{} in, height {}-{} in, thickness {}-{} in (step {})\n",
        limits.width.0,
        limits.width.1,
        limits.height.0,
        limits.height.1,
        limits.thickness.0,
        limits.thickness.1,
        limits.thickness_step
    )
}

pub fn format_features(features: &[Feature], currency: Currency) -> String {
    let mut out = format!("Add-on features ({}):\n", features.len());
    let _ = writeln!(out, "{:<10} {:<28} {:>12}", "Id", "Name", "Price");
    for feature in features {
        let _ = writeln!(
            out,
            "{:<10} {:<28} {:>12}",
            feature.id,
            feature.name,
            format_money(currency.convert(feature.price), currency)
        );
    }
    out
}

/// Recommended radiator for a model, with its estimated price.
pub fn format_preset(
    model: &CarModel,
    preset: &RadiatorPreset,
    material: Option<&Material>,
    estimate: Option<f64>,
    currency: Currency,
) -> String {
    let mut out = format!(
        "Recommended radiator for {} ({}):\n",
        model.name, model.years
    );
    let _ = writeln!(
        out,
        "  Dimensions:   {} in",
        format_dimensions(preset.width, preset.height, preset.thickness)
    );
    let _ = writeln!(
        out,
        "  Fins:         {}, {} fpi",
        preset.fin_type.label(),
        preset.fin_density
    );
    let material_name = material
        .map(|m| m.name.as_str())
        .unwrap_or(preset.recommended_material.as_str());
    let _ = writeln!(out, "  Material:     {material_name}");
    let _ = writeln!(out, "  Cap:          {}", preset.cap_type);
    if let Some(estimate) = estimate {
        let _ = writeln!(
            out,
            "  Estimate:     {}",
            format_money(currency.convert(estimate), currency)
        );
    }
    out
}

/// Line-item price summary.
pub fn format_summary(summary: &QuoteSummary, palette: &ColorPalette) -> String {
    let currency = summary.currency;
    let mut out = String::from("Radiator configuration:\n");
    let _ = writeln!(
        out,
        "  Material:     {}",
        summary.material.as_deref().unwrap_or("not selected")
    );
    let _ = writeln!(
        out,
        "  Size:         {}",
        summary.size.as_deref().unwrap_or("not selected")
    );
    if let Some(dims) = &summary.dimensions {
        let _ = writeln!(
            out,
            "  Dimensions:   {}{} in{}",
            palette.cyan,
            format_dimensions(dims.width, dims.height, dims.thickness),
            palette.reset
        );
    }
    let _ = writeln!(
        out,
        "  Fins:         {}, {} fpi",
        summary.fin_type, summary.fin_density
    );
    let _ = writeln!(out, "  Cap:          {}", summary.cap_material);
    if !summary.features.is_empty() {
        let _ = writeln!(out, "  Features:     {}", summary.features.join(", "));
    }

    if summary.line_items.is_empty() {
        out.push_str("\nSelect a material and a size to see a price.\n");
        return out;
    }

    out.push('\n');
    for item in &summary.line_items {
        let _ = writeln!(
            out,
            "  {:<28} {:>14}",
            item.label,
            format_money(item.amount, currency)
        );
    }
    let _ = writeln!(
        out,
        "  {}{:<28} {:>14}{}",
        palette.white_bold,
        "Total",
        format_money(summary.total, currency),
        palette.reset
    );
    out
}

pub fn format_comparison(
    comparison: &PresetComparison,
    currency: Currency,
    palette: &ColorPalette,
) -> String {
    let (color, word) = if comparison.more_expensive {
        (palette.red, "more")
    } else {
        (palette.green, "less")
    };
    let mut out = format!("Compared with the {} preset:\n", comparison.model_name);
    let _ = writeln!(
        out,
        "  Preset estimate: {}",
        format_money(currency.convert(comparison.preset_price), currency)
    );
    let _ = writeln!(
        out,
        "  Your radiator:   {}",
        format_money(currency.convert(comparison.current_price), currency)
    );
    let _ = writeln!(
        out,
        "  {color}{} {word} ({:.2}%){}",
        format_money(currency.convert(comparison.difference.abs()), currency),
        comparison.percentage.abs(),
        palette.reset
    );
    out
}

pub fn format_recommendation(recommendation: &Recommendation) -> String {
    let mut out = String::from("Recommendations:\n");
    let _ = writeln!(
        out,
        "  {}: {}",
        recommendation.fin_type.label(),
        recommendation.fin_type_advice
    );
    let _ = writeln!(
        out,
        "  {} fpi: {}",
        recommendation.fin_density, recommendation.fin_density_advice
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        recommendation.cap_material.label(),
        recommendation.cap_material_advice
    );
    let _ = writeln!(
        out,
        "  Recommended cap pressure: {}",
        recommendation.cap_pressure
    );
    out
}

pub fn format_market(quotes: &[MetalQuote], palette: &ColorPalette) -> String {
    let mut out = String::from("Metal market prices:\n");
    let _ = writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>8}  Updated",
        "Metal", "Per kg", "Per lb", "Change"
    );
    for quote in quotes {
        let color = if quote.is_rising() {
            palette.green
        } else {
            palette.red
        };
        let per_kg = format!("{:.2} {}", quote.price_per_kg, quote.currency);
        let per_lb = format!("{:.2} {}", quote.price_per_lb(), quote.currency);
        let _ = writeln!(
            out,
            "{:<8} {per_kg:>12} {per_lb:>12} {color}{:>+8.2}{}  {}",
            quote.metal,
            quote.change,
            palette.reset,
            quote.updated.format("%Y-%m-%d %H:%M UTC")
        );
    }
    out
}

pub fn format_quote_receipt(request: &QuoteRequest) -> String {
    let mut out = format!(
        "Quote request submitted for {} <{}>\n",
        request.contact.name, request.contact.email
    );
    if let Some(phone) = &request.contact.phone {
        let _ = writeln!(out, "  Phone:   {phone}");
    }
    let _ = writeln!(
        out,
        "  Total:   {}",
        format_money(request.summary.total, request.summary.currency)
    );
    out.push_str("We'll contact you shortly with your official quote.\n");
    out
}

fn format_dimensions(width: f64, height: f64, thickness: f64) -> String {
    format!("{width} x {height} x {thickness}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiator_lib::{Catalog, Configuration};

    fn copper_custom() -> Configuration {
        let catalog = Catalog::builtin();
        Configuration::new()
            .with_material(catalog.material("copper").expect("copper").clone())
            .with_size(catalog.size("custom").expect("custom").clone())
            .with_fin_density(10)
    }

    #[test]
    fn summary_shows_total_and_dimensions() {
        let summary = QuoteSummary::new(&copper_custom(), Currency::Usd);
        let text = format_summary(&summary, &ColorPalette::plain());
        assert!(text.contains("Copper"));
        assert!(text.contains("24 x 16 x 2.5 in"));
        assert!(text.contains("$496.15"));
    }

    #[test]
    fn incomplete_summary_prompts_for_selection() {
        let summary = QuoteSummary::new(&Configuration::new(), Currency::Usd);
        let text = format_summary(&summary, &ColorPalette::plain());
        assert!(text.contains("not selected"));
        assert!(text.contains("Select a material and a size"));
    }

    #[test]
    fn sizes_table_marks_computed_base() {
        let text = format_sizes(Catalog::builtin().sizes(), Currency::Thb);
        assert!(text.contains("computed"));
        assert!(text.contains("฿3,600.00"));
    }

    #[test]
    fn dimension_limits_render_editor_ranges() {
        let text = format_dimension_limits(&DimensionLimits::default());
        assert!(text.contains("width 8-48 in"));
        assert!(text.contains("thickness 1-5 in (step 0.5)"));
    }
}
