use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use radiator_cli::output::{print_logo, OutputFormat};
use radiator_lib::{CapMaterial, Currency, FinType};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Radiator configurator: catalogs, presets and pricing")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Replace the built-in material table with a CSV file.
    #[arg(long, global = true, env = "RADIATOR_MATERIAL_DATA")]
    pub materials: Option<PathBuf>,

    /// Replace the built-in feature table with a CSV file.
    #[arg(long, global = true, env = "RADIATOR_FEATURE_DATA")]
    pub features: Option<PathBuf>,

    /// Currency prices are displayed in (usd or thb).
    #[arg(long, global = true, default_value = "usd")]
    pub currency: Currency,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    pub no_logo: bool,
}

/// The radiator being configured. Later options override what a `--model`
/// preset seeded.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Seed the configuration from this car model's recommended radiator.
    #[arg(long)]
    pub model: Option<String>,

    /// Radiator size id (small, medium, large, custom).
    #[arg(long)]
    pub size: Option<String>,

    /// Core material id.
    #[arg(long)]
    pub material: Option<String>,

    /// Core width in inches. Invalid values are treated as 0.
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Core height in inches. Invalid values are treated as 0.
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Core thickness in inches. Invalid values are treated as 0.
    #[arg(long, allow_hyphen_values = true)]
    pub thickness: Option<String>,

    /// Fin profile (straight, wavy, louvered, v-shaped).
    #[arg(long)]
    pub fin_type: Option<FinType>,

    /// Fins per inch.
    #[arg(long)]
    pub fin_density: Option<u32>,

    /// Cap material (plastic, brass, copper).
    #[arg(long = "cap")]
    pub cap: Option<CapMaterial>,

    /// Toggle an add-on feature; repeat for several.
    #[arg(long = "feature", id = "feature")]
    pub feature_ids: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List car brands.
    Brands,
    /// List the models of a car brand.
    Models {
        #[arg(long)]
        brand: String,
    },
    /// List core materials.
    Materials,
    /// List radiator sizes.
    Sizes,
    /// List add-on features.
    Features,
    /// Show the recommended radiator for a car model.
    Preset {
        #[arg(long)]
        model: String,
    },
    /// Price a configuration.
    Price {
        #[command(flatten)]
        config: ConfigArgs,
        /// Compare against the preset of `--model`.
        #[arg(long)]
        compare: bool,
        /// Include fin and cap advice.
        #[arg(long)]
        advice: bool,
    },
    /// Submit a quote request for a configuration.
    Quote {
        #[command(flatten)]
        config: ConfigArgs,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Show reference metal market prices.
    Market,
}

#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    /// Additional comments for the quote.
    #[arg(long)]
    pub message: Option<String>,

    /// Append the JSON quote request to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.global.no_logo && cli.global.format == OutputFormat::Text {
        print_logo();
    }

    let catalog = commands::load_catalog(&cli.global)?;
    let global = &cli.global;

    match cli.command {
        Command::Brands => commands::catalog::handle_brands(&catalog, global),
        Command::Models { brand } => commands::catalog::handle_models(&catalog, global, &brand),
        Command::Materials => commands::catalog::handle_materials(&catalog, global),
        Command::Sizes => commands::catalog::handle_sizes(&catalog, global),
        Command::Features => commands::catalog::handle_features(&catalog, global),
        Command::Preset { model } => commands::preset::handle_preset(&catalog, global, &model),
        Command::Price {
            config,
            compare,
            advice,
        } => commands::price::handle_price(&catalog, global, &config, compare, advice),
        Command::Quote { config, contact } => {
            commands::quote::handle_quote(&catalog, global, &config, &contact)
        }
        Command::Market => commands::market::handle_market(global),
    }
}

/// Log to stderr so stdout stays parseable; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
