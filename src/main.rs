//! # Emporium Main Entry Point
//!
//! Generates a shop catalog and writes it as JSON to stdout or a file.

use clap::Parser;
use emporium::{
    save_catalog, write_catalog, Category, CatalogGenerator, CatalogSummary, EmporiumResult,
    GenerationConfig, Generator,
};
use log::{error, info};
use std::path::PathBuf;

/// Command line arguments for the catalog generator.
#[derive(Parser, Debug)]
#[command(name = "emporium")]
#[command(about = "Generates a synthetic fantasy-shop catalog with German and English texts")]
#[command(version)]
struct Args {
    /// Random seed for catalog generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Restrict generation to a category (repeatable)
    #[arg(short, long = "category")]
    categories: Vec<Category>,

    /// Generate exactly this many items per category
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Write the catalog to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a catalog summary to stderr
    #[arg(long)]
    summary: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("Catalog generation failed: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(log_level))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing subscriber installed");
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .target(env_logger::Target::Stderr)
            .init();
    }
}

fn run(args: &Args) -> EmporiumResult<()> {
    let seed = args.seed.unwrap_or(emporium::config::DEFAULT_SEED);
    info!("Starting Emporium v{} with seed {}", emporium::VERSION, seed);

    let mut config = GenerationConfig::new(seed);
    if !args.categories.is_empty() {
        config = config.with_categories(args.categories.clone());
    }
    if let Some(count) = args.count {
        config = config.with_fixed_count(count);
    }

    let generator = CatalogGenerator::new();
    let mut rng = emporium::generation::utils::create_rng(&config);
    let catalog = generator.generate(&config, &mut rng)?;
    generator.validate(&catalog, &config)?;

    match &args.output {
        Some(path) => {
            save_catalog(&catalog, path, args.pretty)?;
            info!("Wrote {} items to {}", catalog.len(), path.display());
        }
        None => write_catalog(&catalog, std::io::stdout().lock(), args.pretty)?,
    }

    if args.summary {
        let summary = CatalogSummary::from_items(&catalog);
        eprintln!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
