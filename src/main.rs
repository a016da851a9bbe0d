// src/main.rs - desktop entry point

use std::path::PathBuf;

use clap::Parser;

use share_card::config::CardConfig;
use share_card::error::Result;
use share_card::{logging, model, ui};

#[derive(Parser)]
#[command(
    name = "share-card",
    version = share_card::VERSION,
    about = "Renders a social-share product card in a desktop window",
    long_about = None
)]
struct Cli {
    /// TOML settings file for the shell.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON product payload to render instead of the built-in sample.
    #[arg(short, long, value_name = "FILE")]
    product: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CardConfig::load(path)?,
        None => CardConfig::default(),
    };

    let filter = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        config.log_filter.as_str()
    };
    logging::init(filter)?;

    tracing::info!("Starting share card v{}", share_card::VERSION);

    // The CLI payload wins over the configured one; with neither, the
    // built-in sample renders.
    let product = match cli.product.as_deref().or(config.product_path.as_deref()) {
        Some(path) => {
            tracing::info!("Loading product payload from {}", path.display());
            model::load_product(path)?
        }
        None => model::sample_product(),
    };
    model::set_startup_product(product)?;

    launch_window(&config);
    Ok(())
}

fn launch_window(config: &CardConfig) {
    use dioxus::desktop::{tao::dpi::LogicalSize, Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(config.window.title.clone())
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
