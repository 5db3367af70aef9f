//! folio - a personal portfolio page for the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;

use folio_app::{config, ConfigThemeStore};
use folio_core::{Portfolio, Theme};

/// A personal portfolio page for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A personal portfolio page for the terminal", long_about = None)]
struct Args {
    /// Path to a portfolio content file (TOML); defaults to the built-in page
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Start with this theme instead of the persisted one
    #[arg(long, value_name = "THEME", value_parser = parse_theme)]
    theme: Option<Theme>,
}

fn parse_theme(raw: &str) -> Result<Theme, String> {
    raw.parse().map_err(|e: folio_core::Error| e.to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    folio_core::logging::init()?;

    let mut settings = config::load_settings();
    if let Some(theme) = args.theme {
        // One-shot override; persisted only if the user toggles later
        settings.theme.mode = theme;
    }

    let portfolio = match &args.path {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::sample(),
    };

    tracing::info!(
        "Rendering portfolio for {} ({} theme)",
        portfolio.profile.name,
        settings.theme.mode
    );

    let store = ConfigThemeStore::open_default(settings);
    folio_tui::run(portfolio, store)?;
    Ok(())
}
