use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(author, version, about = "A terminal deck and long-form section viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to present (shorthand for `present`)
    #[arg(short = 'f', long = "file")]
    deck_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck in the TUI
    Present {
        /// Deck file (TOML)
        deck: PathBuf,
        /// Section id to start at instead of the first section
        #[arg(short, long)]
        start: Option<String>,
    },
    /// Print a deck's outline (ordinal, id, label per section)
    Outline { deck: PathBuf },
    /// Validate a deck file
    Check { deck: PathBuf },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Handle shorthand presentation (-f flag)
    if let Some(deck) = cli.deck_file {
        return commands::present::run(config, &deck, None);
    }

    match cli.command {
        Some(Commands::Present { deck, start }) => commands::present::run(config, &deck, start),
        Some(Commands::Outline { deck }) => commands::outline::run(&deck),
        Some(Commands::Check { deck }) => commands::check::run(&deck),
        None => Err(anyhow!(
            "no deck file given; try `snapdeck present <deck.toml>`"
        )),
    }
}
