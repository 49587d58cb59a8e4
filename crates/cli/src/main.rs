//! Stylist CLI: the main entry point.
//!
//! Commands:
//! - `init`        Write a default config file
//! - `generate`    Compose a random outfit from a wardrobe
//! - `swap`        List (or apply) replacements for one slot of an outfit
//! - `candidates`  List items of a category that go with some fixed items
//! - `check`       Validate a hand-edited outfit
//! - `events`      Show the event → formality table
//! - `config`      Show, validate or locate the configuration

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use stylist_core::{Category, Slot};

mod commands;

#[derive(Parser)]
#[command(
    name = "stylist",
    about = "Stylist: compose outfits from your wardrobe",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Config file to use instead of ~/.stylist/config.toml
    #[arg(short, long, global = true, env = "STYLIST_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Compose a random outfit
    Generate {
        /// Wardrobe snapshot (JSON array of items)
        #[arg(short, long, env = "STYLIST_WARDROBE")]
        wardrobe: Option<PathBuf>,

        /// Event to dress for, e.g. "work/office" or "date night"
        #[arg(short, long)]
        event: Option<String>,

        /// Seed the generator for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Print the outfit as JSON
        #[arg(long)]
        json: bool,
    },

    /// List replacements for one slot of an outfit
    Swap {
        #[arg(short, long, env = "STYLIST_WARDROBE")]
        wardrobe: Option<PathBuf>,

        /// Outfit JSON file, as printed by `generate --json`
        #[arg(short, long)]
        outfit: PathBuf,

        /// Slot to swap: top, bottom, dress, outerwear, shoes or accessory
        #[arg(short, long)]
        slot: Slot,

        /// Commit this item into the slot and print the new outfit
        #[arg(long)]
        apply: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List items of a category compatible with some fixed items
    Candidates {
        #[arg(short, long, env = "STYLIST_WARDROBE")]
        wardrobe: Option<PathBuf>,

        /// Category to list
        #[arg(long)]
        category: Category,

        /// Ids of items already chosen
        #[arg(long = "with", value_delimiter = ',')]
        with: Vec<String>,

        #[arg(short, long)]
        event: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Validate an outfit against the styling rules
    Check {
        #[arg(short, long, env = "STYLIST_WARDROBE")]
        wardrobe: Option<PathBuf>,

        #[arg(short, long)]
        outfit: PathBuf,
    },

    /// Show the event → formality table
    Events {
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Print the config file path
    Path,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `--json` output stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    let logs = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        logs.json().init();
    } else {
        logs.init();
    }

    if let Err(e) = run(cli.command, cli.config.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Init { force } => commands::init::run(config_path, force)?,
        Commands::Generate {
            wardrobe,
            event,
            seed,
            json,
        } => commands::compose::generate(config_path, wardrobe, event.as_deref(), seed, json)?,
        Commands::Swap {
            wardrobe,
            outfit,
            slot,
            apply,
            json,
        } => commands::compose::swap(config_path, wardrobe, &outfit, slot, apply, json)?,
        Commands::Candidates {
            wardrobe,
            category,
            with,
            event,
            json,
        } => commands::compose::candidates(
            config_path,
            wardrobe,
            category,
            &with,
            event.as_deref(),
            json,
        )?,
        Commands::Check { wardrobe, outfit } => {
            commands::compose::check(config_path, wardrobe, &outfit)?
        }
        Commands::Events { json } => commands::events::run(json)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(config_path)?,
            ConfigAction::Validate => commands::config_cmd::validate(config_path)?,
            ConfigAction::Path => commands::config_cmd::path(config_path)?,
        },
    }

    Ok(())
}
