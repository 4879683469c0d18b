//! Adopt-a-pet
//!
//! Main entry point for the game.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use pet_save::SaveStore;
use petcare::{Session, Settings};

/// Adopt-a-pet: look after your pets from the terminal
#[derive(Parser, Debug)]
#[command(name = "petcare")]
#[command(author, version, about = "Adopt-a-pet - Look after your pets!", long_about = None)]
struct Args {
    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Save file location (defaults to the platform data directory)
    #[arg(long = "save-file")]
    save_file: Option<PathBuf>,

    /// Don't save automatically on quit
    #[arg(long = "no-autosave")]
    no_autosave: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let store = match args.save_file {
        Some(path) => SaveStore::new(path),
        None => SaveStore::default_location(),
    };
    info!("Using save file {}", store.path().display());

    let settings = Settings {
        store,
        autosave: !args.no_autosave,
        player_name: args.name,
    };

    let stdin = io::stdin();
    let mut session = Session::start(stdin.lock(), io::stdout(), settings)?;
    session.run()?;
    Ok(())
}
