use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::Path;

mod cli;
mod clipboard;
mod core;
mod generators;
mod history;
mod logging;
mod models;
mod storage;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::clipboard::{SystemClipboard, FEEDBACK_DURATION};
use crate::core::config::Config;
use crate::core::PasswordForm;
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config).context("failed to initialize logging")?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let store: Box<dyn KeyValueStore> = if args.ephemeral {
        log::info!("Using in-memory storage; recent passwords will not be kept");
        Box::new(MemoryStore::new())
    } else {
        let path = args.store.clone().unwrap_or_else(|| config.store_path.clone());
        let store = JsonFileStore::new(path);
        log::info!("Using store at {}", store.path().display());
        Box::new(store)
    };

    let mut form = PasswordForm::new(config.generation_options(), store);
    // One-shot commands exit right after copying; the menu keeps the process alive
    let mut clipboard = if args.command.is_some() {
        SystemClipboard::holding(FEEDBACK_DURATION)
    } else {
        SystemClipboard::new()
    };
    if let Some(hold) = clipboard.hold() {
        log::debug!("Clipboard contents held for up to {:?} after copying", hold);
    }
    let mut stdout = io::stdout().lock();

    let succeeded = match args.command {
        Some(CliCommand::Generate { length, no_numbers, no_letters, no_special, copy }) => {
            cli::handlers::apply_overrides(&mut form, length, no_numbers, no_letters, no_special);
            cli::handlers::handle_generate(&mut form, &mut clipboard, copy, args.json, &mut stdout)?
        }
        Some(CliCommand::History) => cli::handlers::handle_history(&form, args.json, &mut stdout)?,
        Some(CliCommand::Copy { position }) => {
            cli::handlers::handle_copy(&mut form, &mut clipboard, position as usize, args.json, &mut stdout)?
        }
        None => {
            drop(stdout);
            cli::menu::run_cli_menu(&mut form, &mut clipboard)
                .map_err(|e| anyhow::anyhow!("interactive form failed: {}", e))?;
            true
        }
    };

    log::info!("✅ PassForge finished");

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
