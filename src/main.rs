mod api;
mod board;
mod cli;
mod config;
mod feed;
mod logging;
mod model;
mod session;
mod tui;
mod validate;

use std::process;

use clap::Parser;

use cli::Cli;
use config::Config;
use session::SessionStore;

fn main() {
    let args = Cli::parse();

    let root = SessionStore::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let store = match SessionStore::new(&root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize session storage: {e}");
            process::exit(1);
        }
    };

    let _logger = match logging::init(&root.join("logs")) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start logging: {e}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let result = match args.command {
        Some(command) => cli::run(command, &config, &store),
        None => tui::run(&config, &store).map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
