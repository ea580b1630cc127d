// src/main.rs

use clap::Parser;
use log::error;
use parking_lot_sim::app_config::AppConfig;
use parking_lot_sim::core::file_system::FileSystem;
use parking_lot_sim::{initialize_environment, run_script};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "parking_lot", about = "Run parking lot commands from a file")]
struct Args {
    /// Command file: one command per line, or a JSON command list ending in .json
    file: Option<PathBuf>,
}

fn main() {
    initialize_environment();
    let args = Args::parse();

    let Some(file) = args.file else {
        eprintln!("Please provide a filename as a parameter.");
        process::exit(1);
    };

    let config = match AppConfig::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let script = match FileSystem::load_script(&file) {
        Ok(script) => script,
        Err(e) => {
            error!("Failed to load {}: {}", file.display(), e);
            eprintln!("Error opening file: {}", e);
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = run_script(script, &config, &mut output) {
        error!("Failed to run {}: {}", file.display(), e);
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}
