//! Collidascope demo entry point.
//!
//! Runs a small friend/enemy world through the collision dispatcher:
//!
//! 1. Load `collidascope.ini` (or the file given with `--config`), falling
//!    back to defaults
//! 2. Spawn the objects and register the strategies each one contributes
//! 3. Run the configured number of ticks: movement, detection, tracking,
//!    prioritized handling
//! 4. Print a summary of the handled collisions
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ticks 5 --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use collidascope::game::GameWorld;
use collidascope::resources::gameconfig::GameConfig;

/// Pluggable collision detection and handling demo.
#[derive(Parser)]
#[command(version, about = "Runs a friend/enemy world through the collision dispatcher.")]
struct Cli {
    /// Configuration file (default: ./collidascope.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of ticks to run; overrides the configuration file.
    #[arg(long)]
    ticks: Option<u32>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                log::warn!("{}; using defaults", e);
            }
            config
        }
        None => {
            let mut config = GameConfig::new();
            match config.load_if_present() {
                Ok(true) => {}
                Ok(false) => log::debug!("No {} found; using defaults", config.config_path.display()),
                Err(e) => log::warn!("{}; using defaults", e),
            }
            config
        }
    };
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }

    // Early-exit: write config and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let ticks = config.ticks;
    let mut game = GameWorld::new(config);
    game.run(ticks);

    let summary = game.summary();
    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "{} ticks ({:.3}s), {} collisions handled",
        summary.ticks, summary.elapsed, summary.handled
    );
    for (key, count) in &summary.handled_by_key {
        println!("  {key}: {count}");
    }
    for key in &summary.missing {
        println!("  {key}: no handler");
    }
}
