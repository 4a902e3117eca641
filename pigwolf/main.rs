use log::{error, info};

use pigwolf_cli::CliConfig;
use pigwolf_game::validate_catalog;

mod error;
mod game;
mod log_init;
mod roster;

fn main() {
    let config = CliConfig::new();
    log_init::init(config.log_level());
    info!("Starting Pigwolf...");
    config.log();

    if let Err(e) = validate_catalog() {
        error!("Invalid house catalog: {}", e);
        std::process::exit(2);
    }

    let roster = roster::get_config().unwrap_or_else(|e| {
        error!("Error assembling roster: {}", e);
        std::process::exit(2);
    });

    match game::run(&config, roster) {
        Ok(report) => info!(
            "Finished {} tick(s) with {} collision(s)",
            report.ticks,
            report.collisions.len()
        ),
        Err(e) => {
            error!("Game stopped: {}", e);
            std::process::exit(2);
        }
    }
}
