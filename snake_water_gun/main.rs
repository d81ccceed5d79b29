use log::{info, warn};
use std::io;

use swg_cli::CliConfig;

mod error;
mod log_init;
mod session;
use session::Session;

fn main() {
    let config = CliConfig::new();
    log_init::init(config.log_level());
    info!("Starting Snake, Water & Gun...");
    config.log();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), &config);

    let score = session.score();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("\n{}", session::report(&score.lock()));
        std::process::exit(0);
    }) {
        warn!("Could not install interrupt handler: {}", e);
    }

    match session.run() {
        Ok(score) => info!("Played {} round(s)", score.rounds()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
