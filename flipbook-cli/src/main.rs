//! # Flipbook
//!
//! A command-line player for looped frame-sequence animations, optionally in
//! sync with an audio track.

use log::error;

mod cli;
mod controls;
mod display;
mod runner;

fn main() {
    env_logger::init();

    let args = cli::args::build_cli().get_matches();

    let code = match runner::run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err.to_string().to_lowercase());
            -1
        }
    };

    std::process::exit(code)
}
