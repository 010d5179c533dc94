use std::io;
use std::process::ExitCode;

use evolve_chess::{RulesConfig, Session, cli::Interface};
use log::{error, info};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RulesConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => RulesConfig::default(),
    };
    info!("Starting with {config:?}");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut interface = Interface::new(Session::new(config), stdin, stdout);

    match interface.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}
