//! Main application entry point.

use std::process::ExitCode;
use wireframe_app::{App, AppError, USAGE, parse_args};

fn main() -> ExitCode {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|(command, config)| {
        log::debug!("running {command:?}");
        App::run(command, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(message)) => {
            log::error!("{message}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
