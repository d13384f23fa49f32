use log::error;
use mandelbrot_explorer::{ExplorerConfig, RunGuiCommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match RunGuiCommand::new(ExplorerConfig::default()).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
