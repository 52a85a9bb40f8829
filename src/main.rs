use clap::Parser;
use trademate::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_default_env().init();
    run(Cli::parse())
}
