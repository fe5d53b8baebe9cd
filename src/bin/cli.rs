// src/bin/cli.rs
use clap::Parser;
use job_outlook::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    cli::run(args)
}
