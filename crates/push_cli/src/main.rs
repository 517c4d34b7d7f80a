mod args;
mod commands;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use args::{Cli, Command};

/// Log filter from `RUST_LOG`, `warn` otherwise. Logs go to stderr so that
/// stdout only carries program output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let code = match cli.command {
        Command::Tokens { file } => commands::tokens::run(&file),
        Command::Parse { file } => commands::parse::run(&file),
        Command::Run(args) => commands::run::run(&args),
        Command::Config { file } => commands::config::run(file.as_deref()),
    };
    std::process::exit(code);
}
