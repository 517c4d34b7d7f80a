use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "push")]
#[command(about = "Run and inspect Push programs")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the tokens of a program with their byte spans
    Tokens { file: PathBuf },

    /// Print the parsed program tree
    Parse { file: PathBuf },

    /// Run a program and print every stack, top first
    Run(RunArgs),

    /// Validate a configuration file and print the effective options
    Config { file: Option<PathBuf> },
}

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Program file
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Program text given inline
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the stacks after every step
    #[arg(long)]
    pub trace: bool,

    /// Random seed, overriding the configuration
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Step budget, overriding the configuration
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}
