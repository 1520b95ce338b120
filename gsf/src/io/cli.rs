use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance file to solve. The built-in reference set is solved when absent
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short = 'a', long, value_enum, default_value = "genetic")]
    pub strategy: Strategy,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Genetic,
    Greedy,
    RandomRestart,
    /// Run all three strategies on every instance
    All,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Genetic => "genetic",
            Strategy::Greedy => "greedy",
            Strategy::RandomRestart => "random_restart",
            Strategy::All => "all",
        }
    }
}
