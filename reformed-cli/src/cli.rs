use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

/// Replay a form scenario and print the props of every validation cycle.
#[derive(Parser, Debug, Clone)]
#[command(name = "reformed", version, about, long_about = None)]
pub struct Cli {
    /// Path to the scenario file (JSON)
    pub scenario: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Pretty-print each cycle instead of one JSON line per cycle
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
