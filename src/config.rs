//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "countdown")]
#[command(about = "A countdown timer with a one-time completion alert")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Initial duration to stage, in seconds
    #[arg(short, long)]
    pub duration: Option<u64>,

    /// Start counting down immediately (requires --duration)
    #[arg(short, long, requires = "duration")]
    pub run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
