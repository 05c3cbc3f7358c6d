//! CLI argument parsing for wrapwrite

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wrapwrite")]
#[command(version)]
#[command(
    about = "Write a fixed string to test.txt and print -5 reinterpreted as u64",
    long_about = None
)]
pub struct Cli {
    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
