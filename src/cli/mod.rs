// src/cli/mod.rs
use clap::Parser;

pub mod handlers;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords", long_about = None)]
pub struct Args {
    /// Password length (raised to 8 if shorter)
    #[arg(long, short, default_value_t = 32)]
    pub length: usize,

    /// Include punctuation characters
    #[arg(long, short)]
    pub punctuation: bool,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use JSON for output
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
