use clap::Parser;

use crate::grid::DEFAULT_SIZE;

#[derive(Debug, Parser)]
#[command(
    name = "paint-bucket",
    about = "Flood-fill paint canvas whose edges wrap around",
    author,
    version
)]
pub struct Cli {
    /// Canvas width in cells.
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = at_least_one)]
    pub width: usize,
    /// Canvas height in cells.
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = at_least_one)]
    pub height: usize,
    /// Seed for the random pattern.
    #[arg(long, default_value_t = 0)]
    pub seed: u32,
    /// Percentage of cells painted by the random pattern.
    #[arg(long, default_value_t = 33, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub density: u8,
    /// Delay between simulation steps in milliseconds.
    #[arg(long, default_value_t = 200)]
    pub interval_ms: u64,
}

fn at_least_one(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
