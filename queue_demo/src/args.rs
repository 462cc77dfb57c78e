use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// How many random values to push in each round of the scenario.
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,

    /// Random values are drawn from 0 up to (but excluding) this bound.
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..))]
    pub max_value: i32,

    /// Seed for the random values.
    ///
    /// If unset, a fresh seed is drawn so every run pushes different values
    #[arg(short, long, required = false)]
    pub seed: Option<u64>,

    /// File holding serialized queue text to load and print before the scenario.
    #[arg(short, long, required = false)]
    pub input: Option<PathBuf>,

    /// File the final queue is serialized into.
    #[arg(short, long, required = false)]
    pub output: Option<PathBuf>,
}
