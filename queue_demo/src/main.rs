mod args;
mod file_io;
mod scenario;

use args::Args;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scenario::Scenario;
use sorted_queue::SortedPriorityQueue;
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .try_init();

    let args = Args::parse();

    if let Some(input) = &args.input {
        let text = file_io::read_text(input)?;
        let loaded = SortedPriorityQueue::<i32>::deserialize(&text);
        tracing::info!(path = %input.display(), len = loaded.len(), "loaded queue");
        println!("loaded queue: {}", loaded);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, count = args.count, max_value = args.max_value, "running scenario");
    let queue = Scenario::new(StdRng::seed_from_u64(seed), args.count, args.max_value).run();

    if let Some(output) = &args.output {
        file_io::write_text(output, &queue.serialize())?;
        tracing::info!(path = %output.display(), "saved queue");
    }
    Ok(())
}
