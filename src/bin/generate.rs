use anyhow::ensure;
use clap::Parser;
use shopnet::{input::Limits, mapgen};
use std::fs;
use std::io::Write;

#[derive(Parser)]
struct Cli {
    /// Number of shops.
    #[clap(long, short = 'n', default_value_t = 10)]
    shops: u64,
    /// Number of roads.
    #[clap(long, short = 'r', default_value_t = 15)]
    roads: u64,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let limits = Limits::default();
    ensure!(
        limits.shops.contains(&args.shops),
        "number of shops should be in between {} to {} inclusive",
        limits.shops.start(),
        limits.shops.end()
    );
    ensure!(
        limits.roads.contains(&args.roads),
        "number of roads should be in between {} to {} inclusive",
        limits.roads.start(),
        limits.roads.end()
    );

    let text = mapgen::random::generate_input(args.shops, args.roads as usize, args.seed);

    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(fs::File::create(&args.output)?)
    };
    w.write_all(text.as_bytes())?;
    Ok(())
}
