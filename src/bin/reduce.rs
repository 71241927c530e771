use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use shopnet::{
    input::{Limits, RoadList},
    samples,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "reduce", about = "Count the shops surviving the hub reduction")]
struct Cli {
    /// Network description: `shops roads` header followed by one `a b` road per line.
    #[arg(required_unless_present = "sample")]
    file: Option<String>,
    /// Use a built-in sample network instead of a file.
    #[arg(long, conflicts_with = "file")]
    sample: Option<String>,
    /// Output format of the result.
    #[arg(long, short = 'f', default_value = "plain")]
    format: Format,
    /// Trace shop instantiation and dump the network on stderr.
    #[arg(long, short = 'd', default_value_t = false)]
    debug: bool,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Plain,
    Json,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    shopnet::init_logging(args.debug);

    let roads = match (&args.file, &args.sample) {
        (_, Some(name)) => {
            let sample = samples::get_sample(name).with_context(|| {
                let known = samples::all_samples().iter().map(|s| s.name);
                format!(
                    "unknown sample: {} (known: {})",
                    name,
                    itertools::join(known, ", ")
                )
            })?;
            RoadList::parse(sample.input)?
        }
        (Some(path), None) => RoadList::from_path(path, &Limits::default())
            .with_context(|| format!("failed to read {}", path))?,
        (None, None) => unreachable!("clap requires a file or a sample"),
    };
    debug!(
        "read {} roads ({} skipped), {} shops declared",
        roads.roads.len(),
        roads.skipped,
        roads.declared_shops
    );

    let network = roads.build();
    let reduction = shopnet::analyze(&network).context("cannot reduce")?;

    match args.format {
        Format::Plain => println!("{}", reduction.count()),
        Format::Json => {
            let out = serde_json::json!({
                "result": reduction.count(),
                "reduction": reduction,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
