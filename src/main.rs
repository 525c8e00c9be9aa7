use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use verbi::config::{self, Config};
use verbi::verb::{self, Deck};
use verbi::{Dataset, Record};

#[derive(Parser)]
#[command(about = "Generate French to Italian verb conjugation decks")]
struct Args {
    /// Output directory. Defaults to the `out` key of the configuration,
    /// which defaults to `decks/fr-it`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Configuration file to load.
    #[arg(long, default_value = config::DEFAULT_PATH)]
    config: PathBuf,
    /// Only generate the given built-in decks. Can be specified multiple
    /// times.
    #[arg(long, value_name = "NAME")]
    deck: Vec<Deck>,
    /// Validate every verb and exit without writing anything.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;
    let config = Config::load(&args.config)?;

    let decks = if args.deck.is_empty() {
        config.decks.clone()
    } else {
        args.deck.clone()
    };

    let mut batches = Vec::new();

    for deck in decks {
        batches.push((deck.name(), deck.verbs()));
    }

    batches.push(("config", config.extra_verbs()?));

    // Each batch is validated as a whole before anything is generated.
    for (name, verbs) in &batches {
        verb::validate(verbs)?;
        tracing::debug!(batch = *name, verbs = verbs.len(), "Validated");
    }

    if args.check {
        let verbs = batches.iter().map(|(_, v)| v.len()).sum::<usize>();
        tracing::info!(verbs, "Configuration is valid");
        return Ok(());
    }

    let start = Instant::now();

    let records = batches
        .iter()
        .flat_map(|(_, verbs)| verbs.iter())
        .map(Record::build)
        .collect::<Result<Vec<_>, _>>()?;

    let out = args.out.unwrap_or(config.out);
    let dataset = Dataset::new(out);

    let summary = dataset.write(&records)?;

    let duration = Instant::now().duration_since(start);

    tracing::info!(
        ?duration,
        written = summary.written.len(),
        added = summary.added.len()
    );

    for id in &summary.added {
        tracing::info!(%id, "Added");
    }

    Ok(())
}
