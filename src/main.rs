use anyhow::{Context, Result};
use clap::Parser;

use zipcensus::config::Options;
use zipcensus::geom::{self, GridPoint};
use zipcensus::store::{CensusStore, CANONICAL_HIGH, CANONICAL_LOW};
use zipcensus::{sort, tally, text, Cli};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    let options = cli.merge_into_options(Options::default())?;

    // Initialize logging (early)
    let level = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::debug!("zipcensus demo starting");

    // The store lifecycle the native caller runs: create, populate,
    // merge any caller-supplied batch, query, drop.
    let mut store = CensusStore::new();
    store.populate();

    if let Some(ref path) = options.records_file {
        let batch = CensusStore::from_file(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?;
        log::debug!("merging {} records from {}", batch.len(), path.display());
        store.merge(batch);
    }

    for (code, count) in &options.sets {
        store.insert(code.clone(), *count);
    }

    if options.codes.is_empty() {
        // Canonical scenario: the two seeded codes and their difference
        let low = store.count(CANONICAL_LOW);
        let high = store.count(CANONICAL_HIGH);

        println!("{}", text::format_entry(CANONICAL_LOW, low));
        println!("{}", text::format_entry(CANONICAL_HIGH, high));
        println!("delta => {}", high.saturating_sub(low));
    } else {
        for code in &options.codes {
            println!("{}", text::format_entry(code, store.count(code)));
        }
    }

    if options.demo {
        run_boundary_demo();
    }

    Ok(())
}

/// Exercise the helper surface the library exports alongside the store
fn run_boundary_demo() {
    let counts = [1, 2, 3, 4, 5, 6];
    println!("even sum of {:?} => {}", counts, tally::sum_even(&counts));

    let key = "10186";
    println!("chars in {:?} => {}", key, text::char_count(key));

    let flipped = geom::flip(GridPoint { x: 10, y: 20 });
    println!("flip (10, 20) => ({}, {})", flipped.x, flipped.y);

    let mut values = [10, 42, -9, 12, 8, 25, 7, 13, 55, -1];
    sort::sort_descending(&mut values);
    println!("sorted descending => {:?}", values);
}
