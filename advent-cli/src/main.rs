//! advent - command-line runner for the daily puzzle solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import the solution crate so its puzzle plugins link in
use solutions_2023 as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use inputs::InputStore;
use output::OutputFormatter;
use solver_core::RegistryBuilder;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No puzzles found matching the specified filters.");
        return Ok(());
    }

    // Report every missing input up front rather than failing one by one
    let missing = missing_inputs(&work_items, &config);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
        return Err(CliError::MissingInputs(missing.len()));
    }

    run_executor(executor, work_items, config.quiet)
}

/// Paths of expected input files that don't exist yet
fn missing_inputs(work_items: &[WorkItem], config: &Config) -> Vec<std::path::PathBuf> {
    let store = InputStore::new(config.input_dir.clone());
    work_items
        .iter()
        .filter(|w| !store.contains(w.year, w.day))
        .map(|w| store.input_path(w.year, w.day))
        .collect()
}

/// Run the executor in the background, re-ordering and printing results as
/// they stream in
fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    println!("Running {} puzzle(s)...", work_items.len());

    // Every (year, day, part) the aggregator should wait for
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Flush anything still buffered (only possible if some result never arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<solver_core::PuzzleRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
