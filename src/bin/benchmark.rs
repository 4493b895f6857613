use std::{fs::File, io::BufWriter, path::PathBuf, process::ExitCode, time::Duration};

use bidi_paths::{
    graphs::{graph_factory::GraphFactory, graph_functions::random_request},
    search::SearchOutcome,
    utility::benchmark_and_validate,
};
use clap::Parser;
use itertools::Itertools;
use log::error;

/// Runs `number_of_queries` random bidirectional searches on `graph`, checks
/// each against plain Dijkstra and reports the average search time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.gr`, `.fmi` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Number of random source target pairs
    #[arg(short, long, default_value_t = 1_000)]
    number_of_queries: u32,
    /// Time budget per search in seconds
    #[arg(long, default_value_t = 60.0)]
    timeout: f64,
    /// Path where the per query results shall be saved as json
    #[arg(long)]
    timing_results: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Ok(timeout) = Duration::try_from_secs_f64(args.timeout) else {
        error!("timeout {} is not a valid number of seconds", args.timeout);
        return ExitCode::FAILURE;
    };

    let graph = match GraphFactory::from_file(&args.graph) {
        Ok(graph) => graph,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::thread_rng();
    let requests = (0..args.number_of_queries)
        .filter_map(|_| random_request(&mut rng, graph.number_of_vertices()))
        .collect_vec();

    let results = match benchmark_and_validate(&graph, &requests, timeout) {
        Ok(results) => results,
        Err(err) => {
            error!("validation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if results.is_empty() {
        println!("No queries were run");
        return ExitCode::SUCCESS;
    }

    let counts = results.iter().counts_by(|result| result.outcome);
    for outcome in [
        SearchOutcome::Solved,
        SearchOutcome::Unsolvable,
        SearchOutcome::TimedOut,
    ] {
        println!(
            "{:?}: {}",
            outcome,
            counts.get(&outcome.code()).copied().unwrap_or(0)
        );
    }

    let average = results
        .iter()
        .map(|result| result.timing_in_seconds)
        .sum::<f64>()
        / results.len() as f64;
    let average_states = results
        .iter()
        .map(|result| result.number_of_states_explored as f64)
        .sum::<f64>()
        / results.len() as f64;
    println!(
        "All correct. Took {:?} and explored {:.1} states per query averaged over {} queries",
        Duration::from_secs_f64(average),
        average_states,
        results.len()
    );

    if let Some(timing_results) = args.timing_results {
        println!("Writing timing results");
        let written = File::create(&timing_results)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                serde_json::to_writer(BufWriter::new(file), &results).map_err(|err| err.to_string())
            });
        if let Err(err) = written {
            error!("unable to write {}: {}", timing_results.display(), err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
