use std::{path::PathBuf, process::ExitCode, time::Duration};

use bidi_paths::{graphs::graph_factory::GraphFactory, search::BidirectionalDijkstra};
use clap::Parser;
use log::{error, info};
use serde_json::json;

/// Searches a shortest path between two vertices with bidirectional Dijkstra.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.gr`, `.fmi` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Vertex the path starts at
    #[arg(short, long)]
    source: u32,
    /// Vertex the path ends at
    #[arg(short, long)]
    target: u32,
    /// Time budget of the search in seconds
    #[arg(long, default_value_t = 60.0)]
    timeout: f64,
    /// Print the result as json
    #[arg(long)]
    json: bool,
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

    info!("searching from {} to {}", args.source, args.target);
    let search = BidirectionalDijkstra::new(&graph, args.source, args.target, timeout);

    if args.json {
        let result = json!({
            "outcome": search.outcome().code(),
            "solution": search.solution(),
            "solution_weight": search.path().map(|path| path.weight),
            "number_of_states_explored": search.number_of_states_explored(),
            "exploration_time_in_seconds": search.exploration_time().as_secs_f64(),
        });
        println!("{}", result);
    } else {
        println!("outcome: {:?} ({})", search.outcome(), search.outcome().code());
        println!("path: {:?}", search.solution());
        println!("weight: {}", search.solution_weight());
        println!("states explored: {}", search.number_of_states_explored());
        println!("took {:?}", search.exploration_time());
    }

    ExitCode::SUCCESS
}
