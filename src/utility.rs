use std::time::Duration;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::{
    graphs::{graph_functions::validate_path, reversible_vec_graph::ReversibleVecGraph},
    search::{
        dijkstra::shortest_path_weight,
        path::{ShortestPathRequest, ShortestPathTimingResult},
        BidirectionalDijkstra, SearchOutcome,
    },
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {human_pos}/{human_len} {eta_precise}")
            .unwrap(),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Runs one bidirectional search per request in parallel and checks every
/// result against a plain Dijkstra search. Returns an error describing the
/// first wrong result.
pub fn benchmark_and_validate(
    graph: &ReversibleVecGraph,
    requests: &[ShortestPathRequest<u32>],
    timeout: Duration,
) -> Result<Vec<ShortestPathTimingResult<u32>>, String> {
    requests
        .par_iter()
        .progress_with(get_progressbar("Searching", requests.len() as u64))
        .map(|request| {
            let search = BidirectionalDijkstra::new(graph, request.source, request.target, timeout);
            validate_search(graph, request, &search)?;

            Ok(ShortestPathTimingResult {
                request: request.clone(),
                outcome: search.outcome().code(),
                weight: search.path().map(|path| path.weight),
                number_of_states_explored: search.number_of_states_explored(),
                timing_in_seconds: search.exploration_time().as_secs_f64(),
            })
        })
        .collect()
}

/// Compares a finished search with the weight found by a plain Dijkstra
/// search.
pub fn validate_search(
    graph: &ReversibleVecGraph,
    request: &ShortestPathRequest<u32>,
    search: &BidirectionalDijkstra<u32>,
) -> Result<(), String> {
    let reference_weight = shortest_path_weight(graph, request.source, request.target);

    match (search.outcome(), search.path(), reference_weight) {
        (SearchOutcome::TimedOut, _, _) => {
            if !search.solution().is_empty() || search.solution_weight().is_finite() {
                return Err(format!("{:?} timed out but reports a solution", request));
            }
        }
        (SearchOutcome::Solved, Some(path), Some(reference_weight)) => {
            validate_path(graph, request, &path)
                .map_err(|err| format!("{:?} has an invalid path: {}", request, err))?;
            if path.weight < reference_weight - 1e-9 * reference_weight.max(1.0) {
                return Err(format!(
                    "{:?} reports weight {} below the shortest path weight {}",
                    request, path.weight, reference_weight
                ));
            }
        }
        (SearchOutcome::Unsolvable, None, None) => {
            if search.solution_weight() != f64::INFINITY {
                return Err(format!("{:?} is unsolvable but has a finite weight", request));
            }
        }
        (outcome, _, reference_weight) => {
            return Err(format!(
                "{:?} ended as {:?} but shortest path weight is {:?}",
                request, outcome, reference_weight
            ));
        }
    }

    Ok(())
}
