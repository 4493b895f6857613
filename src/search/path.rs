use serde::{Deserialize, Serialize};

use crate::graphs::Weight;

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathRequest<V> {
    pub source: V,
    pub target: V,
}

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and the
/// total weight associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub weight: Weight,
}

/// Timing and outcome of a single bidirectional query, as written by the
/// benchmark.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTimingResult<V> {
    pub request: ShortestPathRequest<V>,
    pub outcome: i8,
    pub weight: Option<Weight>,
    pub number_of_states_explored: u32,
    pub timing_in_seconds: f64,
}
