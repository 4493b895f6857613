use std::{
    hash::Hash,
    time::{Duration, Instant},
};

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use log::debug;
use serde::{Deserialize, Serialize};

use super::path::Path;
use crate::{
    graphs::{edge::WeightedEdge, Graph, Weight},
    queue::IndexedMinPriorityQueue,
};

/// Terminal state of a bidirectional search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Solved,
    Unsolvable,
    TimedOut,
}

impl SearchOutcome {
    /// Returns 1 for solved, 0 for unsolvable and -1 for timed out.
    pub fn code(&self) -> i8 {
        match self {
            SearchOutcome::Solved => 1,
            SearchOutcome::Unsolvable => 0,
            SearchOutcome::TimedOut => -1,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

enum Settled<V> {
    Meeting(V),
    Expanded,
    Exhausted,
}

/// Dijkstra state of one search direction.
struct Frontier<V> {
    direction: Direction,
    queue: IndexedMinPriorityQueue<V>,
    distances: HashMap<V, Weight>,
    predecessors: HashMap<V, V>,
}

impl<V: Clone + Eq + Hash> Frontier<V> {
    fn new(source: V, direction: Direction) -> Frontier<V> {
        let mut queue = IndexedMinPriorityQueue::new();
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();

        queue.add(source.clone(), 0.0);
        distances.insert(source.clone(), 0.0);
        predecessors.insert(source.clone(), source);

        Frontier {
            direction,
            queue,
            distances,
            predecessors,
        }
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn distance(&self, vertex: &V) -> Weight {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    /// Removes the closest vertex from the queue. If the other direction has
    /// already settled it, it is returned as meeting vertex. Otherwise it is
    /// marked as visited and its edges are relaxed.
    fn settle_next(&mut self, graph: &dyn Graph<V>, visited: &mut HashSet<V>) -> Settled<V> {
        let Some(tail) = self.queue.remove_smallest() else {
            return Settled::Exhausted;
        };

        if !visited.insert(tail.clone()) {
            return Settled::Meeting(tail);
        }

        match self.direction {
            Direction::Forward => self.relax(&tail, graph.out_edges(&tail)),
            Direction::Backward => self.relax(&tail, graph.in_edges(&tail)),
        }

        Settled::Expanded
    }

    fn relax(&mut self, tail: &V, edges: impl Iterator<Item = WeightedEdge<V>>) {
        let distance_tail = self.distance(tail);

        for edge in edges {
            let head = edge.to();
            let alternative_distance_head = distance_tail + edge.weight();

            match self.distances.get(head).copied() {
                None => {
                    self.queue.add(head.clone(), alternative_distance_head);
                }
                Some(current_distance_head)
                    if alternative_distance_head < current_distance_head =>
                {
                    // Settled vertices never get here, their distance is final.
                    self.queue.change_priority(head, alternative_distance_head);
                }
                Some(_) => continue,
            }

            self.distances.insert(head.clone(), alternative_distance_head);
            self.predecessors.insert(head.clone(), tail.clone());
        }
    }

    /// Follows the predecessors from `vertex` to the source of this frontier.
    /// Both ends are included.
    fn path_to_source(&self, vertex: &V) -> Vec<V> {
        let mut vertices = vec![vertex.clone()];

        let mut current = vertex;
        while let Some(predecessor) = self.predecessors.get(current) {
            if predecessor == current {
                break;
            }
            vertices.push(predecessor.clone());
            current = predecessor;
        }

        vertices
    }
}

/// Result of a bidirectional Dijkstra search.
///
/// The search runs completely inside [`BidirectionalDijkstra::new`]; all
/// accessors only read the stored result.
#[derive(Clone, Debug)]
pub struct BidirectionalDijkstra<V> {
    outcome: SearchOutcome,
    solution: Vec<V>,
    solution_weight: Weight,
    number_of_states_explored: u32,
    exploration_time: Duration,
}

impl<V: Clone + Eq + Hash> BidirectionalDijkstra<V> {
    /// Searches a shortest path from `start` to `end`, growing one search
    /// from `start` along outgoing edges and one from `end` along incoming
    /// edges. The search stops as soon as a vertex is settled by both
    /// directions, one queue runs empty, or `timeout` has passed. The timeout
    /// is checked once per pair of settled vertices.
    pub fn new(
        graph: &dyn Graph<V>,
        start: V,
        end: V,
        timeout: Duration,
    ) -> BidirectionalDijkstra<V> {
        let start_time = Instant::now();

        if start == end {
            return BidirectionalDijkstra {
                outcome: SearchOutcome::Solved,
                solution: vec![start],
                solution_weight: 0.0,
                number_of_states_explored: 1,
                exploration_time: start_time.elapsed(),
            };
        }

        let mut search = BidirectionalDijkstra {
            outcome: SearchOutcome::Unsolvable,
            solution: Vec::new(),
            solution_weight: Weight::INFINITY,
            number_of_states_explored: 0,
            exploration_time: Duration::ZERO,
        };

        let mut forward = Frontier::new(start, Direction::Forward);
        let mut backward = Frontier::new(end, Direction::Backward);
        let mut visited = HashSet::new();

        let mut meeting_vertex = None;
        'search: while !forward.is_empty() && !backward.is_empty() {
            for frontier in [&mut forward, &mut backward] {
                match frontier.settle_next(graph, &mut visited) {
                    Settled::Meeting(vertex) => {
                        search.number_of_states_explored += 1;
                        meeting_vertex = Some(vertex);
                        break 'search;
                    }
                    Settled::Expanded => search.number_of_states_explored += 1,
                    Settled::Exhausted => break 'search,
                }
            }

            if start_time.elapsed() > timeout {
                search.outcome = SearchOutcome::TimedOut;
                search.exploration_time = start_time.elapsed();
                debug!(
                    "bidirectional search timed out after {} states",
                    search.number_of_states_explored
                );
                return search;
            }
        }

        if let Some(mid) = meeting_vertex {
            let mut solution = forward.path_to_source(&mid);
            solution.reverse();
            solution.extend(backward.path_to_source(&mid).into_iter().skip(1));

            search.solution_weight = forward.distance(&mid) + backward.distance(&mid);
            search.solution = solution;
            search.outcome = SearchOutcome::Solved;
        }

        search.exploration_time = start_time.elapsed();
        debug!(
            "bidirectional search finished as {:?} after {} states in {:?}",
            search.outcome, search.number_of_states_explored, search.exploration_time
        );

        search
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Vertices of the found path from start to end. Empty unless solved.
    pub fn solution(&self) -> &[V] {
        &self.solution
    }

    /// Total weight of the found path, infinity unless solved.
    pub fn solution_weight(&self) -> Weight {
        self.solution_weight
    }

    /// Number of vertices removed from either queue.
    pub fn number_of_states_explored(&self) -> u32 {
        self.number_of_states_explored
    }

    pub fn exploration_time(&self) -> Duration {
        self.exploration_time
    }

    pub fn path(&self) -> Option<Path<V>> {
        if self.outcome != SearchOutcome::Solved {
            return None;
        }

        Some(Path {
            vertices: self.solution.clone(),
            weight: self.solution_weight,
        })
    }
}
