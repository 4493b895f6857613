use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::path::Path;
use crate::{
    graphs::{Graph, Weight},
    queue::IndexedMinPriorityQueue,
};

/// Distances and predecessors of a single direction Dijkstra search.
pub struct DijkstraData<V> {
    pub distances: HashMap<V, Weight>,
    pub predecessors: HashMap<V, V>,
}

impl<V: Clone + Eq + Hash> DijkstraData<V> {
    pub fn get_distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    /// Constructs the path to `target` by tracing back the predecessors.
    /// Returns `None` if `target` was not reached.
    pub fn get_path(&self, target: &V) -> Option<Path<V>> {
        let weight = self.get_distance(target)?;

        let mut vertices = vec![target.clone()];
        let mut current = target;
        while let Some(predecessor) = self.predecessors.get(current) {
            vertices.push(predecessor.clone());
            current = predecessor;
        }
        vertices.reverse();

        Some(Path { vertices, weight })
    }
}

fn search<V: Clone + Eq + Hash>(
    graph: &dyn Graph<V>,
    source: V,
    target: Option<&V>,
) -> DijkstraData<V> {
    let mut queue = IndexedMinPriorityQueue::new();
    let mut distances = HashMap::new();
    let mut predecessors = HashMap::new();

    queue.add(source.clone(), 0.0);
    distances.insert(source, 0.0);

    while let Some(tail) = queue.remove_smallest() {
        if Some(&tail) == target {
            break;
        }

        let distance_tail = distances[&tail];
        for edge in graph.out_edges(&tail) {
            let alternative_distance_head = distance_tail + edge.weight();
            let current_distance_head = distances
                .get(edge.to())
                .copied()
                .unwrap_or(Weight::INFINITY);

            if alternative_distance_head < current_distance_head {
                if !queue.change_priority(edge.to(), alternative_distance_head) {
                    queue.add(edge.to().clone(), alternative_distance_head);
                }
                distances.insert(edge.to().clone(), alternative_distance_head);
                predecessors.insert(edge.to().clone(), tail.clone());
            }
        }
    }

    DijkstraData {
        distances,
        predecessors,
    }
}

/// Plain single direction Dijkstra, used as reference for the bidirectional
/// search.
pub fn shortest_path<V: Clone + Eq + Hash>(
    graph: &dyn Graph<V>,
    source: V,
    target: V,
) -> Option<Path<V>> {
    search(graph, source, Some(&target)).get_path(&target)
}

pub fn shortest_path_weight<V: Clone + Eq + Hash>(
    graph: &dyn Graph<V>,
    source: V,
    target: V,
) -> Option<Weight> {
    search(graph, source, Some(&target)).get_distance(&target)
}

/// Distances from `source` to every reachable vertex.
pub fn single_source<V: Clone + Eq + Hash>(graph: &dyn Graph<V>, source: V) -> DijkstraData<V> {
    search(graph, source, None)
}
