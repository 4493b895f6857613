use std::hash::Hash;

use rand::prelude::*;

use super::{reversible_vec_graph::ReversibleVecGraph, Graph, VertexId, Weight};
use crate::search::path::{Path, ShortestPathRequest};

/// Generates a graph with `number_of_edges` random edges whose weights are
/// drawn uniformly from `[0, max_weight)`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
) -> ReversibleVecGraph {
    let mut graph = ReversibleVecGraph::new(number_of_vertices);
    if number_of_vertices == 0 {
        return graph;
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        graph.add_edge(tail, head, rng.gen_range(0.0..max_weight));
    }

    graph
}

pub fn random_request<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
) -> Option<ShortestPathRequest<VertexId>> {
    if number_of_vertices <= 1 {
        // not enough vertices to get a request with source != target
        return None;
    }

    // guarantee that source != target
    let source = rng.gen_range(0..number_of_vertices);
    let mut target = rng.gen_range(0..number_of_vertices - 1);
    if target >= source {
        target += 1;
    }

    Some(ShortestPathRequest { source, target })
}

/// Checks that `path` is a path of `graph` from `request.source` to
/// `request.target` whose edges sum up to `path.weight`. Between two
/// consecutive vertices the lightest parallel edge is used.
pub fn validate_path<V: Clone + Eq + Hash>(
    graph: &dyn Graph<V>,
    request: &ShortestPathRequest<V>,
    path: &Path<V>,
) -> Result<(), String> {
    // Ensure fist and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    // check if there is an edge between consecutive path vertices.
    let mut true_weight = 0.0;
    for (index, (tail, head)) in path.vertices.iter().zip(path.vertices.iter().skip(1)).enumerate()
    {
        let min_weight = graph
            .out_edges(tail)
            .filter(|edge| edge.to() == head)
            .map(|edge| edge.weight())
            .min_by(Weight::total_cmp)
            .ok_or_else(|| format!("no edge between path vertices {} and {}", index, index + 1))?;
        true_weight += min_weight;
    }

    // check if total weight of path is correct.
    if (true_weight - path.weight).abs() > 1e-9 * true_weight.max(1.0) {
        return Err(format!(
            "path weight {} differs from sum of edge weights {}",
            path.weight, true_weight
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{random_graph, random_request, validate_path};
    use crate::{
        graphs::reversible_vec_graph::ReversibleVecGraph,
        search::path::{Path, ShortestPathRequest},
    };

    #[test]
    fn random_request_never_repeats_vertex() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_request(&mut rng, 1).is_none());
        for _ in 0..1_000 {
            let request = random_request(&mut rng, 3).unwrap();
            assert_ne!(request.source, request.target);
            assert!(request.target < 3);
        }
    }

    #[test]
    fn random_graph_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(&mut rng, 10, 50, 3.0);
        assert_eq!(graph.number_of_edges(), 50);
        assert!(graph.number_of_vertices() <= 10);
        assert!(graph
            .all_edges()
            .iter()
            .all(|edge| (0.0..3.0).contains(&edge.weight())));
    }

    #[test]
    fn validate_path_detects_errors() {
        let mut graph = ReversibleVecGraph::new(3);
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 2.0);
        let request = ShortestPathRequest {
            source: 0,
            target: 2,
        };

        let path = Path {
            vertices: vec![0, 1, 2],
            weight: 3.0,
        };
        assert!(validate_path(&graph, &request, &path).is_ok());

        let wrong_weight = Path {
            vertices: vec![0, 1, 2],
            weight: 4.0,
        };
        assert!(validate_path(&graph, &request, &wrong_weight).is_err());

        let missing_edge = Path {
            vertices: vec![0, 2],
            weight: 3.0,
        };
        assert!(validate_path(&graph, &request, &missing_edge).is_err());
    }
}
