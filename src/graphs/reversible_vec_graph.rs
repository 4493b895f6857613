use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, Graph, VertexId, Weight};

/// Adjacency lists for both edge directions, indexed by vertex id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReversibleVecGraph {
    out_edges: Vec<Vec<WeightedEdge<VertexId>>>,
    in_edges: Vec<Vec<WeightedEdge<VertexId>>>,
}

impl Default for ReversibleVecGraph {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ReversibleVecGraph {
    pub fn new(number_of_vertices: u32) -> ReversibleVecGraph {
        ReversibleVecGraph {
            out_edges: vec![Vec::new(); number_of_vertices as usize],
            in_edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(edges: &[WeightedEdge<VertexId>]) -> ReversibleVecGraph {
        let mut graph = ReversibleVecGraph::default();
        edges
            .iter()
            .for_each(|edge| graph.add_edge(*edge.from(), *edge.to(), edge.weight()));
        graph
    }

    /// Adds the edge `from -> to`. Parallel edges are kept.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let max_edge_endpoint = std::cmp::max(from, to) as usize;
        if max_edge_endpoint >= self.out_edges.len() {
            self.out_edges.resize(max_edge_endpoint + 1, Vec::new());
            self.in_edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edge = WeightedEdge::new(from, to, weight);
        self.in_edges[to as usize].push(edge.flip());
        self.out_edges[from as usize].push(edge);
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    pub fn all_edges(&self) -> Vec<WeightedEdge<VertexId>> {
        self.out_edges.iter().flatten().cloned().collect()
    }
}

impl Graph<VertexId> for ReversibleVecGraph {
    fn out_edges(
        &self,
        vertex: &VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge<VertexId>> + '_> {
        let edges: &[WeightedEdge<VertexId>] = match self.out_edges.get(*vertex as usize) {
            Some(edges) => edges.as_slice(),
            None => &[],
        };
        Box::new(edges.iter().cloned())
    }

    fn in_edges(
        &self,
        vertex: &VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge<VertexId>> + '_> {
        let edges: &[WeightedEdge<VertexId>] = match self.in_edges.get(*vertex as usize) {
            Some(edges) => edges.as_slice(),
            None => &[],
        };
        Box::new(edges.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::ReversibleVecGraph;
    use crate::graphs::Graph;

    #[test]
    fn add_edge_fills_both_directions() {
        let mut graph = ReversibleVecGraph::new(2);
        graph.add_edge(0, 3, 1.5);
        graph.add_edge(0, 1, 2.0);

        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_edges(), 2);

        let heads: Vec<_> = graph.out_edges(&0).map(|edge| *edge.to()).collect();
        assert_eq!(heads, vec![3, 1]);

        let in_edges: Vec<_> = graph.in_edges(&3).collect();
        assert_eq!(in_edges.len(), 1);
        assert_eq!(in_edges[0].from(), &3);
        assert_eq!(in_edges[0].to(), &0);
        assert_eq!(in_edges[0].weight(), 1.5);
    }

    #[test]
    fn unknown_vertex_has_no_edges() {
        let graph = ReversibleVecGraph::new(1);
        assert_eq!(graph.out_edges(&7).len(), 0);
        assert_eq!(graph.in_edges(&7).len(), 0);
    }
}
