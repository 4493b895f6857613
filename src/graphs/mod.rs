use edge::WeightedEdge;

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod reversible_vec_graph;

pub type VertexId = u32;
pub type Weight = f64;

/// Read-only adjacency view consumed by the searches.
///
/// `out_edges` yields the edges leaving `vertex`. `in_edges` yields the edges
/// entering `vertex`, already flipped: `from()` is `vertex` and `to()` is the
/// vertex the original edge started at. Both directions can therefore read
/// the neighbor through `to()`.
pub trait Graph<V>: Send + Sync {
    fn out_edges(&self, vertex: &V) -> Box<dyn ExactSizeIterator<Item = WeightedEdge<V>> + '_>;

    fn in_edges(&self, vertex: &V) -> Box<dyn ExactSizeIterator<Item = WeightedEdge<V>> + '_>;
}
