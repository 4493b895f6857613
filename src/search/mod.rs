pub mod bidirectional_dijkstra;
pub mod dijkstra;
pub mod path;

pub use bidirectional_dijkstra::{BidirectionalDijkstra, SearchOutcome};
