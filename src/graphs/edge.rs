use serde::{Deserialize, Serialize};

use super::Weight;

/// A directed edge `from -> to` carrying a non-negative weight.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeightedEdge<V> {
    from: V,
    to: V,
    weight: Weight,
}

impl<V: Clone> WeightedEdge<V> {
    pub fn new(from: V, to: V, weight: Weight) -> WeightedEdge<V> {
        WeightedEdge { from, to, weight }
    }

    pub fn from(&self) -> &V {
        &self.from
    }

    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the edge pointing in the opposite direction with the same
    /// weight.
    pub fn flip(&self) -> WeightedEdge<V> {
        WeightedEdge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedEdge;

    #[test]
    fn flip_swaps_endpoints_and_keeps_weight() {
        let edge = WeightedEdge::new(10, 17, 12.3);
        assert_eq!(edge.from(), &10);
        assert_eq!(edge.to(), &17);
        assert_eq!(edge.weight(), 12.3);

        let flipped = edge.flip();
        assert_eq!(flipped.from(), &17);
        assert_eq!(flipped.to(), &10);
        assert_eq!(flipped.weight(), 12.3);
        assert_eq!(flipped.flip(), edge);
    }
}
