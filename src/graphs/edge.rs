use super::{Vertex, Weight};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct UndirectedWeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl UndirectedWeightedEdge {
    /// Returns `None` for self loops, the diagonal of the matrix is fixed.
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> Option<UndirectedWeightedEdge> {
        if tail == head {
            return None;
        }

        Some(UndirectedWeightedEdge { tail, head, weight })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_are_rejected() {
        assert!(UndirectedWeightedEdge::new(3, 3, 10).is_none());
    }
}
