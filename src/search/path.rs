use std::fmt;

use itertools::Itertools;
use serde_derive::Serialize;

use crate::graphs::{Distance, Vertex};

/// Represents a path in a graph.
///
/// Holds the vertices from the start to the target and the total cost of
/// traversing them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (cost = {})",
            self.vertices.iter().join(" -> "),
            self.distance
        )
    }
}
