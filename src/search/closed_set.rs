use std::fmt;

use itertools::Itertools;
use serde_derive::Serialize;

use crate::graphs::Vertex;

/// Vertices whose distance from the start is final, in the order they were
/// finalized. Only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClosedSet {
    vertices: Vec<Vertex>,
}

impl ClosedSet {
    /// A closed set always starts with the start vertex.
    pub fn new(start: Vertex) -> Self {
        ClosedSet {
            vertices: vec![start],
        }
    }

    /// Caller guarantees `vertex` is not yet part of the set.
    pub fn append(&mut self, vertex: Vertex) {
        debug_assert!(
            !self.contains(vertex),
            "vertex {} is already in the closed set",
            vertex
        );
        self.vertices.push(vertex);
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    pub fn first(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl<'a> IntoIterator for &'a ClosedSet {
    type Item = Vertex;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Vertex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter().copied()
    }
}

impl fmt::Display for ClosedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "closed set: {}", self.vertices.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_start_vertex() {
        let closed_set = ClosedSet::new(4);
        assert_eq!(closed_set.count(), 1);
        assert!(closed_set.contains(4));
        assert!(!closed_set.is_empty());
        assert_eq!(closed_set.first(), Some(4));
    }

    #[test]
    fn keeps_insertion_order() {
        let mut closed_set = ClosedSet::new(2);
        closed_set.append(0);
        closed_set.append(5);
        closed_set.append(1);

        assert_eq!(closed_set.iter().collect::<Vec<_>>(), vec![2, 0, 5, 1]);
        // iterating does not consume the set
        assert_eq!(closed_set.iter().count(), 4);
        assert_eq!(closed_set.last(), Some(1));
        assert!(!closed_set.contains(3));
    }

    #[test]
    #[should_panic(expected = "already in the closed set")]
    #[cfg(debug_assertions)]
    fn duplicate_append_is_caught_in_debug_builds() {
        let mut closed_set = ClosedSet::new(0);
        closed_set.append(0);
    }

    #[test]
    fn display_lists_finalization_order() {
        let mut closed_set = ClosedSet::new(3);
        closed_set.append(1);
        assert_eq!(closed_set.to_string(), "closed set: 3, 1");
    }
}
