use std::fmt;

use serde_derive::Serialize;

use super::{
    edge::UndirectedWeightedEdge, infinity, Vertex, Weight, MAX_EDGE_WEIGHT,
    MAX_NUMBER_OF_VERTICES, MIN_EDGE_WEIGHT,
};
use crate::error::GraphError;

/// Symmetric cost matrix of an undirected graph.
///
/// Cells hold either an edge weight in `MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT`,
/// `0` on the diagonal, or `infinity` if there is no edge. The matrix is
/// stored row-major, `costs[tail * n + head]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatrixGraph {
    number_of_vertices: u32,
    infinity: Weight,
    costs: Vec<Weight>,
}

impl MatrixGraph {
    /// Graph without any edges.
    pub fn new(number_of_vertices: u32) -> Result<MatrixGraph, GraphError> {
        if number_of_vertices == 0 {
            return Err(GraphError::NoVertices);
        }
        if number_of_vertices > MAX_NUMBER_OF_VERTICES {
            return Err(GraphError::TooManyVertices {
                number_of_vertices,
                max: MAX_NUMBER_OF_VERTICES,
            });
        }

        let n = number_of_vertices as usize;
        let infinity = infinity(number_of_vertices);
        let mut costs = vec![infinity; n * n];
        for vertex in 0..n {
            costs[vertex * n + vertex] = 0;
        }

        Ok(MatrixGraph {
            number_of_vertices,
            infinity,
            costs,
        })
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[UndirectedWeightedEdge],
    ) -> Result<MatrixGraph, GraphError> {
        let mut graph = MatrixGraph::new(number_of_vertices)?;
        for edge in edges {
            graph.set_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    /// Number of undirected edges.
    pub fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|tail| {
                (tail + 1..self.number_of_vertices)
                    .filter(|&head| self.weight(tail, head).is_some())
                    .count() as u32
            })
            .sum()
    }

    pub fn infinity(&self) -> Weight {
        self.infinity
    }

    pub fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.number_of_vertices
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.number_of_vertices
    }

    /// Raw matrix cell, `infinity` if there is no edge.
    pub fn cost(&self, tail: Vertex, head: Vertex) -> Weight {
        self.costs[self.index(tail, head)]
    }

    /// Weight of the edge between `tail` and `head`, if there is one. The
    /// diagonal is not an edge.
    pub fn weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        if tail == head {
            return None;
        }

        let cost = self.cost(tail, head);
        if cost >= self.infinity {
            return None;
        }

        Some(cost)
    }

    pub fn neighbours(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.vertices()
            .filter_map(move |head| self.weight(vertex, head).map(|weight| (head, weight)))
    }

    /// Writes the edge in both directions, replacing whatever was there.
    pub(crate) fn set_edge(&mut self, edge: &UndirectedWeightedEdge) -> Result<(), GraphError> {
        for vertex in [edge.tail(), edge.head()] {
            if !self.contains(vertex) {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    number_of_vertices: self.number_of_vertices,
                });
            }
        }
        if !(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT).contains(&edge.weight()) {
            return Err(GraphError::WeightOutOfRange {
                weight: edge.weight(),
                min: MIN_EDGE_WEIGHT,
                max: MAX_EDGE_WEIGHT,
            });
        }

        self.set_cost(edge.tail(), edge.head(), edge.weight());
        Ok(())
    }

    fn set_cost(&mut self, tail: Vertex, head: Vertex, cost: Weight) {
        let forward = self.index(tail, head);
        let backward = self.index(head, tail);
        self.costs[forward] = cost;
        self.costs[backward] = cost;
    }

    fn index(&self, tail: Vertex, head: Vertex) -> usize {
        tail as usize * self.number_of_vertices as usize + head as usize
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "       ")?;
        for head in self.vertices() {
            write!(f, "({:02})  ", head)?;
        }
        writeln!(f)?;

        for tail in self.vertices() {
            write!(f, "({:02}) ", tail)?;
            for head in self.vertices() {
                let cost = self.cost(tail, head);
                if cost == self.infinity {
                    write!(f, "   -- ")?;
                } else {
                    write!(f, "{:>5} ", cost)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
