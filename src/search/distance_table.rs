use std::fmt;

use serde_derive::Serialize;

use super::{closed_set::ClosedSet, path::Path};
use crate::graphs::{infinity, matrix_graph::MatrixGraph, Distance, Vertex};

/// Outcome for a single vertex once the search is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VertexReport {
    Start,
    Reachable { cost: Distance, predecessor: Vertex },
    Unreachable,
}

impl fmt::Display for VertexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexReport::Start => write!(f, "start"),
            VertexReport::Reachable { cost, predecessor } => {
                write!(f, "cost = {}, previous node = {}", cost, predecessor)
            }
            VertexReport::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Best known cost from the start and the predecessor on that path, per
/// vertex.
///
/// `predecessor(v)` is `Some` exactly when `cost(v) < infinity` and `v` is
/// not the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    start: Vertex,
    infinity: Distance,
    costs: Vec<Distance>,
    predecessors: Vec<Option<Vertex>>,
}

impl DistanceTable {
    /// Caller guarantees `start < number_of_vertices`.
    pub fn new(start: Vertex, number_of_vertices: u32) -> Self {
        debug_assert!(
            start < number_of_vertices,
            "start vertex {} is not part of a graph with {} vertices",
            start,
            number_of_vertices
        );
        let infinity = infinity(number_of_vertices);
        let mut costs = vec![infinity; number_of_vertices as usize];
        if let Some(cost) = costs.get_mut(start as usize) {
            *cost = 0;
        }

        DistanceTable {
            start,
            infinity,
            costs,
            predecessors: vec![None; number_of_vertices as usize],
        }
    }

    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn infinity(&self) -> Distance {
        self.infinity
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.costs.len() as u32
    }

    pub fn cost(&self, vertex: Vertex) -> Distance {
        self.costs[vertex as usize]
    }

    pub fn costs(&self) -> &[Distance] {
        &self.costs
    }

    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors[vertex as usize]
    }

    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.cost(vertex) < self.infinity
    }

    /// Relaxes every edge leaving a vertex of the closed set. Returns how
    /// many entries improved.
    ///
    /// The whole closed set is scanned on every call, so one call costs
    /// `O(n * |closed set|)`.
    pub fn relax(&mut self, graph: &MatrixGraph, closed_set: &ClosedSet) -> usize {
        let mut improved = 0;

        for head in graph.vertices() {
            for tail in closed_set {
                let Some(weight) = graph.weight(tail, head) else {
                    continue;
                };

                let alternative_cost = self.cost(tail) + weight;
                if alternative_cost < self.cost(head) {
                    self.costs[head as usize] = alternative_cost;
                    self.predecessors[head as usize] = Some(tail);
                    improved += 1;
                }
            }
        }

        improved
    }

    pub fn report(&self) -> Vec<VertexReport> {
        (0..self.number_of_vertices())
            .map(|vertex| {
                if vertex == self.start {
                    return VertexReport::Start;
                }

                match self.predecessor(vertex) {
                    Some(predecessor) => VertexReport::Reachable {
                        cost: self.cost(vertex),
                        predecessor,
                    },
                    None => VertexReport::Unreachable,
                }
            })
            .collect()
    }

    /// Traces back from `target` using the predecessors. Returns `None` if
    /// `target` is unreachable.
    pub fn path_to(&self, target: Vertex) -> Option<Path> {
        if target as usize >= self.costs.len() || !self.is_reachable(target) {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            // a cycle in the predecessors would loop forever
            if vertices.len() > self.costs.len() {
                return None;
            }
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path {
            vertices,
            distance: self.cost(target),
        })
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "distances from starting point")?;
        for (vertex, report) in self.report().iter().enumerate() {
            writeln!(f, "node ({:02})  -->  {}", vertex, report)?;
        }
        Ok(())
    }
}
