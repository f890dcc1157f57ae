use serde_derive::Serialize;

use crate::{
    graphs::{matrix_graph::MatrixGraph, Vertex},
    search::{
        closed_set::ClosedSet,
        dijkstra::{SearchResult, Termination},
        distance_table::VertexReport,
    },
};

/// Json document written by `dijkstra --json`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub seed: u64,
    pub graph: &'a MatrixGraph,
    pub start: Vertex,
    pub termination: Termination,
    pub closed_set: &'a ClosedSet,
    pub report: Vec<VertexReport>,
}

impl<'a> RunReport<'a> {
    pub fn new(seed: u64, graph: &'a MatrixGraph, result: &'a SearchResult) -> Self {
        RunReport {
            seed,
            graph,
            start: result.distances.start(),
            termination: result.termination,
            closed_set: &result.closed_set,
            report: result.distances.report(),
        }
    }
}
