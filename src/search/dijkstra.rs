use log::{debug, info};
use serde_derive::Serialize;

use super::{closed_set::ClosedSet, distance_table::DistanceTable};
use crate::{
    error::SearchError,
    graphs::{matrix_graph::MatrixGraph, Distance, Vertex},
};

/// Result of a single iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Finalized(Vertex),
    Converged,
}

/// How a successful search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Termination {
    /// No vertex outside the closed set is reachable anymore.
    Converged { iterations: u32 },
    /// All `n - 1` iterations ran.
    Exhausted { iterations: u32 },
}

impl Termination {
    pub fn iterations(&self) -> u32 {
        match *self {
            Termination::Converged { iterations } | Termination::Exhausted { iterations } => {
                iterations
            }
        }
    }
}

/// Dijkstra's algorithm driven by an explicit closed set.
///
/// Every iteration relaxes all edges leaving the closed set and then moves
/// the closest vertex outside of it into the closed set.
pub struct DijkstraEngine<'a> {
    graph: &'a MatrixGraph,
    distances: DistanceTable,
    closed_set: ClosedSet,
    iterations: u32,
}

impl<'a> DijkstraEngine<'a> {
    pub fn new(graph: &'a MatrixGraph, start: Vertex) -> Result<Self, SearchError> {
        if !graph.contains(start) {
            return Err(SearchError::StartOutOfRange {
                start,
                max: graph.number_of_vertices() - 1,
            });
        }

        Ok(DijkstraEngine {
            graph,
            distances: DistanceTable::new(start, graph.number_of_vertices()),
            closed_set: ClosedSet::new(start),
            iterations: 0,
        })
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn closed_set(&self) -> &ClosedSet {
        &self.closed_set
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn into_parts(self) -> (DistanceTable, ClosedSet) {
        (self.distances, self.closed_set)
    }

    /// Upper bound on the number of iterations, `n - 1`.
    pub fn max_iterations(&self) -> u32 {
        self.graph.number_of_vertices() - 1
    }

    pub fn step(&mut self) -> Result<Step, SearchError> {
        self.iterations += 1;

        let improved = self.distances.relax(self.graph, &self.closed_set);
        debug!(
            "iteration {}: {} distances improved",
            self.iterations, improved
        );

        match self.select_next()? {
            Some((vertex, distance)) => {
                debug!(
                    "iteration {}: finalized vertex {} at distance {}",
                    self.iterations, vertex, distance
                );
                self.closed_set.append(vertex);
                Ok(Step::Finalized(vertex))
            }
            None => Ok(Step::Converged),
        }
    }

    /// Runs until convergence or until `n - 1` iterations are done.
    pub fn run(&mut self) -> Result<Termination, SearchError> {
        let termination = loop {
            if self.iterations >= self.max_iterations() {
                if self.iterations == 0 {
                    break Termination::Converged { iterations: 0 };
                }
                break Termination::Exhausted {
                    iterations: self.iterations,
                };
            }

            if self.step()? == Step::Converged {
                break Termination::Converged {
                    iterations: self.iterations,
                };
            }
        };

        info!(
            "search from vertex {} terminated: {:?}, {} of {} vertices finalized",
            self.distances.start(),
            termination,
            self.closed_set.count(),
            self.graph.number_of_vertices()
        );
        Ok(termination)
    }

    /// Vertex outside the closed set minimizing `cost(u) + weight(u, v)` over
    /// all `u` in the closed set, scanning the closed set in insertion order
    /// and candidates in ascending id. The first minimum wins.
    pub fn select_next(&self) -> Result<Option<(Vertex, Distance)>, SearchError> {
        if self.closed_set.is_empty() {
            return Err(SearchError::EmptyClosedSet);
        }

        let mut next = None;
        let mut minimum = self.distances.infinity();

        for inside in &self.closed_set {
            for (outside, weight) in self.graph.neighbours(inside) {
                if self.closed_set.contains(outside) {
                    continue;
                }

                let distance = self.distances.cost(inside) + weight;
                if distance < minimum {
                    minimum = distance;
                    next = Some((outside, distance));
                }
            }
        }

        Ok(next)
    }
}

/// Everything a finished search produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub distances: DistanceTable,
    pub closed_set: ClosedSet,
    pub termination: Termination,
}

pub fn shortest_path_tree(graph: &MatrixGraph, start: Vertex) -> Result<SearchResult, SearchError> {
    let mut engine = DijkstraEngine::new(graph, start)?;
    let termination = engine.run()?;
    let (distances, closed_set) = engine.into_parts();

    Ok(SearchResult {
        distances,
        closed_set,
        termination,
    })
}
