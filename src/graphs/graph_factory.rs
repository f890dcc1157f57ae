use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    edge::UndirectedWeightedEdge, matrix_graph::MatrixGraph, MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT,
};
use crate::error::GraphError;

/// Generates random undirected graphs where every pair of vertices is
/// connected with probability `density`.
pub struct RandomGraphFactory<R: Rng> {
    density: f64,
    rng: R,
}

impl RandomGraphFactory<StdRng> {
    pub fn with_seed(density: f64, seed: u64) -> Result<Self, GraphError> {
        Self::new(density, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGraphFactory<R> {
    pub fn new(density: f64, rng: R) -> Result<Self, GraphError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GraphError::InvalidDensity(density));
        }

        Ok(RandomGraphFactory { density, rng })
    }

    pub fn generate(&mut self, number_of_vertices: u32) -> Result<MatrixGraph, GraphError> {
        let mut graph = MatrixGraph::new(number_of_vertices)?;

        for tail in graph.vertices() {
            for head in tail + 1..number_of_vertices {
                if self.rng.gen::<f64>() < self.density {
                    let weight = self.rng.gen_range(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT);
                    if let Some(edge) = UndirectedWeightedEdge::new(tail, head, weight) {
                        graph.set_edge(&edge)?;
                    }
                }
            }
        }

        Ok(graph)
    }
}
