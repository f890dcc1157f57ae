pub mod edge;
pub mod graph_factory;
pub mod matrix_graph;

pub type Vertex = u32;
pub type Weight = u32;
pub type Distance = u32;

pub const MIN_EDGE_WEIGHT: Weight = 1;
pub const MAX_EDGE_WEIGHT: Weight = 99;

pub const DEFAULT_NUMBER_OF_VERTICES: u32 = 30;
pub const DEFAULT_DENSITY: f64 = 0.35;

/// Vertex ids are displayed with two digits, so `00`..`99`.
pub const MAX_NUMBER_OF_VERTICES: u32 = 100;

/// Sentinel for "no edge" and "no known path".
///
/// A simple path visits at most `n - 1` edges of weight at most
/// `MAX_EDGE_WEIGHT`, so every real distance is strictly below this value.
pub fn infinity(number_of_vertices: u32) -> Distance {
    MAX_EDGE_WEIGHT * number_of_vertices + 1
}
