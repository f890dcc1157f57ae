pub mod error;
pub mod graphs;
pub mod prompt;
pub mod report;
pub mod search;
pub mod utility;

pub use error::Error;
pub use graphs::{edge::UndirectedWeightedEdge, matrix_graph::MatrixGraph, Vertex};
pub use search::dijkstra::{shortest_path_tree, DijkstraEngine, SearchResult, Termination};
