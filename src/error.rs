use thiserror::Error;

use crate::graphs::{Vertex, Weight};

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("a graph needs at least one vertex")]
    NoVertices,
    #[error("{number_of_vertices} vertices requested, at most {max} are supported")]
    TooManyVertices { number_of_vertices: u32, max: u32 },
    #[error("density {0} is not a probability (expected 0 <= density <= 1)")]
    InvalidDensity(f64),
    #[error("vertex {vertex} does not exist in a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },
    #[error("edge weight {weight} is outside of {min}..={max}")]
    WeightOutOfRange { weight: Weight, min: Weight, max: Weight },
}

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("start vertex {start} is out of range (from 0 to {max})")]
    StartOutOfRange { start: Vertex, max: Vertex },
    /// Closed set has no member during selection. Construction always seeds
    /// it with the start vertex, so this is an internal logic error.
    #[error("closed set is empty during selection")]
    EmptyClosedSet,
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("standard input closed before a start vertex was entered")]
    EndOfInput,
    #[error("failed to talk to the terminal: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("failed to write the result: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to serialize the result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Broken internal invariant rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Search(SearchError::EmptyClosedSet))
    }
}
