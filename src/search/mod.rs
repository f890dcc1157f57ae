pub mod closed_set;
pub mod dijkstra;
pub mod distance_table;
pub mod path;
