pub mod traits;
pub mod bfs;
pub mod context;
pub mod convergence;
pub mod driver;
pub mod program;
pub mod vertex_sssp;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
