pub mod traits;
pub mod types;
pub mod store;
pub mod io;
pub mod generators;

pub use store::{EdgeView, GraphStore, VertexView};
pub use traits::Graph;
pub use types::{EdgeDirection, Label, VertexId};
