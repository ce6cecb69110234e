//! Domain model types for TSP instances.
//!
//! Nodes are immutable once loaded, an instance fixes the stable mapping from
//! node id to dense index, and a tour is an ordered visiting sequence that is
//! optionally closed into a cycle.

mod instance;
mod node;
mod tour;

pub use instance::Instance;
pub use node::Node;
pub use tour::Tour;
