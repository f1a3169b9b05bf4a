#![forbid(unsafe_code)]

//! Graph container APIs used by `opstudio`.
//!
//! Nodes and edges keep insertion order. Successor queries walk incident edges in the order they
//! were added, which is what the edge-key path walk relies on.

mod edge_key;
mod graph;

pub use edge_key::{EdgeKey, EdgeKeyParseError};
pub use graph::{Graph, GraphOptions};
