//! Weighted directed graph backed by a growable adjacency matrix.
//!
//! Vertices are arbitrary ordered values mapped to dense indices, edges carry
//! numeric weights. The graph supports breadth-first and depth-first
//! traversals and single-source shortest paths (Dijkstra's algorithm).
//!
//! ```
//! use wdigraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//!
//! graph.extend_with_vertices(["A", "B", "C"]);
//! graph.extend_with_edges([("A", "B", 3u32), ("B", "C", 4), ("A", "C", 10)]);
//!
//! let shortest_paths = graph.dijkstra(&"A").unwrap();
//! assert_eq!(shortest_paths.dist(&"C"), Some(&7));
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{core::Neighbors, visit::Visitor};

    pub use crate::{
        core::{AddEdgeError, AddEdgeErrorKind, VertexNotFound, Weight},
        graph::Graph,
    };
}
