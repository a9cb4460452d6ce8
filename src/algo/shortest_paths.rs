//! Find [single source shortest paths] and their distances in a graph.
//!
//! The implementation is the classic _O(V²)_ variant of Dijkstra's algorithm
//! which fits the dense adjacency matrix representation: in every step, the
//! unvisited vertex with the smallest known distance is selected by a linear
//! scan (ties are broken by the smallest index) and the distances of its
//! neighbors are relaxed.
//!
//! The algorithm requires non-negative edge weights. An edge with negative
//! weight reachable from the source is reported as
//! [`Error::NegativeWeight`]. If you have a graph where nonnegative weights can
//! be guaranteed at compile time, use an [unsigned
//! type](crate::core::weight::Weight::is_unsigned) like `u8` or `u32`.
//!
//! Distances are accumulated in the weight type itself. When a candidate
//! distance would overflow it (or hit the value reserved for absent edges),
//! the run fails with [`Error::DistanceOverflow`] instead of comparing
//! clamped values.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use wdigraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//!
//! graph.extend_with_vertices(["Prague", "Bratislava", "Vienna", "Munich"]);
//! graph.extend_with_edges([
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Vienna", "Munich", 402),
//! ]);
//!
//! let shortest_paths = graph.dijkstra(&"Prague").unwrap();
//! let path = shortest_paths
//!     .reconstruct(&"Munich")
//!     .copied()
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//!
//! assert_eq!(shortest_paths.dist(&"Munich"), Some(&695));
//! assert_eq!(path, "Vienna - Prague");
//! ```

use std::{fmt, ops::Index};

use thiserror::Error;

use crate::{
    core::{VertexNotFound, Weight},
    graph::Graph,
    storage::VertexIndex,
};

mod dijkstra;

use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<'a, T, W> {
    vertices: &'a VertexIndex<T>,
    source: usize,
    // Indexed by vertex index. `None` marks an unreachable vertex.
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<'a, T, W> ShortestPaths<'a, T, W>
where
    T: Ord,
    W: Weight,
{
    /// Runs Dijkstra's algorithm on the graph from the source vertex.
    pub fn run(graph: &'a Graph<T, W>, source: &T) -> Result<Self, Error> {
        let vertices = graph.index_map();
        let source = vertices.index_of(source)?;
        let raw = dijkstra(graph, source)?;

        Ok(Self {
            vertices,
            source,
            dist: raw.dist,
            pred: raw.pred,
        })
    }
}

impl<'a, T, W> ShortestPaths<'a, T, W> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> &'a T {
        &self.vertices[self.source]
    }

    /// Iterates over all vertices of the graph, in index order, with their
    /// distance from the source or `None` if they are unreachable.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, Option<&W>)> + '_ {
        self.vertices.iter().zip(self.dist.iter().map(Option::as_ref))
    }
}

impl<'a, T: Ord, W> ShortestPaths<'a, T, W> {
    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is not reachable from the source or it
    /// is not in the graph.
    pub fn dist(&self, to: &T) -> Option<&W> {
        let index = self.vertices.get(to)?;
        self.dist[index].as_ref()
    }

    /// Returns `true` if there is a path from the source to the vertex.
    pub fn is_reachable(&self, to: &T) -> bool {
        self.dist(to).is_some()
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex. The
    /// iterator is empty if the vertex is unreachable.
    pub fn reconstruct(&self, to: &T) -> PathReconstruction<'_, 'a, T> {
        PathReconstruction {
            curr: self.vertices.get(to),
            pred: &self.pred,
            vertices: self.vertices,
        }
    }
}

impl<T: Ord, W> Index<&T> for ShortestPaths<'_, T, W> {
    type Output = W;

    fn index(&self, index: &T) -> &Self::Output {
        self.dist(index)
            .unwrap_or_else(|| panic!("vertex is not reachable from the source"))
    }
}

impl<T: fmt::Display, W: fmt::Display> fmt::Display for ShortestPaths<'_, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, dist) in self.iter() {
            match dist {
                Some(dist) => writeln!(f, "{vertex}: {dist}")?,
                None => writeln!(f, "{vertex}: INF")?,
            }
        }

        Ok(())
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source vertex is not in the graph.
    #[error("vertex does not exist")]
    VertexNotFound,

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A path distance does not fit into the weight type.
    #[error("path distance overflows the weight type")]
    DistanceOverflow,
}

impl From<VertexNotFound> for Error {
    fn from(_: VertexNotFound) -> Self {
        Error::VertexNotFound
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'p, 'a, T> {
    curr: Option<usize>,
    pred: &'p [Option<usize>],
    vertices: &'a VertexIndex<T>,
}

impl<'p, 'a, T> Iterator for PathReconstruction<'p, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred[self.curr?];
        self.curr.map(|index| &self.vertices[index])
    }
}
