//! Weighted directed graph addressed by vertex values.
//!
//! # Examples
//!
//! ```
//! use wdigraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//!
//! graph.extend_with_vertices(["Aa", "Bb", "Cc", "Dd", "Ee"]);
//! graph.extend_with_edges([
//!     ("Bb", "Aa", 1),
//!     ("Aa", "Cc", 1),
//!     ("Aa", "Dd", 1),
//!     ("Bb", "Cc", 1),
//!     ("Ee", "Cc", 1),
//! ]);
//!
//! // Edges between vertices that are not in the graph are not added.
//! assert!(graph.add_edge(&"Yy", &"Zz", 1).is_err());
//! assert_eq!(graph.vertex_count(), 5);
//!
//! assert_eq!(graph.check_adj(&"Dd", &"Aa"), Ok(false));
//! assert_eq!(graph.adjacent_vertices(&"Aa").unwrap(), [&"Cc", &"Dd"]);
//! assert_eq!(graph.bfs(&"Aa").unwrap(), [&"Aa", &"Cc", &"Dd"]);
//! ```

use std::{fmt, ops::Index};

use tracing::debug;

use crate::{
    algo::shortest_paths::{self, ShortestPaths},
    core::{AddEdgeError, AddEdgeErrorKind, Neighbors, VertexNotFound, Weight},
    storage::{adj_matrix::RowIter, AdjMatrix, VertexIndex},
    visit::{Bfs, Dfs, DfsRecursive, Visitor},
};

/// Weighted directed graph backed by an adjacency matrix.
///
/// Vertices are identified by values of type `T`, which are mapped to dense
/// indices. There is at most one edge for every ordered pair of vertices.
/// Removing a vertex shifts the indices of all vertices added after it, see
/// [`VertexIndex`].
#[derive(Debug, Clone)]
pub struct Graph<T, W> {
    vertices: VertexIndex<T>,
    matrix: AdjMatrix<W>,
}

impl<T, W> Graph<T, W> {
    pub fn new() -> Self {
        Self {
            vertices: VertexIndex::new(),
            matrix: AdjMatrix::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: VertexIndex::with_capacity(vertex_count),
            matrix: AdjMatrix::with_capacity(vertex_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices the graph can hold without growing the
    /// adjacency matrix.
    pub fn capacity(&self) -> usize {
        self.matrix.capacity()
    }

    /// Returns the vertex with given index.
    pub fn vertex(&self, index: usize) -> Option<&T> {
        self.vertices.vertex(index)
    }

    /// Iterates over the vertices in the order of their indices.
    pub fn vertices(&self) -> std::slice::Iter<'_, T> {
        self.vertices.iter()
    }

    /// Iterates over all edges as `(source, destination, weight)`, ordered by
    /// the source index and then by the destination index.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T, &W)> + '_ {
        let n = self.vertex_count();

        (0..n).flat_map(move |src| {
            self.matrix
                .row(src, n)
                .map(move |(dst, weight)| (&self.vertices[src], &self.vertices[dst], weight))
        })
    }

    /// Returns the mapping between the vertices and their indices.
    pub fn index_map(&self) -> &VertexIndex<T> {
        &self.vertices
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix.clear();
    }

    /// Removes all edges and keeps the vertices.
    pub fn clear_edges(&mut self) {
        self.matrix.clear();
    }
}

impl<T: Ord, W> Graph<T, W> {
    /// Adds the vertex and returns its index.
    ///
    /// Adding a vertex that is already in the graph does nothing and returns
    /// its current index.
    pub fn add_vertex(&mut self, vertex: T) -> usize {
        let (index, _) = self.vertices.insert(vertex);
        self.matrix.ensure_capacity(self.vertices.len());
        index
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }

    /// Removes the vertex together with all its incoming and outgoing edges
    /// and returns it.
    ///
    /// The indices of all vertices greater than the index of the removed one
    /// are decremented.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T, VertexNotFound> {
        let n_vertices = self.vertices.len();
        let (index, vertex) = self.vertices.remove(vertex)?;
        self.matrix.remove_row_and_column(index, n_vertices);
        Ok(vertex)
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns the current index of the vertex.
    pub fn vertex_index(&self, vertex: &T) -> Option<usize> {
        self.vertices.get(vertex)
    }

    /// Returns the weight of the edge from `src` to `dst`, if it exists.
    pub fn weight(&self, src: &T, dst: &T) -> Option<&W> {
        let src = self.vertices.get(src)?;
        let dst = self.vertices.get(dst)?;
        self.matrix.get(src, dst)
    }

    /// Removes the edge from `src` to `dst` and returns its weight.
    ///
    /// Nothing happens if any of the vertices or the edge does not exist.
    pub fn remove_edge(&mut self, src: &T, dst: &T) -> Option<W> {
        let (src, dst) = match self.endpoints(src, dst) {
            Ok(endpoints) => endpoints,
            Err(kind) => {
                debug!(%kind, "edge not removed");
                return None;
            }
        };

        let removed = self.matrix.remove(src, dst);

        if removed.is_none() {
            debug!(src, dst, "edge not removed: there is no such edge");
        }

        removed
    }

    // Indices of the edge endpoints, or the kind of the first missing one.
    fn endpoints(&self, src: &T, dst: &T) -> Result<(usize, usize), AddEdgeErrorKind> {
        let src = self.vertices.get(src).ok_or(AddEdgeErrorKind::SourceAbsent)?;
        let dst = self.vertices.get(dst).ok_or(AddEdgeErrorKind::DestinationAbsent)?;
        Ok((src, dst))
    }

    /// Returns `true` if there is an edge from `src` to `dst`.
    pub fn check_adj(&self, src: &T, dst: &T) -> Result<bool, VertexNotFound> {
        let src = self.vertices.index_of(src)?;
        let dst = self.vertices.index_of(dst)?;
        Ok(self.matrix.contains(src, dst))
    }

    /// Returns all vertices `w` such that there is an edge from `vertex` to
    /// `w`, in ascending index order.
    pub fn adjacent_vertices(&self, vertex: &T) -> Result<Vec<&T>, VertexNotFound> {
        let index = self.vertices.index_of(vertex)?;
        Ok(self.neighbors(index).map(|(u, _)| &self.vertices[u]).collect())
    }

    /// Returns the vertices reachable from `start` in breadth-first order.
    pub fn bfs(&self, start: &T) -> Result<Vec<&T>, VertexNotFound> {
        let root = self.vertices.index_of(start)?;
        let mut bfs = Bfs::new(self);
        Ok(self.collect_vertices(bfs.start(root).iter(self)))
    }

    /// Returns the vertices reachable from `start` in depth-first order,
    /// computed with a stack of vertices.
    pub fn iterative_dfs(&self, start: &T) -> Result<Vec<&T>, VertexNotFound> {
        let root = self.vertices.index_of(start)?;
        let mut dfs = Dfs::new(self);
        Ok(self.collect_vertices(dfs.start(root).iter(self)))
    }

    /// Returns the vertices reachable from `start` in the order of the
    /// recursive depth-first search.
    ///
    /// The result is always the same as of [`Graph::iterative_dfs`]. The
    /// traversal does not recurse on the program stack.
    pub fn recursive_dfs(&self, start: &T) -> Result<Vec<&T>, VertexNotFound> {
        let root = self.vertices.index_of(start)?;
        let mut dfs = DfsRecursive::new(self);
        Ok(self.collect_vertices(dfs.start(root).iter(self)))
    }

    fn collect_vertices<I>(&self, indices: I) -> Vec<&T>
    where
        I: Iterator<Item = usize>,
    {
        indices.map(|index| &self.vertices[index]).collect()
    }
}

impl<T: Ord, W: Weight> Graph<T, W> {
    /// Adds an edge from `src` to `dst`.
    ///
    /// If the edge already exists, its weight is replaced and the previous
    /// weight is returned. The graph is not changed when any of the vertices
    /// does not exist or when the weight is [reserved](Weight::is_reserved);
    /// the weight is then handed back in the error.
    pub fn add_edge(&mut self, src: &T, dst: &T, weight: W) -> Result<Option<W>, AddEdgeError<W>> {
        let (src, dst) = match self.endpoints(src, dst) {
            Ok(endpoints) => endpoints,
            Err(kind) => return Err(self.reject(weight, kind)),
        };

        if weight.is_reserved() {
            return Err(self.reject(weight, AddEdgeErrorKind::InvalidWeight));
        }

        Ok(self.matrix.insert(src, dst, weight))
    }

    /// Adds all edges from the iterator. Edges that cannot be added are
    /// skipped.
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, T, W)>,
    {
        for (src, dst, weight) in iter {
            // The failure is already reported by `add_edge`.
            let _ = self.add_edge(&src, &dst, weight);
        }
    }

    /// Computes the shortest paths from the source vertex to all other
    /// vertices.
    ///
    /// See [`ShortestPaths`] for details.
    #[tracing::instrument(skip_all, fields(vertex_count = self.vertex_count()))]
    pub fn dijkstra(&self, source: &T) -> Result<ShortestPaths<'_, T, W>, shortest_paths::Error> {
        ShortestPaths::run(self, source)
    }

    fn reject(&self, weight: W, kind: AddEdgeErrorKind) -> AddEdgeError<W> {
        debug!(%kind, "edge not added");
        AddEdgeError::new(weight, kind)
    }
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Neighbors for Graph<T, W> {
    type Weight = W;

    type NeighborsIter<'a> = RowIter<'a, W>
    where
        Self: 'a;

    fn vertex_bound(&self) -> usize {
        self.vertex_count()
    }

    fn neighbors(&self, index: usize) -> Self::NeighborsIter<'_> {
        self.matrix.row(index, self.vertex_count())
    }
}

impl<T, W> Index<usize> for Graph<T, W> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}

/// Lists every vertex followed by its outgoing edges, one vertex per line.
impl<T: fmt::Display, W: fmt::Display> fmt::Display for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices().enumerate() {
            write!(f, "{vertex}:")?;

            for (dst, weight) in self.neighbors(index) {
                write!(f, " {} ({weight})", self.vertices[dst])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
