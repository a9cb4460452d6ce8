/// Access to the outgoing edges of vertices identified by dense indices.
///
/// This is the seam between graph storages and the algorithms. Algorithms
/// work purely in terms of indices `0..vertex_bound()`.
pub trait Neighbors {
    type Weight;

    type NeighborsIter<'a>: DoubleEndedIterator<Item = (usize, &'a Self::Weight)>
    where
        Self: 'a;

    /// Returns the upper bound of vertex indices.
    fn vertex_bound(&self) -> usize;

    /// Returns the outgoing neighbors of the vertex together with the weights
    /// of the corresponding edges, in ascending index order.
    fn neighbors(&self, index: usize) -> Self::NeighborsIter<'_>;
}
