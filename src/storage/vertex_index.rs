use std::ops::Index;

use crate::core::VertexNotFound;

/// Bidirectional mapping between vertex values and dense indices.
///
/// Indices always form the contiguous sequence `0..len()`. Removing a vertex
/// shifts every greater index down by one, so the indices of the remaining
/// vertices are not stable across removals.
///
/// With _N_ vertices, the time and space properties are:
///
/// * memory used: _O(N)_
/// * index to vertex mapping: _O(1)_
/// * vertex to index mapping: _O(log(N))_
/// * insertion and removal: _O(N)_
#[derive(Debug, Clone)]
pub struct VertexIndex<T> {
    vertices: Vec<T>,
    // Permutation of `0..vertices.len()` ordered by the vertex values so that
    // lookups can use binary search without requiring `T: Clone`.
    sorted: Vec<usize>,
}

impl<T> VertexIndex<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            sorted: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of vertices in the mapping.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the mapping contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps given index to the corresponding vertex.
    pub fn vertex(&self, index: usize) -> Option<&T> {
        self.vertices.get(index)
    }

    pub fn vertex_at(&self, index: usize) -> Result<&T, VertexNotFound> {
        self.vertex(index).ok_or(VertexNotFound)
    }

    /// Iterates over the vertices in the order of their indices.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vertices.iter()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.sorted.clear();
    }
}

impl<T: Ord> VertexIndex<T> {
    fn search(&self, vertex: &T) -> Result<usize, usize> {
        self.sorted
            .binary_search_by(|&index| self.vertices[index].cmp(vertex))
    }

    /// Maps given vertex to its index.
    pub fn get(&self, vertex: &T) -> Option<usize> {
        self.search(vertex).ok().map(|pos| self.sorted[pos])
    }

    pub fn index_of(&self, vertex: &T) -> Result<usize, VertexNotFound> {
        self.get(vertex).ok_or(VertexNotFound)
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.search(vertex).is_ok()
    }

    /// Assigns the next free index to the vertex.
    ///
    /// If the vertex is already present, its existing index is returned and
    /// the mapping is not changed. The boolean is `true` when the vertex was
    /// newly inserted.
    pub fn insert(&mut self, vertex: T) -> (usize, bool) {
        match self.search(&vertex) {
            Ok(pos) => (self.sorted[pos], false),
            Err(pos) => {
                let index = self.vertices.len();
                self.vertices.push(vertex);
                self.sorted.insert(pos, index);
                (index, true)
            }
        }
    }

    /// Removes the vertex and returns its former index together with the owned
    /// value.
    ///
    /// All indices greater than the removed one are decremented.
    pub fn remove(&mut self, vertex: &T) -> Result<(usize, T), VertexNotFound> {
        let pos = self.search(vertex).map_err(|_| VertexNotFound)?;
        let index = self.sorted.remove(pos);

        for other in self.sorted.iter_mut() {
            if *other > index {
                *other -= 1;
            }
        }

        let vertex = self.vertices.remove(index);
        Ok((index, vertex))
    }
}

impl<T> Default for VertexIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for VertexIndex<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn abc() -> VertexIndex<&'static str> {
        let mut map = VertexIndex::new();
        map.insert("c");
        map.insert("a");
        map.insert("b");
        map
    }

    #[test]
    fn dense_indices_in_insertion_order() {
        let map = abc();

        assert_eq!(map.get(&"c"), Some(0));
        assert_eq!(map.get(&"a"), Some(1));
        assert_eq!(map.get(&"b"), Some(2));
        assert_eq!(map.vertex(1), Some(&"a"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn insert_idempotent() {
        let mut map = abc();

        assert_eq!(map.insert("a"), (1, false));
        assert_eq!(map.insert("d"), (3, true));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn remove_compacts() {
        let mut map = abc();

        assert_eq!(map.remove(&"c"), Ok((0, "c")));
        assert_eq!(map.get(&"a"), Some(0));
        assert_eq!(map.get(&"b"), Some(1));
        assert_eq!(map.vertex(0), Some(&"a"));
        assert_eq!(map.vertex(2), None);
        assert!(!map.contains(&"c"));
    }

    #[test]
    fn remove_absent() {
        let mut map = abc();

        assert_matches!(map.remove(&"z"), Err(VertexNotFound));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn lookup_absent() {
        let map = abc();

        assert_matches!(map.index_of(&"z"), Err(VertexNotFound));
        assert_matches!(map.vertex_at(3), Err(VertexNotFound));
    }

    #[test]
    fn reinsert_after_remove() {
        let mut map = abc();

        map.remove(&"a").unwrap();
        assert_eq!(map.insert("a"), (2, true));
        assert_eq!(map.iter().copied().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }
}
