use fixedbitset::FixedBitSet;

/// A set of visited vertices.
pub trait VisitSet {
    /// Marks the vertex as visited.
    ///
    /// Returns `true` when this is the first time the vertex is visited.
    fn visit(&mut self, index: usize) -> bool;

    /// Returns `true` if the vertex is marked as visited.
    fn is_visited(&self, index: usize) -> bool;

    /// Returns the number of visited vertices.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited vertices to be empty.
    fn reset_visited(&mut self);
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: usize) -> bool {
        self.contains(index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_grows() {
        let mut visited = FixedBitSet::with_capacity(2);

        assert!(visited.visit(1));
        assert!(!visited.visit(1));
        assert!(visited.visit(10));
        assert!(visited.is_visited(10));
        assert!(!visited.is_visited(100));
        assert_eq!(visited.visited_count(), 2);

        visited.reset_visited();
        assert_eq!(visited.visited_count(), 0);
    }
}
