use tracing::trace;

/// Square matrix of edge weights stored in a single row-major buffer.
///
/// Cell `(row, col)` holds the weight of the edge from vertex `row` to vertex
/// `col`, or `None` if there is no such edge. The side of the allocated square
/// (the capacity) is always a power of two or zero and it never shrinks.
#[derive(Debug, Clone)]
pub struct AdjMatrix<W> {
    data: Vec<Option<W>>,
    capacity: usize,
    n_edges: usize,
}

impl<W> AdjMatrix<W> {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self {
                data: Vec::new(),
                capacity,
                n_edges: 0,
            };
        }

        let capacity = capacity.next_power_of_two();
        let len = capacity * capacity;
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, || None);

        Self {
            data,
            capacity,
            n_edges: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Grows the matrix so that it can hold at least `capacity` vertices.
    ///
    /// Existing weights keep their coordinates and the new cells are empty.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.capacity < capacity {
            let prev_capacity = self.capacity;
            self.capacity = (self.capacity * 2).max(capacity.next_power_of_two());
            resize(&mut self.data, prev_capacity, self.capacity);

            trace!(
                from = prev_capacity,
                to = self.capacity,
                "adjacency matrix grown"
            );
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&W> {
        self.index(row, col)
            .and_then(|index| self.data[index].as_ref())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Stores the weight into the cell and returns the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of the capacity.
    pub fn insert(&mut self, row: usize, col: usize, weight: W) -> Option<W> {
        let index = self
            .index(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) is out of capacity"));

        let prev = self.data[index].replace(weight);
        if prev.is_none() {
            self.n_edges += 1;
        }

        prev
    }

    pub fn remove(&mut self, row: usize, col: usize) -> Option<W> {
        let index = self.index(row, col)?;
        let prev = self.data[index].take();

        if prev.is_some() {
            self.n_edges -= 1;
        }

        prev
    }

    /// Iterates over the present cells `(col, weight)` of the row, considering
    /// only the first `n_vertices` columns, in ascending column order.
    pub fn row(&self, row: usize, n_vertices: usize) -> RowIter<'_, W> {
        let cells = match self.index(row, 0) {
            Some(start) => &self.data[start..start + n_vertices.min(self.capacity)],
            None => &self.data[..0],
        };

        RowIter {
            cells: cells.iter().enumerate(),
        }
    }

    /// Deletes row and column `index` out of the `n_vertices` used ones.
    ///
    /// Rows below and columns to the right of the removed ones are shifted by
    /// one towards the origin, so that the used part of the matrix stays
    /// dense. The weights of the removed row and column are dropped.
    pub fn remove_row_and_column(&mut self, index: usize, n_vertices: usize) {
        debug_assert!(index < n_vertices && n_vertices <= self.capacity);

        // Remove incident edges.
        for i in 0..n_vertices {
            self.remove(index, i);
            self.remove(i, index);
        }

        // Moving in row-major order never overwrites a cell that is yet to be
        // moved, because the source of a move is never before its target.
        for row in 0..n_vertices - 1 {
            let src_row = row + (row >= index) as usize;

            for col in 0..n_vertices - 1 {
                let src_col = col + (col >= index) as usize;

                let target = row * self.capacity + col;
                let source = src_row * self.capacity + src_col;

                if target != source {
                    self.data[target] = self.data[source].take();
                }
            }
        }
    }

    /// Removes all weights while keeping the capacity.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|cell| *cell = None);
        self.n_edges = 0;
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.capacity && col < self.capacity).then(|| row * self.capacity + col)
    }
}

impl<W> Default for AdjMatrix<W> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RowIter<'a, W> {
    cells: std::iter::Enumerate<std::slice::Iter<'a, Option<W>>>,
}

impl<'a, W> Iterator for RowIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.cells
            .find_map(|(col, cell)| cell.as_ref().map(|weight| (col, weight)))
    }
}

impl<W> DoubleEndedIterator for RowIter<'_, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cells
            .rfind(|(_, cell)| cell.is_some())
            .and_then(|(col, cell)| cell.as_ref().map(|weight| (col, weight)))
    }
}

fn resize<W>(prev: &mut Vec<Option<W>>, prev_capacity: usize, capacity: usize) {
    let len = capacity * capacity;

    if len <= prev.len() {
        // This routine is only for growing.
        return;
    }

    let mut next = Vec::with_capacity(len);

    // Add the top-right corner.
    for (i, value) in std::mem::take(prev).into_iter().enumerate() {
        next.push(value);

        // Are we on the right edge of the previous square?
        if (i + 1) % prev_capacity == 0 {
            // New elements into top-right corner.
            let additional = next.len() + capacity - prev_capacity;
            next.resize_with(additional, || None);
        }
    }

    // Add the bottom rectangle.
    next.resize_with(len, || None);
    *prev = next;
}
