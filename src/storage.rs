//! Building blocks of the graph representation.
//!
//! The [`Graph`](crate::graph::Graph) composes a [`VertexIndex`], which maps
//! vertex values to dense indices, and an [`AdjMatrix`], which holds the edge
//! weights addressed by these indices. Both are kept in lock-step: removing a
//! vertex compacts the indices in the mapping and the rows and columns in the
//! matrix at once.
//!
//! |                | complexity     |
//! |----------------|----------------|
//! | add vertex     | _O*(V)_        |
//! | add edge       | _O(log V)_     |
//! | get neighbors  | _O(V)_         |
//! | lookup vertex  | _O(log V)_     |
//! | lookup edge    | _O(log V)_     |
//! | remove vertex  | _O(V²)_        |
//! | remove edge    | _O(log V)_     |
//! | space          | _O(V²)_        |
//!
//! * _V_ – vertex count
//! * _O*(..)_ – amortized complexity

pub mod adj_matrix;
pub mod vertex_index;

#[doc(inline)]
pub use self::{adj_matrix::AdjMatrix, vertex_index::VertexIndex};
