//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are discovered in ascending index order, which makes
//! the visiting order deterministic.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, DfsRecursive},
    visit_set::VisitSet,
};

/// A traversal in progress, started from a root by [`Bfs::start`],
/// [`Dfs::start`] or [`DfsRecursive::start`].
///
/// The visitor only borrows the graph for the duration of a single step, so
/// the graph has to be passed to every call.
pub trait Visitor<G> {
    /// Usually a vertex index.
    type Item;

    /// Returns the next vertex of the traversal, or `None` once everything
    /// reachable from the root has been emitted.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Walks the rest of the traversal without consuming the visitor.
    fn iter<'g>(&'g mut self, graph: &'g G) -> Walk<'g, &'g mut Self, G>
    where
        Self: Sized,
    {
        Walk { visitor: self, graph }
    }

    /// Walks the rest of the traversal, taking the visitor along.
    fn into_iter(self, graph: &G) -> Walk<'_, Self, G>
    where
        Self: Sized,
    {
        Walk { visitor: self, graph }
    }
}

impl<V: Visitor<G>, G> Visitor<G> for &mut V {
    type Item = V::Item;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        (**self).visit_next(graph)
    }
}

/// Pairs a visitor with the graph it walks.
pub struct Walk<'g, V, G> {
    visitor: V,
    graph: &'g G,
}

impl<V: Visitor<G>, G> Iterator for Walk<'_, V, G> {
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
