use crate::core::Neighbors;

use super::{
    raw::{RawDfs, RawDfsRecursive, RawVisit},
    VisitSet, Visitor,
};

/// Depth-first traversal using a stack of vertices.
///
/// The neighbors are pushed in descending index order, so the visiting order
/// is the same as of [`DfsRecursive`].
pub struct Dfs {
    raw: RawVisit<RawDfs>,
}

pub struct DfsRooted<'a> {
    raw: &'a mut RawVisit<RawDfs>,
}

impl Dfs {
    pub fn new<G: Neighbors>(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_bound()),
        }
    }

    pub fn start(&mut self, root: usize) -> DfsRooted<'_> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet {
        &self.raw.visited
    }
}

impl<'a, G> Visitor<G> for DfsRooted<'a>
where
    G: Neighbors,
{
    type Item = usize;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

/// Depth-first traversal in the order of the recursive formulation: visit the
/// vertex, then recurse into each unvisited neighbor in ascending index order.
///
/// The recursion is emulated by an explicit stack, so the depth of the
/// traversal is not limited by the program stack.
pub struct DfsRecursive {
    raw: RawVisit<RawDfsRecursive>,
}

pub struct DfsRecursiveRooted<'a> {
    raw: &'a mut RawVisit<RawDfsRecursive>,
}

impl DfsRecursive {
    pub fn new<G: Neighbors>(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_bound()),
        }
    }

    pub fn start(&mut self, root: usize) -> DfsRecursiveRooted<'_> {
        self.raw.start(root);
        DfsRecursiveRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet {
        &self.raw.visited
    }
}

impl<'a, G> Visitor<G> for DfsRecursiveRooted<'a>
where
    G: Neighbors,
{
    type Item = usize;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}
