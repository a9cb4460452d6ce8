use crate::core::Neighbors;

use super::{
    raw::{RawBfs, RawVisit},
    VisitSet, Visitor,
};

/// Breadth-first traversal.
///
/// Each reachable vertex is visited exactly once, level by level.
pub struct Bfs {
    raw: RawVisit<RawBfs>,
}

pub struct BfsRooted<'a> {
    raw: &'a mut RawVisit<RawBfs>,
}

impl Bfs {
    pub fn new<G: Neighbors>(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_bound()),
        }
    }

    pub fn start(&mut self, root: usize) -> BfsRooted<'_> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet {
        &self.raw.visited
    }
}

impl<'a, G> Visitor<G> for BfsRooted<'a>
where
    G: Neighbors,
{
    type Item = usize;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    use super::*;

    fn create_graph() -> Graph<u32, u8> {
        // 0 -> 1 -> 2    4 -> 5
        // '--> 3 ---^    ^
        //      '---------'
        let mut graph = Graph::new();

        graph.extend_with_vertices(0..6);
        graph.extend_with_edges([(0, 1, 1), (0, 3, 1), (1, 2, 1), (3, 2, 1), (3, 4, 1), (4, 5, 1)]);

        graph
    }

    #[test]
    fn bfs_basic() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        let visited = bfs.start(0).iter(&graph).collect::<Vec<_>>();
        assert_eq!(visited, vec![0, 1, 3, 2, 4, 5]);
        assert_eq!(bfs.visited().visited_count(), 6);
    }

    #[test]
    fn bfs_lazy() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        let mut rooted = bfs.start(3);
        assert_eq!(rooted.visit_next(&graph), Some(3));
        assert_eq!(rooted.visit_next(&graph), Some(2));

        // Neighbors of the visited vertices are already discovered.
        assert!(bfs.visited().is_visited(4));
        assert!(!bfs.visited().is_visited(5));
    }

    #[test]
    fn bfs_restart_keeps_visited() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        assert_eq!(bfs.start(4).iter(&graph).count(), 2);
        assert_eq!(bfs.start(3).iter(&graph).collect::<Vec<_>>(), vec![3, 2]);

        bfs.reset();
        assert_eq!(bfs.start(3).iter(&graph).collect::<Vec<_>>(), vec![3, 2, 4, 5]);
    }

    #[test]
    fn bfs_iter_resumes() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);
        let mut rooted = bfs.start(0);

        assert_eq!(rooted.iter(&graph).take(3).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(rooted.visit_next(&graph), Some(2));
        assert_eq!(rooted.iter(&graph).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(rooted.visit_next(&graph), None);
    }

    #[test]
    fn bfs_into_iter() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        let visited = bfs.start(1).into_iter(&graph).collect::<Vec<_>>();
        assert_eq!(visited, vec![1, 2]);
    }
}
