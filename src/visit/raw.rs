use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use super::VisitSet;
use crate::core::Neighbors;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo {
    type Item;
    type Collection: TraversalCollection<Self::Item>;

    fn start(index: usize) -> Self::Item;
    fn visit_on_start() -> bool;
}

pub(crate) struct RawVisit<A: RawAlgo> {
    pub collection: A::Collection,
    pub visited: FixedBitSet,
}

impl<A: RawAlgo> RawVisit<A> {
    pub fn new(vertex_bound: usize) -> Self {
        Self {
            collection: A::Collection::default(),
            visited: FixedBitSet::with_capacity(vertex_bound),
        }
    }

    pub fn start(&mut self, root: usize) {
        if A::visit_on_start() {
            self.visited.visit(root);
        }

        self.collection.clear();
        self.collection.push(A::start(root));
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
    }
}

pub enum RawBfs {}

impl RawAlgo for RawBfs {
    type Item = usize;
    type Collection = Queue<usize>;

    fn start(index: usize) -> usize {
        index
    }

    fn visit_on_start() -> bool {
        true
    }
}

impl RawVisit<RawBfs> {
    pub fn next<G: Neighbors>(&mut self, graph: &G) -> Option<usize> {
        let v = self.collection.pop()?;

        for (u, _) in graph.neighbors(v) {
            if self.visited.visit(u) {
                self.collection.push(u);
            }
        }

        Some(v)
    }
}

pub enum RawDfs {}

impl RawAlgo for RawDfs {
    type Item = usize;
    type Collection = Stack<usize>;

    fn start(index: usize) -> usize {
        index
    }

    fn visit_on_start() -> bool {
        false
    }
}

impl RawVisit<RawDfs> {
    pub fn next<G: Neighbors>(&mut self, graph: &G) -> Option<usize> {
        while let Some(v) = self.collection.pop() {
            if self.visited.visit(v) {
                // Push in descending order so that the neighbor with the
                // smallest index is popped first.
                for (u, _) in graph.neighbors(v).rev() {
                    if !self.visited.is_visited(u) {
                        self.collection.push(u);
                    }
                }

                return Some(v);
            }
        }

        None
    }
}

pub enum RawDfsRecursive {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDfsRecursiveItem {
    vertex: usize,
    // Unexplored neighbors in descending order, so that popping gives the
    // smallest index. `None` until the vertex is opened.
    neighbors: Option<Vec<usize>>,
}

impl RawDfsRecursiveItem {
    fn new(vertex: usize) -> Self {
        Self {
            vertex,
            neighbors: None,
        }
    }
}

impl RawAlgo for RawDfsRecursive {
    type Item = RawDfsRecursiveItem;
    type Collection = Stack<RawDfsRecursiveItem>;

    fn start(index: usize) -> RawDfsRecursiveItem {
        RawDfsRecursiveItem::new(index)
    }

    fn visit_on_start() -> bool {
        false
    }
}

// Stack of "iterators" as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
// Every stack frame corresponds to a call of the recursive formulation, so
// the visiting order is the same without being limited by the program stack.
impl RawVisit<RawDfsRecursive> {
    pub fn next<G: Neighbors>(&mut self, graph: &G) -> Option<usize> {
        loop {
            let top = self.collection.0.last_mut()?;

            let neighbors = match top.neighbors.as_mut() {
                Some(neighbors) => neighbors,
                None => {
                    if !self.visited.visit(top.vertex) {
                        self.collection.pop();
                        continue;
                    }

                    let neighbors = graph.neighbors(top.vertex).rev().map(|(u, _)| u);
                    top.neighbors = Some(neighbors.collect());
                    return Some(top.vertex);
                }
            };

            match neighbors.pop() {
                Some(u) => {
                    if !self.visited.is_visited(u) {
                        self.collection.push(RawDfsRecursiveItem::new(u));
                    }
                }
                None => {
                    self.collection.pop();
                }
            }
        }
    }
}
