use std::fmt;

use proptest::{
    prelude::RngCore,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{core::Weight, graph::Graph};

/// Strategy for random graphs with vertices `0..n` and edge weights generated
/// by the given strategy.
///
/// Edges with a [reserved](Weight::is_reserved) weight are not added.
pub fn graph<E: Strategy>(edge: E) -> GraphStrategy<E> {
    GraphStrategy::new(edge)
}

pub struct GraphStrategy<E: Strategy> {
    edge: E,
    params: StrategyParams,
}

impl<E: Strategy> fmt::Debug for GraphStrategy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<E: Strategy> GraphStrategy<E> {
    pub fn new(edge: E) -> Self {
        Self::with_params(edge, StrategyParams::default())
    }

    pub fn with_params(edge: E, params: StrategyParams) -> Self {
        Self { edge, params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph(0..10).max_size(100).allow_loops()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 128,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<E: Strategy> Strategy for GraphStrategy<E>
where
    E::Value: Weight,
{
    type Tree = GraphValueTree<E::Tree>;
    type Value = Graph<usize, E::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = (runner.rng().next_u64() % (self.params.max_size as u64 + 1)) as usize;
        let p = unit_f32(runner.rng()) * self.params.density;

        let mut edges = Vec::new();

        if p > 0.0 {
            // Efficient generation of large random networks
            // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
            //
            // Adapted to directed graphs by skipping over all n * n cells of
            // the adjacency matrix in row-major order.
            let cells = n * n;
            let mut k = usize::MAX; // -1

            loop {
                let r = unit_f32(runner.rng());
                let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
                k = k.wrapping_add(1).saturating_add(skip);

                if k >= cells {
                    break;
                }

                let (src, dst) = (k / n, k % n);

                if src == dst && !self.params.allow_loops {
                    continue;
                }

                edges.push((src, dst, self.edge.new_tree(runner)?));
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            removed_vertices: FxHashSet::default(),
            removed_edges: FxHashSet::default(),
            shrink: Shrink::Vertex(0),
            last: None,
        })
    }
}

// Uniform in [0, 1), built from the top 24 bits to fit the f32 mantissa.
fn unit_f32(rng: &mut impl RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Vertex(usize),
    Edge(usize),
    Weight(usize),
    Done,
}

/// Simplifies the structure first, one vertex and then one edge at a time,
/// and the weights of the remaining edges afterwards.
#[derive(Debug, Clone)]
pub struct GraphValueTree<E: ValueTree> {
    vertex_count: usize,
    edges: Vec<(usize, usize, E)>,
    removed_vertices: FxHashSet<usize>,
    removed_edges: FxHashSet<usize>,
    shrink: Shrink,
    last: Option<Shrink>,
}

impl<E: ValueTree> GraphValueTree<E> {
    fn edge_exists(&self, e: usize) -> bool {
        let (src, dst, _) = &self.edges[e];
        !(self.removed_edges.contains(&e)
            || self.removed_vertices.contains(src)
            || self.removed_vertices.contains(dst))
    }
}

impl<E: ValueTree> ValueTree for GraphValueTree<E>
where
    E::Value: Weight,
{
    type Value = Graph<usize, E::Value>;

    fn current(&self) -> Self::Value {
        let mut graph = Graph::with_capacity(self.vertex_count - self.removed_vertices.len());
        let mut indices = Vec::with_capacity(self.vertex_count);

        for v in 0..self.vertex_count {
            if self.removed_vertices.contains(&v) {
                indices.push(None);
            } else {
                indices.push(Some(graph.add_vertex(graph.vertex_count())));
            }
        }

        for (e, (src, dst, edge)) in self.edges.iter().enumerate() {
            if let (true, Some(src), Some(dst)) = (self.edge_exists(e), indices[*src], indices[*dst])
            {
                // Reserved weights are refused by the graph.
                let _ = graph.add_edge(&src, &dst, edge.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        loop {
            match self.shrink {
                Shrink::Vertex(v) if v < self.vertex_count => {
                    self.shrink = Shrink::Vertex(v + 1);

                    if self.removed_vertices.insert(v) {
                        self.last = Some(Shrink::Vertex(v));
                        return true;
                    }
                }
                Shrink::Vertex(_) => self.shrink = Shrink::Edge(0),
                Shrink::Edge(e) if e < self.edges.len() => {
                    self.shrink = Shrink::Edge(e + 1);

                    if self.edge_exists(e) {
                        self.removed_edges.insert(e);
                        self.last = Some(Shrink::Edge(e));
                        return true;
                    }
                }
                Shrink::Edge(_) => self.shrink = Shrink::Weight(0),
                Shrink::Weight(e) if e < self.edges.len() => {
                    if self.edge_exists(e) && self.edges[e].2.simplify() {
                        self.last = Some(Shrink::Weight(e));
                        return true;
                    }

                    self.shrink = Shrink::Weight(e + 1);
                }
                Shrink::Weight(_) => self.shrink = Shrink::Done,
                Shrink::Done => return false,
            }
        }
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(Shrink::Vertex(v)) => {
                self.removed_vertices.remove(&v);
                true
            }
            Some(Shrink::Edge(e)) => {
                self.removed_edges.remove(&e);
                true
            }
            Some(Shrink::Weight(e)) => {
                if self.edges[e].2.complicate() {
                    self.last = Some(Shrink::Weight(e));
                    true
                } else {
                    false
                }
            }
            Some(Shrink::Done) | None => false,
        }
    }
}
