#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random pairs of distinct vertices below the bound, each pair included with
/// probability `p`. The direction of every pair is random.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in wdigraph::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
        *w = w.wrapping_add(1).saturating_add(skip);

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v >= n {
            None
        } else if rng.bool() {
            Some((*v, *w))
        } else {
            Some((*w, *v))
        }
    }
}

pub fn wdigraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> wdigraph::graph::Graph<u32, f32> {
    let mut graph = wdigraph::graph::Graph::with_capacity(vertex_count);

    graph.extend_with_vertices(0..vertex_count as u32);

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let _ = graph.add_edge(&(u as u32), &(v as u32), rng.f32());
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> petgraph::Graph<u32, f32, Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count {
        graph.add_node(v as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
