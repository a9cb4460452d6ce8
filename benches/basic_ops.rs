mod common;

use common::{RandomEdges, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn wdigraph_add_remove<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = wdigraph::graph::Graph::new();

    for v in 0..N {
        graph.add_vertex(v);
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.add_edge(&u, &v, rng.f32());
    }

    for _ in 0..(N / 4) {
        let index = rng.usize(..graph.vertex_count());

        if let Some(&vertex) = graph.vertex(index) {
            let _ = graph.remove_vertex(&vertex);
        }
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.remove_edge(&u, &v);
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.add_edge(&u, &v, rng.f32());
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_matrix_add_remove<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = petgraph::matrix_graph::DiMatrix::<usize, f32>::with_capacity(N);
    let vertices = (0..N).map(|v| graph.add_node(v)).collect::<Vec<_>>();

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.update_edge(vertices[u], vertices[v], rng.f32());
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if graph.has_edge(vertices[u], vertices[v]) {
            graph.remove_edge(vertices[u], vertices[v]);
        }
    }
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn wdigraph_traversals<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = common::wdigraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let bfs = graph.bfs(&0).map(|order| order.len());
        let dfs = graph.recursive_dfs(&0).map(|order| order.len());
        (bfs, dfs)
    });
}
