mod common;

use common::{petgraph_random, wdigraph_random, RANDOM_SEED};
use fastrand::Rng;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn wdigraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = wdigraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.dijkstra(&0).map(|paths| paths.is_reachable(&1)));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
