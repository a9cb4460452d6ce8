use bitvec::prelude::*;

use crate::core::{Neighbors, Weight};

use super::Error;

pub(super) struct RawShortestPaths<W> {
    pub dist: Vec<Option<W>>,
    pub pred: Vec<Option<usize>>,
}

pub(super) fn dijkstra<G, W>(graph: &G, source: usize) -> Result<RawShortestPaths<W>, Error>
where
    G: Neighbors<Weight = W>,
    W: Weight,
{
    let n = graph.vertex_bound();

    let mut visited = bitvec![0; n];
    let mut dist = vec![None; n];
    let mut pred = vec![None; n];

    dist[source] = Some(W::zero());

    while let Some(vertex) = min_distance(&dist, &visited) {
        visited.set(vertex, true);

        let vertex_dist = match dist[vertex].clone() {
            Some(vertex_dist) => vertex_dist,
            None => break,
        };

        for (next, edge_dist) in graph.neighbors(vertex) {
            // `is_unsigned` is a constant, so the comparison is compiled out
            // for unsigned weights.
            if !W::is_unsigned() && *edge_dist < W::zero() {
                return Err(Error::NegativeWeight);
            }

            if visited[next] {
                continue;
            }

            let next_dist = match vertex_dist.clone().checked_add(edge_dist.clone()) {
                Some(next_dist) => next_dist,
                None => return Err(Error::DistanceOverflow),
            };

            // Relaxation.
            let improves = match &dist[next] {
                Some(curr_dist) => next_dist < *curr_dist,
                None => true,
            };

            if improves {
                dist[next] = Some(next_dist);
                pred[next] = Some(vertex);
            }
        }
    }

    Ok(RawShortestPaths { dist, pred })
}

// Unvisited vertex with the smallest finite distance. Ties are broken by the
// smallest index.
fn min_distance<W: Weight>(dist: &[Option<W>], visited: &BitSlice) -> Option<usize> {
    let mut min: Option<(usize, &W)> = None;

    for (index, vertex_dist) in dist.iter().enumerate() {
        if visited[index] {
            continue;
        }

        if let Some(vertex_dist) = vertex_dist {
            match min {
                Some((_, min_dist)) if vertex_dist >= min_dist => {}
                _ => min = Some((index, vertex_dist)),
            }
        }
    }

    min.map(|(index, _)| index)
}
