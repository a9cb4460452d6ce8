use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    core::{Neighbors, Weight},
    graph::Graph,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex bound ({0}) is not equal to vertex count ({1})")]
    VertexBoundInvalid(usize, usize),
    #[error("vertex at index {0} is mapped back to index {1:?}")]
    IndexMapInvalid(usize, Option<usize>),
    #[error("matrix capacity ({0}) is not a power of two covering vertex count ({1})")]
    CapacityInvalid(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edge ({0}, {1}) has an endpoint out of vertex bound")]
    EdgeOutOfBound(usize, usize),
    #[error("edge ({0}, {1}) is reported more than once")]
    EdgeDuplicate(usize, usize),
    #[error("edge ({0}, {1}) has a reserved weight")]
    EdgeWeightReserved(usize, usize),
    #[error("sum of {2} degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize, &'static str),
}

fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
where
    F: FnOnce(usize, usize) -> ConsistencyCheckError,
{
    if actual == expected {
        Ok(())
    } else {
        Err(error(actual, expected))
    }
}

/// Checks that the vertex mapping and the adjacency matrix of the graph agree
/// with each other and with the reported counts.
pub fn check_consistency<T, W>(graph: &Graph<T, W>) -> Result<(), ConsistencyCheckError>
where
    T: Ord,
    W: Weight,
{
    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.vertex_bound(),
        vertex_count,
        ConsistencyCheckError::VertexBoundInvalid,
    )?;

    for (index, vertex) in graph.vertices().enumerate() {
        let mapped = graph.vertex_index(vertex);

        if mapped != Some(index) {
            return Err(ConsistencyCheckError::IndexMapInvalid(index, mapped));
        }
    }

    let capacity = graph.capacity();
    let capacity_valid = if capacity == 0 {
        vertex_count == 0
    } else {
        capacity.is_power_of_two() && capacity >= vertex_count
    };

    if !capacity_valid {
        return Err(ConsistencyCheckError::CapacityInvalid(
            capacity,
            vertex_count,
        ));
    }

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let mut seen = FxHashSet::default();
    let mut in_deg = vec![0usize; vertex_count];
    let mut out_deg_sum = 0;

    for src in 0..vertex_count {
        for (dst, weight) in graph.neighbors(src) {
            if dst >= vertex_count {
                return Err(ConsistencyCheckError::EdgeOutOfBound(src, dst));
            }

            if !seen.insert((src, dst)) {
                return Err(ConsistencyCheckError::EdgeDuplicate(src, dst));
            }

            if weight.is_reserved() {
                return Err(ConsistencyCheckError::EdgeWeightReserved(src, dst));
            }

            in_deg[dst] += 1;
            out_deg_sum += 1;
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    cmp(out_deg_sum, edge_count, |actual, expected| {
        ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, "out")
    })?;
    cmp(in_deg.iter().sum(), edge_count, |actual, expected| {
        ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, "in")
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_after_mutations() {
        let mut graph = Graph::with_capacity(2);

        graph.extend_with_vertices(0..5);
        graph.extend_with_edges([(0, 1, 1), (1, 2, 2), (2, 0, 3), (4, 4, 4)]);
        assert_eq!(check_consistency(&graph), Ok(()));

        graph.remove_vertex(&1).unwrap();
        graph.remove_edge(&4, &4);
        assert_eq!(check_consistency(&graph), Ok(()));

        graph.clear();
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn empty_graph_without_capacity() {
        let graph = Graph::<u8, u8>::with_capacity(0);
        assert_eq!(check_consistency(&graph), Ok(()));
    }
}
