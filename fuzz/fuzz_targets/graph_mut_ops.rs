#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;

use wdigraph::{
    graph::Graph,
    infra::{
        arbitrary::{Index, MutOp, MutOpResult, MutOpsSeq},
        testing::check_consistency,
    },
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::new();
    // Edges keyed by vertex values, which are not affected by index shifts.
    let mut edges = BTreeMap::new();

    for op in ops {
        let vertex = |index: &Index, graph: &Graph<i8, i8>| {
            index
                .get(graph.vertex_count())
                .and_then(|i| graph.vertex(i).copied())
        };

        match &op {
            MutOp::RemoveVertex(index) => {
                if let Some(removed) = vertex(index, &graph) {
                    edges.retain(|&(src, dst), _| src != removed && dst != removed);
                }
            }
            MutOp::Clear | MutOp::ClearEdges => edges.clear(),
            MutOp::RemoveEdge(src, dst) => {
                if let (Some(src), Some(dst)) = (vertex(src, &graph), vertex(dst, &graph)) {
                    edges.remove(&(src, dst));
                }
            }
            MutOp::AddEdge(src, dst, weight) => {
                if let (Some(src), Some(dst)) = (vertex(src, &graph), vertex(dst, &graph)) {
                    if *weight != i8::MAX {
                        edges.insert((src, dst), *weight);
                    }
                }
            }
            MutOp::AddVertex(_) => {}
        }

        let result = op.apply(&mut graph);

        if let MutOpResult::AddEdge(Err(error)) = &result {
            assert!(!error.is_vertex_not_found(), "{error}");
        }

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();

        let actual = graph
            .edges()
            .map(|(src, dst, weight)| ((*src, *dst), *weight))
            .collect::<BTreeMap<_, _>>();

        assert_eq!(actual, edges);
    }
});
