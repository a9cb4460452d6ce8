#![no_main]

use libfuzzer_sys::fuzz_target;

use wdigraph::{algo::shortest_paths::Error, graph::Graph, infra::arbitrary::MutOpsSeq};

fuzz_target!(|ops: MutOpsSeq<u8, u8>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
    }

    for start in graph.vertices() {
        let bfs = graph.bfs(start).unwrap();
        let dfs = graph.iterative_dfs(start).unwrap();

        assert_eq!(dfs, graph.recursive_dfs(start).unwrap());
        assert_eq!(bfs.first(), Some(&start));
        assert_eq!(dfs.first(), Some(&start));

        let mut bfs_sorted = bfs.clone();
        let mut dfs_sorted = dfs.clone();
        bfs_sorted.sort();
        dfs_sorted.sort();
        assert_eq!(bfs_sorted, dfs_sorted);

        let shortest_paths = match graph.dijkstra(start) {
            Ok(shortest_paths) => shortest_paths,
            // Long paths of heavy edges do not fit into u8 distances.
            Err(Error::DistanceOverflow) => continue,
            Err(error) => panic!("{error}"),
        };

        for vertex in graph.vertices() {
            assert_eq!(shortest_paths.is_reachable(vertex), bfs_sorted.binary_search(&vertex).is_ok());
        }
    }
});
