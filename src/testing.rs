use crate::prelude::*;

/// The undirected weighted example used throughout the algorithm tests:
///
/// ```text
/// (0,1,9) (0,2,1) (1,3,9) (2,3,5) (2,4,6) (3,5,2) (4,5,3)
/// ```
///
/// Edges are inserted in this order, so neighborhoods keep it as well.
pub(crate) fn six_vertex_example() -> WeightedGraph<i32> {
    WeightedGraph::from_weighted_edges(
        6,
        false,
        [
            (9, 0, 1),
            (1, 0, 2),
            (9, 1, 3),
            (5, 2, 3),
            (6, 2, 4),
            (2, 3, 5),
            (3, 4, 5),
        ],
    )
}

/// Checks the query and editing surface of [`Graph`] against a naive list of neighborhoods.
/// The second argument selects directed or undirected graphs.
macro_rules! test_graph_ops {
    ($env:ident, $directed:literal) => {
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random edges for nodes `0..n`, possibly with loops and duplicates
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Sorted (out-)neighborhoods of the multigraph given by `edges`
            fn reference(n: NumNodes, edges: &[Edge]) -> Vec<Vec<Node>> {
                let mut nbs = vec![Vec::new(); n as usize];
                for &Edge(u, v) in edges {
                    nbs[u as usize].push(v);
                    if !$directed && u != v {
                        nbs[v as usize].push(u);
                    }
                }
                for list in &mut nbs {
                    list.sort_unstable();
                }
                nbs
            }

            fn assert_matches(graph: &Graph, nbs: &[Vec<Node>]) {
                assert_eq!(graph.len(), nbs.len());
                for u in graph.vertices() {
                    let list = &nbs[u as usize];
                    assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), *list);
                    assert_eq!(graph.degree_of(u) as usize, list.len());
                    for v in graph.vertices() {
                        assert_eq!(graph.has_edge(u, v), list.contains(&v));
                    }
                }
            }

            #[test]
            fn graph_new() {
                for n in 0..20 {
                    let graph = Graph::new(n, $directed);

                    assert_eq!(graph.is_directed(), $directed);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices_range().len(), n as usize);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 10, 20] {
                    for m in [0, n, n * 4] {
                        let edges = random_edges(rng, n, m);
                        let graph = Graph::from_edges(n, $directed, edges.iter().copied());

                        assert_eq!(graph.number_of_edges(), m);
                        assert_matches(&graph, &reference(n, &edges));

                        let mut expected = edges
                            .iter()
                            .map(|e| if $directed { *e } else { e.normalized() })
                            .collect_vec();
                        expected.sort_unstable();
                        assert_eq!(graph.ordered_edges(!$directed).collect_vec(), expected);
                        assert_eq!(graph.canonical_edges().count(), m as usize);
                    }
                }
            }

            #[test]
            fn in_degrees() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 20] {
                    let edges = random_edges(rng, n, n * 3);
                    let graph = Graph::from_edges(n, $directed, edges.iter().copied());

                    let in_degrees = graph.in_degrees();
                    for u in graph.vertices() {
                        let expected = if $directed {
                            edges.iter().filter(|e| e.1 == u).count()
                        } else {
                            graph.degree_of(u) as usize
                        };
                        assert_eq!(graph.in_degree_of(u) as usize, expected);
                        assert_eq!(in_degrees[u as usize] as usize, expected);
                        assert_eq!(graph.in_neighbors_of(u).count(), expected);
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [3 as NumNodes, 10, 20] {
                    let mut edges = random_edges(rng, n, n * 3);
                    let mut graph = Graph::new(n, $directed);
                    graph.add_edges(edges.iter().copied());
                    assert_matches(&graph, &reference(n, &edges));

                    for _ in 0..n {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        let position = edges
                            .iter()
                            .position(|&e| e == Edge(u, v) || (!$directed && e == Edge(v, u)));
                        assert_eq!(graph.try_remove_edge(u, v), position.is_some());
                        if let Some(i) = position {
                            edges.swap_remove(i);
                        }

                        assert_eq!(graph.number_of_edges() as usize, edges.len());
                        assert_matches(&graph, &reference(n, &edges));
                    }

                    let Edge(u, v) = edges[0];
                    let copies = edges
                        .iter()
                        .filter(|&&e| e == Edge(u, v) || (!$directed && e == Edge(v, u)))
                        .count();
                    assert_eq!(graph.remove_all_edges(u, v) as usize, copies);
                    assert!(!graph.has_edge(u, v));
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Runs a generator for several seeds and checks `$check` on every generated graph
macro_rules! test_generator {
    ($name:ident, $generator:expr, |$graph:ident| $check:block) => {
        #[test]
        fn $name() {
            use rand::SeedableRng;

            let generator = $generator;
            for seed in 0..20u64 {
                let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(seed);
                let $graph = $crate::gens::GraphGenerator::generate(&generator, rng);
                $check
            }
        }
    };
}

pub(crate) use test_generator;
