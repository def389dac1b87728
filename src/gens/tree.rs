/*!
# Random Trees and Connected Graphs

Both generators start from a random spanning tree: the candidate edges are shuffled and every
candidate joining two different trees of a [`UnionFind`] is accepted. [`RandomConnected`] then
keeps adding the remaining candidates in shuffled order until the requested number of edges is
reached, so its output has exactly one component.

```
use stepgraph::{algo::*, gens::*, prelude::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(2);
let tree = RandomTree::new().nodes(8).generate(&mut rng);
assert_eq!(tree.number_of_edges(), 7);
assert!(tree.connected());
```
*/

use crate::algo::Traversal;

use super::*;

/// Returns the edges of a random spanning forest of `graph`.
///
/// The canonical edges of `graph` are shuffled and processed in that order; an edge is kept if
/// it joins two different trees. The forest spans every connected component of `graph`.
pub fn random_subtree<R, G>(rng: &mut R, graph: &G) -> Vec<Edge>
where
    R: Rng,
    G: AdjacencyList + GraphType,
{
    let mut candidates = graph.canonical_edges().filter(|e| !e.is_loop()).collect_vec();
    candidates.shuffle(rng);

    let mut uf = UnionFind::new(graph.number_of_nodes());
    candidates
        .into_iter()
        .filter(|&Edge(u, v)| uf.union(u, v))
        .collect()
}

/// Generator for a random tree on `n` nodes.
///
/// Directed trees are oriented away from node `0`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
    directed: bool,
}

impl RandomTree {
    /// Creates a new generator for the empty undirected tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the tree is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomTree {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let n = self.n;
        let edges = random_subtree(rng, &Complete::new().nodes(n).build());
        if !self.directed || n == 0 {
            return finish_graph(n, self.directed, edges);
        }

        let tree = Graph::from_edges(n, false, edges);
        finish_graph(n, true, tree.bfs(0))
    }
}

/// Generator for a random connected graph with `n` nodes and exactly `m` edges.
///
/// Directed graphs are weakly connected. There are no self-loops and no parallel edges.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomConnected {
    n: NumNodes,
    m: NumEdges,
    directed: bool,
}

impl RandomConnected {
    /// Creates a new generator for the empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl NumNodesGen for RandomConnected {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomConnected {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for RandomConnected {
    /// # Panics
    /// Panics if `n == 0`, if `m < n - 1` or if `m` exceeds the number of simple edges
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let (n, m) = (self.n, self.m);
        assert!(n > 0, "At least one node must be generated!");
        assert!(m >= n - 1, "A connected graph on {n} nodes needs at least {} edges", n - 1);
        assert!(
            m as u64 <= max_simple_edges(n, self.directed),
            "Cannot place {m} edges on {n} nodes without parallel edges"
        );

        let mut candidates = candidate_pairs(n, self.directed);
        candidates.shuffle(rng);

        finish_graph(n, self.directed, spanning_then_fill(n, &candidates, m as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Connectivity;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn subtree_spans_components() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let graph = Graph::from_edges(
            7,
            false,
            [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (5, 5)],
        );

        for _ in 0..10 {
            let forest = random_subtree(&mut rng, &graph);
            assert_eq!(forest.len(), 4);
            assert!(forest.iter().all(|&Edge(u, v)| graph.has_edge(u, v) && u != v));

            let forest = Graph::from_edges(7, false, forest);
            assert_eq!(
                forest.connected_components(),
                graph.connected_components()
            );
        }
    }

    #[test]
    fn trees() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for n in [1, 2, 10, 50] {
            let tree = RandomTree::new().nodes(n).generate(&mut rng);
            assert_eq!(tree.number_of_edges(), n - 1);
            assert!(tree.connected());

            let arborescence = RandomTree::new().nodes(n).directed(true).generate(&mut rng);
            assert_eq!(arborescence.number_of_edges(), n - 1);
            assert_eq!(arborescence.in_degree_of(0), 0);
            assert!((1..n).all(|u| arborescence.in_degree_of(u) == 1));
            assert_eq!(arborescence.bfs_order(0).len(), n as usize);
        }

        assert!(RandomTree::new().generate(&mut rng).is_empty());
    }

    #[test]
    fn connected_graphs() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for directed in [false, true] {
            for (n, m) in [(1, 0), (5, 4), (5, 7), (5, 10), (30, 60)] {
                let g = RandomConnected::new()
                    .nodes(n)
                    .edges(m)
                    .directed(directed)
                    .generate(&mut rng);

                assert_eq!(g.number_of_nodes(), n);
                assert_eq!(g.number_of_edges(), m);
                assert!(g.connected());
                assert!(g.vertices().all(|u| !g.has_self_loop(u)));
            }
        }

        let full = RandomConnected::new().nodes(4).edges(12).directed(true).generate(&mut rng);
        assert_eq!(full, Complete::new().nodes(4).directed(true).build());
    }

    #[test]
    #[should_panic]
    fn too_few_edges() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        RandomConnected::new().nodes(5).edges(3).generate(&mut rng);
    }

    #[test]
    #[should_panic]
    fn too_many_edges() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        RandomConnected::new().nodes(5).edges(11).generate(&mut rng);
    }
}
