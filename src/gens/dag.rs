/*!
# Random Directed Acyclic Graphs

A hidden random permutation fixes a topological order; only pairs pointing forward in that
order are candidates. Sampling `m` of them yields a DAG, and picking a spanning forest of the
shuffled candidates first (see [`RandomDag::connected`]) makes it weakly connected.
*/

use super::*;

/// Generator for random directed acyclic graphs with `n` nodes and exactly `m` edges
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomDag {
    n: NumNodes,
    m: NumEdges,
    connected: bool,
}

impl RandomDag {
    /// Creates a new generator for the empty DAG
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the result to be weakly connected
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    /// Generates the graph together with the hidden topological order
    ///
    /// # Panics
    /// Panics if `m` exceeds `n(n-1)/2` or, for connected DAGs, if `n == 0` or `m < n - 1`
    pub fn generate_with_order<R>(&self, rng: &mut R) -> (Graph, Vec<Node>)
    where
        R: Rng,
    {
        let (n, m) = (self.n, self.m);
        assert!(
            m as u64 <= max_simple_edges(n, false),
            "A DAG on {n} nodes has at most {} edges",
            max_simple_edges(n, false)
        );
        if self.connected {
            assert!(n > 0, "At least one node must be generated!");
            assert!(m >= n - 1, "A connected DAG on {n} nodes needs at least {} edges", n - 1);
        }

        let order = random_permutation(rng, n);
        let mut candidates = candidate_pairs(n, false)
            .into_iter()
            .map(|Edge(i, j)| Edge(order[i as usize], order[j as usize]))
            .collect_vec();
        candidates.shuffle(rng);

        let edges = if self.connected {
            spanning_then_fill(n, &candidates, m as usize)
        } else {
            candidates.truncate(m as usize);
            candidates
        };

        (finish_graph(n, true, edges), order)
    }
}

impl NumNodesGen for RandomDag {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomDag {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for RandomDag {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        self.generate_with_order(rng).0
    }
}
