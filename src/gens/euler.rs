/*!
# Random Eulerian Graphs

A graph has an Euler circuit iff it is connected (ignoring isolated nodes) and every node is
balanced: an even degree for undirected graphs, equal in- and out-degree for directed ones.
[`RandomEuler`] builds such graphs as the union of a Hamiltonian cycle and further random cycles,
each of which keeps every node balanced. Parallel edges may occur.
*/

use super::*;

/// Generator for connected graphs whose nodes are all balanced
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomEuler {
    n: NumNodes,
    cycles: usize,
    directed: bool,
}

impl RandomEuler {
    /// Creates a new generator for the empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of random cycles added on top of the Hamiltonian cycle
    pub fn cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    /// Sets whether the graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Shortest simple cycle without parallel edges
    fn min_cycle_len(&self) -> NumNodes {
        if self.directed { 2 } else { 3 }
    }
}

impl NumNodesGen for RandomEuler {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomEuler {
    /// # Panics
    /// Panics if `n == 0` or if `1 < n < 3` for undirected graphs
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let n = self.n;
        let min_len = self.min_cycle_len();
        assert!(n > 0, "At least one node must be generated!");
        assert!(
            n == 1 || n >= min_len,
            "An Euler graph with {n} nodes needs a cycle of length at least {min_len}"
        );

        let mut graph = Graph::new(n, self.directed);
        if n == 1 {
            return graph;
        }

        graph.connect_cycle(random_permutation(rng, n));
        for _ in 0..self.cycles {
            let len = rng.random_range(min_len..=n);
            let mut nodes = random_permutation(rng, n);
            nodes.truncate(len as usize);
            graph.connect_cycle(nodes);
        }

        graph.sort_neighbors();
        trace!(
            "euler: n={n} cycles={} m={}",
            self.cycles + 1,
            graph.number_of_edges()
        );
        graph
    }
}
