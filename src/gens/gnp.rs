/*!
# Random Graphs with Edge Probability

[`Gnp`] tries every pair of distinct nodes independently. It differs from a plain `G(n,p)` in
three ways that make its output better suited for step-by-step demonstrations:

- node `0` uses the doubled probability `2p`, so the usual start node is well connected,
- a pair whose reverse was accepted before is skipped, so there are no parallel edges,
- a node left without (out-)neighbors after its turn is connected to one random other node.

```
use stepgraph::{gens::*, prelude::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(7);
let graph = Gnp::new().nodes(20).prob(0.1).generate(&mut rng);
assert!(graph.vertices().all(|u| graph.degree_of(u) > 0));
```
*/

use rand_distr::{Distribution, Uniform};

use crate::utils::Probability;

use super::*;

/// Generator for random graphs where every pair is tried with probability `p`
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    prob: f64,
    directed: bool,
}

impl Gnp {
    /// Creates a new generator for the empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge probability
    pub fn prob(mut self, p: f64) -> Self {
        self.prob = p;
        self
    }

    /// Sets whether the graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for Gnp {
    /// # Panics
    /// Panics if the probability is not within `[0, 1]`
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        assert!(
            self.prob.is_valid_probility(),
            "Probability must be in [0, 1], got {}",
            self.prob
        );

        let n = self.n;
        let mut graph = Graph::new(n, self.directed);
        // partners for nodes left without neighbors; `i` itself is skipped by shifting
        let partner_gen = Uniform::new(0 as Node, n.saturating_sub(1).max(1)).unwrap();

        for i in 0..n {
            let p = if i == 0 { 2.0 * self.prob } else { self.prob };
            for j in (0..n).filter(|&j| j != i) {
                if (i < j || !graph.has_edge(j, i)) && rng.random::<f64>() < p {
                    graph.add_edge(i, j);
                }
            }

            if n > 1 && graph.degree_of(i) == 0 {
                let mut j = partner_gen.sample(rng);
                if j >= i {
                    j += 1;
                }
                graph.add_edge(i, j);
            }
        }

        graph.sort_neighbors();
        trace!("gnp: n={n} p={} m={}", self.prob, graph.number_of_edges());
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn no_isolated_nodes_and_no_duplicates() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for directed in [false, true] {
            for n in [2, 5, 30] {
                for p in [0.0, 0.05, 0.3] {
                    let g = Gnp::new()
                        .nodes(n)
                        .prob(p)
                        .directed(directed)
                        .generate(&mut rng);

                    assert_eq!(g.number_of_nodes(), n);
                    assert!(g.vertices().all(|u| g.degree_of(u) > 0));
                    assert!(g.vertices().all(|u| !g.has_self_loop(u)));

                    let mut pairs = g.edges(false).collect_vec();
                    let total = pairs.len();
                    pairs.sort();
                    pairs.dedup();
                    assert_eq!(pairs.len(), total);
                }
            }
        }
    }

    #[test]
    fn certain_probability_is_complete() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let g = Gnp::new().nodes(6).prob(1.0).generate(&mut rng);
        assert_eq!(g.number_of_edges(), 15);

        // the reverse of every accepted pair is skipped, leaving the last node without
        // out-neighbors until it is connected at random
        let g = Gnp::new().nodes(6).prob(1.0).directed(true).generate(&mut rng);
        assert_eq!(g.number_of_edges(), 16);
        assert_eq!(g.out_degree_of(5), 1);
        assert!(g.edges(false).all(|Edge(u, v)| u < v || u == 5));
    }

    #[test]
    fn sorted_and_reproducible() {
        let a = Gnp::new()
            .nodes(25)
            .prob(0.2)
            .generate(&mut Pcg64Mcg::seed_from_u64(11));
        let b = Gnp::new()
            .nodes(25)
            .prob(0.2)
            .generate(&mut Pcg64Mcg::seed_from_u64(11));
        assert_eq!(a, b);
        assert!(a.vertices().all(|u| a.neighbors_of(u).is_sorted()));
    }

    #[test]
    fn single_node() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let g = Gnp::new().nodes(1).prob(0.5).generate(&mut rng);
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        Gnp::new().nodes(3).prob(1.5).generate(&mut rng);
    }
}
