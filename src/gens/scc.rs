/*!
# Planted Strongly Connected Components

[`RandomStronglyConnected`] hides a Hamiltonian cycle among random extra edges.
[`RandomTarjanScc`] splits the nodes into groups, makes each group strongly connected the same
way and only adds edges from earlier to later groups, so the groups are exactly the strongly
connected components of the result.

```
use stepgraph::{algo::*, gens::*, prelude::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(5);
let (graph, planted) = RandomTarjanScc::new()
    .nodes(12)
    .components(4)
    .inner_prob(0.3)
    .cross_prob(0.2)
    .generate_with_components(&mut rng);

assert_eq!(planted.len(), 4);
assert_eq!(graph.tarjan_scc().number_of_components, 4);
```
*/

use rand::seq::index;

use crate::utils::Probability;

use super::*;

/// Generator for a strongly connected directed graph with `n` nodes and exactly `m` edges.
///
/// There are no self-loops and no parallel edges.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomStronglyConnected {
    n: NumNodes,
    m: NumEdges,
}

impl RandomStronglyConnected {
    /// Creates a new generator for the empty graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomStronglyConnected {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for RandomStronglyConnected {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for RandomStronglyConnected {
    /// # Panics
    /// Panics if `n == 0`, if `m < n` for `n > 1` or if `m > n(n-1)`
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let (n, m) = (self.n, self.m);
        assert!(n > 0, "At least one node must be generated!");
        let min_edges = if n > 1 { n } else { 0 };
        assert!(
            m >= min_edges,
            "A strongly connected graph on {n} nodes needs at least {min_edges} edges"
        );
        assert!(
            m as u64 <= max_simple_edges(n, true),
            "Cannot place {m} edges on {n} nodes without parallel edges"
        );

        let mut graph = Graph::new(n, true);
        if n > 1 {
            graph.connect_cycle(random_permutation(rng, n));
        }

        let mut candidates = candidate_pairs(n, true);
        candidates.shuffle(rng);
        for Edge(u, v) in candidates {
            if graph.number_of_edges() >= m {
                break;
            }
            graph.try_add_edge(u, v);
        }

        graph.sort_neighbors();
        graph
    }
}

/// Generator for directed graphs with a known set of strongly connected components.
///
/// The nodes are shuffled and cut into `k` non-empty groups. Each group of two or more nodes
/// receives a cycle through all its members; every other ordered pair inside a group is added
/// with probability `inner_prob`. Every pair from an earlier group to a later one is added with
/// probability `cross_prob`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTarjanScc {
    n: NumNodes,
    components: NumNodes,
    inner_prob: f64,
    cross_prob: f64,
}

impl RandomTarjanScc {
    /// Creates a new generator; the number of components must be set before generating
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of planted components
    pub fn components(mut self, k: NumNodes) -> Self {
        self.components = k;
        self
    }

    /// Sets the probability of additional edges inside a component
    pub fn inner_prob(mut self, p: f64) -> Self {
        self.inner_prob = p;
        self
    }

    /// Sets the probability of edges from an earlier to a later component
    pub fn cross_prob(mut self, p: f64) -> Self {
        self.cross_prob = p;
        self
    }

    /// Generates the graph together with its components.
    ///
    /// The components are listed in the order of their groups: edges between components only
    /// lead from an earlier to a later entry. Each component is sorted.
    ///
    /// # Panics
    /// Panics if `components` is not within `1..=n` or a probability is not within `[0, 1]`
    pub fn generate_with_components<R>(&self, rng: &mut R) -> (Graph, Vec<Vec<Node>>)
    where
        R: Rng,
    {
        let (n, k) = (self.n, self.components);
        assert!(
            k > 0 && k <= n,
            "Number of components must be within 1..={n}, got {k}"
        );
        assert!(
            self.inner_prob.is_valid_probility() && self.cross_prob.is_valid_probility(),
            "Probabilities must be in [0, 1]"
        );

        let nodes = random_permutation(rng, n);
        let mut cuts = index::sample(rng, (n - 1) as usize, (k - 1) as usize)
            .into_iter()
            .map(|c| c + 1)
            .collect_vec();
        cuts.sort_unstable();

        let groups = std::iter::once(0)
            .chain(cuts)
            .chain(std::iter::once(n as usize))
            .tuple_windows()
            .map(|(begin, end)| nodes[begin..end].to_vec())
            .collect_vec();

        let mut graph = Graph::new(n, true);
        for group in &groups {
            if group.len() > 1 {
                graph.connect_cycle(group.iter().copied());
            }
            for (&u, &v) in group.iter().cartesian_product(group) {
                if u != v && !graph.has_edge(u, v) && rng.random_bool(self.inner_prob) {
                    graph.add_edge(u, v);
                }
            }
        }

        for (a, b) in groups.iter().tuple_combinations() {
            for (&u, &v) in a.iter().cartesian_product(b) {
                if rng.random_bool(self.cross_prob) {
                    graph.add_edge(u, v);
                }
            }
        }

        graph.sort_neighbors();
        trace!(
            "tarjan scc: n={n} k={k} m={}",
            graph.number_of_edges()
        );

        let components = groups
            .into_iter()
            .map(|mut group| {
                group.sort_unstable();
                group
            })
            .collect();
        (graph, components)
    }
}

impl NumNodesGen for RandomTarjanScc {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomTarjanScc {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        self.generate_with_components(rng).0
    }
}
