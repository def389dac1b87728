/*!
# Graph Generators

This module provides builders for deterministic and random example graphs.

Every generator follows the same builder pattern:

1. Create a generator instance (e.g., `RandomConnected::new()`).
2. Set parameters using chained setters (e.g., `.nodes(n).edges(m)`).
3. Produce a [`Graph`] via [`GraphGenerator::generate`], passing the random source.

Deterministic structures ([`Complete`], [`Lattice`]) additionally offer `build()` which needs no
random source. All random generators sort the neighborhoods of the result, so graphs drawn from
the same seed are identical.

Supported models include:
- [`Gnp`]: every ordered pair is tried independently, no node stays without neighbors
- [`Complete`] and [`Lattice`]: deterministic structures
- [`RandomTree`] and [`RandomConnected`]: spanning tree plus extra edges
- [`RandomDag`]: edges follow a hidden topological order, optionally weakly connected
- [`RandomStronglyConnected`] and [`RandomTarjanScc`]: planted strongly connected components
- [`RandomEuler`]: connected graphs with balanced degrees

The [`RandomGraph`] trait bundles the common models into constructors on [`Graph`].

```
use stepgraph::{gens::*, prelude::*};
use rand::SeedableRng;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
let graph = RandomConnected::new().nodes(10).edges(15).generate(&mut rng);
assert_eq!(graph.number_of_edges(), 15);
```
*/

use itertools::Itertools;
use log::trace;
use rand::{Rng, seq::SliceRandom};

use crate::{prelude::*, utils::UnionFind};

mod dag;
mod euler;
mod gnp;
mod scc;
mod structures;
mod substructures;
mod tree;

pub use dag::*;
pub use euler::*;
pub use gnp::*;
pub use scc::*;
pub use structures::*;
pub use substructures::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in place
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in place
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configured graph generator
pub trait GraphGenerator {
    /// Generates a new graph using `rng` as the only source of randomness.
    ///
    /// # Panics
    /// Panics if the configured parameters admit no graph (see the individual generators).
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng;
}

/// Maximum number of simple edges (no loops, no parallel edges) on `n` nodes
pub(crate) fn max_simple_edges(n: NumNodes, directed: bool) -> u64 {
    let n = n as u64;
    let pairs = n * n.saturating_sub(1);
    if directed { pairs } else { pairs / 2 }
}

/// Returns all loop-free node pairs, ordered pairs if `directed` and normalized ones otherwise
pub(crate) fn candidate_pairs(n: NumNodes, directed: bool) -> Vec<Edge> {
    (0..n)
        .cartesian_product(0..n)
        .map(|(u, v)| Edge(u, v))
        .filter(|e| !e.is_loop() && (directed || e.is_normalized()))
        .collect()
}

/// Selects a spanning forest of `candidates`, then fills up with the remaining candidates in
/// their order until `m` edges are chosen.
///
/// Since every candidate joining two different trees is accepted, the result spans every
/// connected component of the candidate graph.
pub(crate) fn spanning_then_fill(n: NumNodes, candidates: &[Edge], m: usize) -> Vec<Edge> {
    let mut uf = UnionFind::new(n);
    let mut chosen = vec![false; candidates.len()];
    let mut edges = Vec::with_capacity(m);

    for (i, &Edge(u, v)) in candidates.iter().enumerate() {
        if uf.union(u, v) {
            chosen[i] = true;
            edges.push(Edge(u, v));
        }
    }

    let extra = candidates
        .iter()
        .zip(&chosen)
        .filter(|(_, c)| !**c)
        .map(|(&e, _)| e)
        .take(m.saturating_sub(edges.len()));
    edges.extend(extra);

    trace!("spanning_then_fill: n={n} picked {} edges", edges.len());
    edges
}

/// Returns the nodes `0..n` in random order
pub(crate) fn random_permutation<R: Rng>(rng: &mut R, n: NumNodes) -> Vec<Node> {
    let mut nodes = (0..n).collect_vec();
    nodes.shuffle(rng);
    nodes
}

/// Builds the graph and sorts all neighborhoods
pub(crate) fn finish_graph<I>(n: NumNodes, directed: bool, edges: I) -> Graph
where
    I: IntoIterator<Item = Edge>,
{
    let mut graph = Graph::from_edges(n, directed, edges);
    graph.sort_neighbors();
    graph
}

/// Trait for building graph instances from the common random models.
///
/// All methods delegate to the corresponding builder.
pub trait RandomGraph: Sized {
    /// Creates a [`Gnp`] graph with edge probability `p`
    fn gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self;

    /// Creates a uniformly random spanning tree on `n` nodes
    fn random_tree<R: Rng>(rng: &mut R, n: NumNodes) -> Self;

    /// Creates a connected undirected graph with exactly `m` edges
    fn random_connected<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self;

    /// Creates a directed acyclic graph with exactly `m` edges
    fn random_dag<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self;

    /// Creates a weakly connected directed acyclic graph with exactly `m` edges
    fn random_connected_dag<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self;

    /// Creates a strongly connected directed graph with exactly `m` edges
    fn random_strongly_connected<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self;

    /// Creates a connected graph with an Euler circuit made of `cycles` random cycles
    /// on top of a Hamiltonian one
    fn random_euler<R: Rng>(rng: &mut R, n: NumNodes, cycles: usize, directed: bool) -> Self;
}

impl RandomGraph for Graph {
    fn gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self {
        Gnp::new().nodes(n).prob(p).directed(directed).generate(rng)
    }

    fn random_tree<R: Rng>(rng: &mut R, n: NumNodes) -> Self {
        RandomTree::new().nodes(n).generate(rng)
    }

    fn random_connected<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self {
        RandomConnected::new().nodes(n).edges(m).generate(rng)
    }

    fn random_dag<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self {
        RandomDag::new().nodes(n).edges(m).generate(rng)
    }

    fn random_connected_dag<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self {
        RandomDag::new().nodes(n).edges(m).connected(true).generate(rng)
    }

    fn random_strongly_connected<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self {
        RandomStronglyConnected::new().nodes(n).edges(m).generate(rng)
    }

    fn random_euler<R: Rng>(rng: &mut R, n: NumNodes, cycles: usize, directed: bool) -> Self {
        RandomEuler::new()
            .nodes(n)
            .cycles(cycles)
            .directed(directed)
            .generate(rng)
    }
}
