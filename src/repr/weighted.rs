use std::{fmt::Debug, ops::Add};

use itertools::Itertools;
use num::Zero;
use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::{Distribution, Uniform};

use super::*;

/// Numeric edge weight. Implemented for every type with the required arithmetic,
/// e.g. all primitive integers and floats.
pub trait Weight: Copy + PartialOrd + Debug + Zero + Add<Output = Self> {}

impl<W> Weight for W where W: Copy + PartialOrd + Debug + Zero + Add<Output = Self> {}

/// Inclusive range `min..=max` from which random edge weights are drawn uniformly
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightRange<W> {
    pub min: W,
    pub max: W,
}

impl<W: Weight + SampleUniform> WeightRange<W> {
    /// Creates the range `min..=max`
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn new(min: W, max: W) -> Self {
        assert!(min <= max, "Weight range must not be empty!");
        Self { min, max }
    }

    /// Returns the uniform distribution over `min..=max`
    ///
    /// # Panics
    /// Panics if a bound is not finite.
    pub fn distribution(&self) -> Uniform<W> {
        Uniform::new_inclusive(self.min, self.max).expect("Weight range must be finite!")
    }

    /// Draws a single weight
    pub fn sample<R: Rng>(&self, rng: &mut R) -> W {
        self.distribution().sample(rng)
    }
}

/// A [`Graph`] together with a dense `n x n` matrix of optional edge weights.
///
/// The matrix is symmetric for undirected graphs. Parallel edges share one weight cell.
/// Weighted algorithms treat an edge whose weight was never set as having weight zero.
#[derive(Clone, PartialEq)]
pub struct WeightedGraph<W> {
    graph: Graph,
    weights: Vec<Vec<Option<W>>>,
}

impl<W: Weight> WeightedGraph<W> {
    /// Creates an empty weighted graph with `n` singleton nodes
    pub fn new(n: NumNodes, directed: bool) -> Self {
        Self::from_graph(Graph::new(n, directed))
    }

    /// Wraps an unweighted graph; all weights are unset
    pub fn from_graph(graph: Graph) -> Self {
        let n = graph.len();
        Self {
            graph,
            weights: vec![vec![None; n]; n],
        }
    }

    /// Creates a weighted graph from `(weight, u, v)` triples in order
    pub fn from_weighted_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge<W>>>,
    ) -> Self {
        let mut graph = Self::new(n, directed);
        for WeightedEdge(w, u, v) in edges.into_iter().map(|e| e.into()) {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Returns the underlying unweighted graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Drops the weights
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Adds the edge `(u, v)` with weight `w`. A previous weight of the pair is overwritten.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node, w: W) {
        self.graph.add_edge(u, v);
        self.set_weight(u, v, w);
    }

    /// Removes one copy of `(u, v)`. The weight is cleared once no copy remains.
    /// Returns *true* exactly if the edge was present.
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.graph.try_remove_edge(u, v) {
            return false;
        }
        if !self.graph.has_edge(u, v) {
            self.weights[u as usize][v as usize] = None;
            if self.graph.is_undirected() {
                self.weights[v as usize][u as usize] = None;
            }
        }
        true
    }

    /// Sets the weight of the pair `(u, v)` (and `(v, u)` if undirected).
    /// The pair does not need to be an edge.
    /// ** Panics if `u >= n || v >= n` **
    pub fn set_weight(&mut self, u: Node, v: Node, w: W) {
        self.weights[u as usize][v as usize] = Some(w);
        if self.graph.is_undirected() {
            self.weights[v as usize][u as usize] = Some(w);
        }
    }

    /// Returns the weight of `(u, v)` if one was set
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Option<W> {
        self.weights[u as usize][v as usize]
    }

    /// Weight used by the algorithms: unset weights count as zero
    pub(crate) fn weight_or_zero(&self, u: Node, v: Node) -> W {
        self.weight(u, v).unwrap_or_else(W::zero)
    }

    /// Returns all edges as `(weight, u, v)` in adjacency order.
    /// Undirected edges are listed once with `u <= v`.
    pub fn weighted_edges(&self) -> Vec<WeightedEdge<W>> {
        self.graph
            .canonical_edges()
            .map(|Edge(u, v)| WeightedEdge(self.weight_or_zero(u, v), u, v))
            .collect()
    }

    /// Appends an isolated vertex and returns its id
    pub fn add_vertex(&mut self) -> Node {
        for row in &mut self.weights {
            row.push(None);
        }
        let u = self.graph.add_vertex();
        self.weights.push(vec![None; self.graph.len()]);
        u
    }

    /// Sorts every neighborhood in ascending order
    pub fn sort_neighbors(&mut self) {
        self.graph.sort_neighbors();
    }
}

impl<W: Weight + SampleUniform> WeightedGraph<W> {
    /// Draws a weight from `range` for every edge; undirected edges get one symmetric weight
    pub fn randomize_weights<R: Rng>(&mut self, rng: &mut R, range: WeightRange<W>) {
        let distr = range.distribution();
        let edges = self.graph.canonical_edges().collect_vec();
        for Edge(u, v) in edges {
            let w = distr.sample(rng);
            self.set_weight(u, v, w);
        }
    }

    /// Wraps `graph` and assigns a random weight from `range` to every edge
    pub fn with_random_weights<R: Rng>(graph: Graph, rng: &mut R, range: WeightRange<W>) -> Self {
        let mut weighted = Self::from_graph(graph);
        weighted.randomize_weights(rng, range);
        weighted
    }
}

impl<W: Weight> Debug for WeightedGraph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("directed", &self.graph.is_directed())
            .field("n", &self.graph.number_of_nodes())
            .field(
                "edges",
                &self
                    .weighted_edges()
                    .iter()
                    .map(|e| (e.0, e.1, e.2))
                    .collect_vec(),
            )
            .finish()
    }
}

impl<W> GraphType for WeightedGraph<W> {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

impl<W> GraphNodeOrder for WeightedGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl<W> GraphEdgeOrder for WeightedGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl<W> AdjacencyList for WeightedGraph<W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<W> DirectedAdjacencyList for WeightedGraph<W> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.in_neighbors_of(u)
    }
}

impl<W> NeighborsSlice for WeightedGraph<W> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.graph.as_neighbors_slice(u)
    }
}

impl<W> AdjacencyTest for WeightedGraph<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::six_vertex_example;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn directed_weights() {
        let mut graph = WeightedGraph::new(3, true);
        graph.add_edge(0, 1, 3);

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1]);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.weight(0, 1), Some(3));
        assert_eq!(graph.weight(1, 0), None);
    }

    #[test]
    fn undirected_weights_are_symmetric() {
        let mut graph = WeightedGraph::new(3, false);
        graph.add_edge(2, 1, 7);
        assert_eq!(graph.weight(1, 2), Some(7));
        graph.set_weight(1, 2, 4);
        assert_eq!(graph.weight(2, 1), Some(4));
        assert_eq!(graph.weighted_edges(), vec![WeightedEdge(4, 1, 2)]);

        assert!(graph.try_remove_edge(1, 2));
        assert_eq!(graph.weight(2, 1), None);
        assert!(!graph.try_remove_edge(1, 2));
    }

    #[test]
    fn weighted_edges_in_adjacency_order() {
        let graph = six_vertex_example();
        assert_eq!(
            graph.weighted_edges(),
            vec![
                WeightedEdge(9, 0, 1),
                WeightedEdge(1, 0, 2),
                WeightedEdge(9, 1, 3),
                WeightedEdge(5, 2, 3),
                WeightedEdge(6, 2, 4),
                WeightedEdge(2, 3, 5),
                WeightedEdge(3, 4, 5),
            ]
        );
    }

    #[test]
    fn add_vertex_grows_matrix() {
        let mut graph = WeightedGraph::<f64>::new(1, true);
        let u = graph.add_vertex();
        graph.add_edge(0, u, 0.5);
        graph.add_edge(u, u, 1.5);
        assert_eq!(graph.weight(0, 1), Some(0.5));
        assert_eq!(graph.weight(1, 1), Some(1.5));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn random_weights_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let lattice = crate::gens::Lattice::new().rows(3).cols(5).build();
        let graph = WeightedGraph::with_random_weights(lattice, rng, WeightRange::new(5, 7));

        assert_eq!(graph.number_of_nodes(), 15);
        for u in graph.vertices() {
            for v in graph.vertices() {
                if graph.has_edge(u, v) {
                    let w = graph.weight(u, v).unwrap();
                    assert!((5..=7).contains(&w));
                    assert_eq!(graph.weight(v, u), Some(w));
                } else {
                    assert_eq!(graph.weight(u, v), None);
                }
            }
        }
    }

    #[test]
    fn unset_weights_count_as_zero() {
        let graph = WeightedGraph::<u32>::from_graph(Graph::from_edges(2, true, [(0, 1)]));
        assert_eq!(graph.weight(0, 1), None);
        assert_eq!(graph.weighted_edges(), vec![WeightedEdge(0, 0, 1)]);
    }
}
