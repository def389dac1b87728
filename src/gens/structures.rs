/*!
# Deterministic Structures

[`Complete`] graphs and rectangular [`Lattice`] grids. Both ignore the random source passed to
[`GraphGenerator::generate`] and can be built directly via `build()`.

```
use stepgraph::{gens::*, prelude::*};

let grid = Lattice::new().rows(2).cols(3).build();
assert_eq!(grid.number_of_nodes(), 6);
assert_eq!(grid.number_of_edges(), 7);
```
*/

use super::*;

/// Generator for the complete graph on `n` nodes.
///
/// Undirected graphs receive every pair `(i, j)` with `i < j`, directed ones every ordered
/// pair `i != j`. There are no self-loops.
#[derive(Debug, Copy, Clone, Default)]
pub struct Complete {
    n: NumNodes,
    directed: bool,
}

impl Complete {
    /// Creates a new generator for the empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Builds the graph
    pub fn build(&self) -> Graph {
        let edges = candidate_pairs(self.n, self.directed);
        finish_graph(self.n, self.directed, edges)
    }
}

impl NumNodesGen for Complete {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for Complete {
    fn generate<R>(&self, _rng: &mut R) -> Graph
    where
        R: Rng,
    {
        self.build()
    }
}

/// Generator for a `rows x cols` grid.
///
/// The node in row `i` and column `j` is `i * cols + j`. Horizontal edges are added row by row,
/// then vertical edges column by column. Undirected by default; directed lattices point right
/// and down.
#[derive(Debug, Copy, Clone, Default)]
pub struct Lattice {
    rows: NumNodes,
    cols: NumNodes,
    directed: bool,
}

impl Lattice {
    /// Creates a new generator for the empty lattice
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows
    pub fn rows(mut self, rows: NumNodes) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of columns
    pub fn cols(mut self, cols: NumNodes) -> Self {
        self.cols = cols;
        self
    }

    /// Sets whether the graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns the node in row `i` and column `j`
    pub fn vertex(&self, i: NumNodes, j: NumNodes) -> Node {
        i * self.cols + j
    }

    /// Builds the graph
    pub fn build(&self) -> Graph {
        let (rows, cols) = (self.rows, self.cols);
        let horizontal = (0..rows)
            .flat_map(|i| (1..cols).map(move |j| (i, j)))
            .map(|(i, j)| Edge(self.vertex(i, j - 1), self.vertex(i, j)));
        let vertical = (0..cols)
            .flat_map(|j| (1..rows).map(move |i| (i, j)))
            .map(|(i, j)| Edge(self.vertex(i - 1, j), self.vertex(i, j)));

        finish_graph(rows * cols, self.directed, horizontal.chain(vertical))
    }
}

impl GraphGenerator for Lattice {
    fn generate<R>(&self, _rng: &mut R) -> Graph
    where
        R: Rng,
    {
        self.build()
    }
}
