use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Whether edges of a graph have an orientation.
///
/// Unlike a compile-time marker, the direction is chosen when the graph is constructed,
/// so algorithms that only make sense for one kind of graph check it at runtime.
pub trait GraphType {
    /// Returns *true* if `Edge(u, v)` and `Edge(v, u)` are distinct
    fn is_directed(&self) -> bool;

    /// Returns *true* if the graph is undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this is equivalent to `out_neighbors_of`
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges(only_normalized).sorted()
    }
}

/// Trait for accessing the neighborhood of nodes as slices in insertion order
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];

    /// Returns the `i`-th neighbor (0-indexed) of `u`, if it exists
    /// ** Panics if `u >= n` **
    fn ith_neighbor(&self, u: Node, i: usize) -> Option<Node> {
        self.as_neighbors_slice(u).get(i).copied()
    }
}

/// Edges as a caller of the graph would list them: every directed edge, or every undirected
/// edge once as `(u, v)` with `u <= v`.
pub trait CanonicalEdges: AdjacencyList + GraphType {
    /// Returns all edges of the graph, each undirected edge emitted once
    fn canonical_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges(self.is_undirected())
    }
}

impl<G: AdjacencyList + GraphType> CanonicalEdges for G {}

/// Traits pertaining getters for directed graphs.
///
/// For undirected graphs in- and out-neighborhoods coincide.
pub trait DirectedAdjacencyList: AdjacencyList + GraphType {
    /// Returns an iterator over the out-neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns an iterator over the in-neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming edges of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    /// Returns the in-degree of every vertex.
    /// Computed in a single pass over all edges.
    fn in_degrees(&self) -> Vec<NumNodes> {
        if self.is_undirected() {
            return self.degrees().collect();
        }

        let mut in_deg = vec![0; self.len()];
        for Edge(_, v) in self.edges(false) {
            in_deg[v as usize] += 1;
        }
        in_deg
    }

    /// Returns the sum of in- and out-degree of `u` (the degree if undirected)
    /// ** Panics if `u >= n` **
    fn total_degree_of(&self, u: Node) -> NumNodes {
        if self.is_undirected() {
            self.degree_of(u)
        } else {
            self.in_degree_of(u) + self.out_degree_of(u)
        }
    }
}

/// Trait for testing the existence of edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u, v)` exists
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if `(u, u)` is an edge
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with `n` singleton nodes
    fn new(n: NumNodes, directed: bool) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `(u, v)` to the graph; parallel edges are allowed.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds the edge `(u, v)` unless it already exists.
    /// Returns *true* exactly if the edge was present before.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    /// ** Panics if `u >= n || v >= n` for any edge `(u, v)` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes one copy of the edge `(u, v)` from the graph.
    /// Returns *true* exactly if the edge was present.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes one copy of the edge `(u, v)` from the graph.
    /// ** Panics if the edge is not present or `u >= n || v >= n` **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v), "Edge ({u},{v}) is not present");
    }

    /// Removes every copy of the edge `(u, v)` and returns how many were removed.
    /// ** Panics if `u >= n || v >= n` **
    fn remove_all_edges(&mut self, u: Node, v: Node) -> NumEdges {
        let mut removed = 0;
        while self.try_remove_edge(u, v) {
            removed += 1;
        }
        removed
    }
}

/// Provides a function to append a vertex
pub trait GraphVertexEditing {
    /// Appends an isolated vertex and returns its id
    fn add_vertex(&mut self) -> Node;
}

/// Trait for creating a graph from a list of edges
pub trait GraphFromScratch {
    /// Creates a graph with `n` nodes and the given edges in order
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self {
        let mut graph = Self::new(n, directed);
        graph.add_edges(edges);
        graph
    }
}
