use std::fmt::Debug;

use itertools::{Either, Itertools};

use super::*;

/// An adjacency-list graph whose direction is fixed at construction.
///
/// Neighborhoods keep insertion order: traversal and MST outputs break ties by it.
/// Undirected edges are stored in both neighborhoods (a self-loop only once) and
/// parallel edges are permitted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Graph {
    directed: bool,
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl Graph {
    /// Creates a graph without nodes
    pub fn empty(directed: bool) -> Self {
        Self::new(0, directed)
    }

    /// Sorts every neighborhood in ascending order
    pub fn sort_neighbors(&mut self) {
        for nbs in &mut self.nbs {
            nbs.sort_unstable();
        }
    }

    /// Returns the degree of `u` as understood by a caller: the out-degree for directed graphs
    /// ** Panics if `u >= n` **
    pub fn degree(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns the number of edges entering `u`
    /// ** Panics if `u >= n` **
    pub fn indegree(&self, u: Node) -> NumNodes {
        self.in_degree_of(u)
    }

    /// Returns the number of edges leaving `u`
    /// ** Panics if `u >= n` **
    pub fn outdegree(&self, u: Node) -> NumNodes {
        self.out_degree_of(u)
    }

    /// Returns a copy of the graph with every edge reversed.
    /// Undirected graphs are returned unchanged.
    pub fn reversed(&self) -> Self {
        if self.is_undirected() {
            return self.clone();
        }
        Self::from_edges(
            self.number_of_nodes(),
            true,
            self.edges(false).map(|e| e.reverse()),
        )
    }

    fn assert_node(&self, u: Node) {
        assert!(
            (u as usize) < self.nbs.len(),
            "Node {u} is out of range for a graph with {} nodes",
            self.nbs.len()
        );
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph {{ directed: {}, n: {}, edges: [{}] }}",
            self.directed,
            self.nbs.len(),
            self.canonical_edges().join(", ")
        )
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl DirectedAdjacencyList for Graph {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        if self.directed {
            // Scans all neighborhoods; parallel edges yield the source repeatedly
            Either::Left(self.vertices().flat_map(move |v| {
                let count = self.nbs[v as usize].iter().filter(|&&w| w == u).count();
                std::iter::repeat_n(v, count)
            }))
        } else {
            Either::Right(self.neighbors_of(u))
        }
    }
}

impl NeighborsSlice for Graph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_node(v);
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphNew for Graph {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            directed,
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for Graph {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.assert_node(u);
        self.assert_node(v);

        self.nbs[u as usize].push(v);
        if !self.directed && u != v {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.add_edge(u, v);
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.assert_node(v);

        let Some(pos) = self.nbs[u as usize].iter().position(|&w| w == v) else {
            return false;
        };
        self.nbs[u as usize].remove(pos);

        if !self.directed && u != v {
            let pos = self.nbs[v as usize].iter().position(|&w| w == u);
            debug_assert!(pos.is_some());
            if let Some(pos) = pos {
                self.nbs[v as usize].remove(pos);
            }
        }

        self.num_edges -= 1;
        true
    }
}

impl GraphVertexEditing for Graph {
    fn add_vertex(&mut self) -> Node {
        self.nbs.push(Vec::new());
        (self.nbs.len() - 1) as Node
    }
}
