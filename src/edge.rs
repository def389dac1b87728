use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its weight, laid out as `(weight, u, v)`.
///
/// The field order is the order used by the MST algorithms: deriving `PartialOrd`
/// compares by weight first and breaks ties on the endpoints.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct WeightedEdge<W>(pub W, pub Node, pub Node);

impl<W: Copy> WeightedEdge<W> {
    /// Returns the weight of the edge
    pub fn weight(&self) -> W {
        self.0
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.1, self.2)
    }
}

impl<W> From<(W, Node, Node)> for WeightedEdge<W> {
    fn from(value: (W, Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}
