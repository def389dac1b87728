use thiserror::Error;

use crate::Node;

/// Result type of fallible graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised when an operation is invoked on a graph it is not defined for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An undirected-only operation was called on a directed graph.
    #[error("`{operation}` is only defined for undirected graphs")]
    DirectedGraph { operation: &'static str },

    /// A directed-only operation was called on an undirected graph.
    #[error("`{operation}` is only defined for directed graphs")]
    UndirectedGraph { operation: &'static str },

    /// Not every node could be ordered; `sorted` holds the nodes that could.
    #[error("cycle detected after ordering {} nodes", sorted.len())]
    CycleDetected { sorted: Vec<Node> },

    /// An edge weight is negative where only non-negative weights are supported.
    #[error("edge ({u},{v}) has a negative weight")]
    NegativeWeight { u: Node, v: Node },
}
