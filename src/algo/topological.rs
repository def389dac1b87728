use std::collections::VecDeque;

use super::*;

/// Topological orderings via Kahn's algorithm
pub trait TopologicalSort: DirectedAdjacencyList + Sized {
    /// Returns the order in which Kahn's algorithm removes nodes: nodes of in-degree zero are
    /// queued in ascending order, processed first-in first-out, and every removal decrements the
    /// in-degree of the node's out-neighbors.
    ///
    /// If the graph has a cycle, the nodes on or behind it are never removed and the returned
    /// order is shorter than the number of nodes.
    fn topological_sort(&self) -> Vec<Node> {
        let mut in_degs = self.in_degrees();
        let mut queue: VecDeque<Node> = self
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.len());

        while let Some(u) = queue.pop_front() {
            order.push(u);
            for v in self.out_neighbors_of(u) {
                in_degs[v as usize] -= 1;
                if in_degs[v as usize] == 0 {
                    queue.push_back(v);
                }
            }
        }

        debug!("topological_sort: ordered {} of {} nodes", order.len(), self.len());
        order
    }

    /// Like [`TopologicalSort::topological_sort`], but only accepts complete orders.
    ///
    /// # Errors
    /// Fails with [`GraphError::UndirectedGraph`] on undirected graphs and with
    /// [`GraphError::CycleDetected`] (carrying the partial order) if the graph has a cycle.
    fn try_topological_sort(&self) -> GraphResult<Vec<Node>> {
        if self.is_undirected() {
            return Err(GraphError::UndirectedGraph {
                operation: "try_topological_sort",
            });
        }

        let order = self.topological_sort();
        if order.len() < self.len() {
            Err(GraphError::CycleDetected { sorted: order })
        } else {
            Ok(order)
        }
    }

    /// Returns *true* if the directed graph has no cycle
    fn is_acyclic(&self) -> bool {
        self.topological_sort().len() == self.len()
    }
}

impl<G> TopologicalSort for G where G: DirectedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kahn_order() {
        let mut graph =
            Graph::from_edges(7, true, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);

        let order = graph.topological_sort();
        assert_eq!(order, vec![1, 2, 0, 3, 4, 5, 6]);
        assert_eq!(graph.try_topological_sort(), Ok(order));
        assert!(graph.is_acyclic());

        graph.add_edge(6, 2); // introduce cycle
        assert_eq!(graph.topological_sort(), vec![1]);
        assert_eq!(
            graph.try_topological_sort(),
            Err(GraphError::CycleDetected { sorted: vec![1] })
        );
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn respects_edges() {
        let graph = Graph::from_edges(5, true, [(4, 3), (3, 2), (2, 1), (1, 0), (4, 0)]);
        let order = graph.try_topological_sort().unwrap();
        let mut rank = vec![0; 5];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i;
        }
        for Edge(u, v) in graph.edges(false) {
            assert!(rank[u as usize] < rank[v as usize]);
        }
    }

    #[test]
    fn undirected_is_rejected() {
        let graph = Graph::from_edges(2, false, [(0, 1)]);
        assert!(matches!(
            graph.try_topological_sort(),
            Err(GraphError::UndirectedGraph { .. })
        ));
        assert!(graph.topological_sort().is_empty());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = Graph::from_edges(2, true, [(0, 1), (1, 1)]);
        assert_eq!(graph.topological_sort(), vec![0]);
    }
}
