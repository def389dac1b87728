use super::{connectivity::TarjanSearch, *};

/// Low-link based queries: bridges and articulation points of undirected graphs
pub trait Bridges: AdjacencyList + NeighborsSlice + GraphType + Sized {
    /// Returns the low-link of every node reached from `start`, given as the node with the
    /// smallest preorder number reachable via tree edges and at most one back edge.
    ///
    /// For directed graphs the low-links of Tarjan's SCC algorithm are returned instead.
    /// Unreached nodes are `None`.
    /// ** Panics if `start >= n` **
    fn dfs_lowlink(&self, start: Node) -> Vec<Option<Node>> {
        if self.is_directed() {
            let mut search = TarjanSearch::new(self);
            search.visit(start);
            search.partial_lowlink()
        } else {
            let run = self.dfs_search(start);
            undirected_lowlink(self, &run)
        }
    }

    /// Returns every bridge as `(parent, child)` tree edge in DFS order.
    /// The graph may be disconnected; every component is searched.
    ///
    /// # Errors
    /// Fails with [`GraphError::DirectedGraph`] on directed graphs.
    fn bridges(&self) -> GraphResult<Vec<Edge>> {
        if self.is_directed() {
            return Err(GraphError::DirectedGraph {
                operation: "bridges",
            });
        }

        let run = self.dfs_forest();
        let low = undirected_lowlink(self, &run);
        let pre = |u: Node| run.preorder[u as usize];

        let bridges = run
            .tree_edges()
            .into_iter()
            .filter(|&Edge(p, c)| low[c as usize].and_then(pre) > pre(p))
            .collect_vec();

        debug!("bridges: found {} in n={}", bridges.len(), self.len());
        Ok(bridges)
    }

    /// Returns all articulation points in ascending order.
    /// A DFS root is an articulation point iff it has more than one child in the DFS tree.
    ///
    /// # Errors
    /// Fails with [`GraphError::DirectedGraph`] on directed graphs.
    fn articulation_points(&self) -> GraphResult<Vec<Node>> {
        if self.is_directed() {
            return Err(GraphError::DirectedGraph {
                operation: "articulation_points",
            });
        }

        let run = self.dfs_forest();
        let low = undirected_lowlink(self, &run);
        let pre = |u: Node| run.preorder[u as usize];

        let mut is_cut = vec![false; self.len()];
        let mut root_children = vec![0usize; self.len()];
        for Edge(p, c) in run.tree_edges() {
            if run.parent[p as usize].is_none() {
                root_children[p as usize] += 1;
            } else if low[c as usize].and_then(pre) >= pre(p) {
                is_cut[p as usize] = true;
            }
        }

        let points = self
            .vertices()
            .filter(|&u| is_cut[u as usize] || root_children[u as usize] > 1)
            .collect_vec();

        debug!(
            "articulation_points: found {} in n={}",
            points.len(),
            self.len()
        );
        Ok(points)
    }
}

impl<G> Bridges for G where G: AdjacencyList + NeighborsSlice + GraphType + Sized {}

/// Computes low-links of an undirected DFS run bottom-up (in reverse preorder).
/// The tree edge to the parent is skipped once, so a parallel edge still counts as back edge.
fn undirected_lowlink<G>(graph: &G, run: &DfsRun) -> Vec<Option<Node>>
where
    G: AdjacencyList,
{
    let mut low: Vec<Option<Node>> = vec![None; graph.len()];
    let pre = |u: Node| run.preorder[u as usize];

    for &u in run.order.iter().rev() {
        let mut best = u;
        let mut parent_skipped = false;

        for v in graph.neighbors_of(u) {
            let candidate = if run.parent[v as usize] == Some(u) && v != u {
                match low[v as usize] {
                    Some(l) => l,
                    None => continue,
                }
            } else if !parent_skipped && run.parent[u as usize] == Some(v) {
                parent_skipped = true;
                continue;
            } else {
                v
            };

            if pre(candidate) < pre(best) {
                best = candidate;
            }
        }

        low[u as usize] = Some(best);
    }

    low
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bridges_in_path() {
        for n in [1, 5, 10, 15] {
            let graph = Graph::from_edges(n, false, (0..n - 1).map(|u| (u, u + 1)));

            let mut bridges = graph.bridges().unwrap();
            bridges.sort();

            assert_eq!(bridges, graph.ordered_edges(true).collect_vec());
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph = Graph::from_edges(
            6,
            false,
            [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)],
        );

        assert_eq!(graph.bridges().unwrap(), vec![Edge(1, 3)]);
        assert_eq!(graph.articulation_points().unwrap(), vec![1, 3]);
    }

    #[test]
    fn parallel_edges_are_not_bridges() {
        let graph = Graph::from_edges(3, false, [(0, 1), (0, 1), (1, 2)]);
        assert_eq!(graph.bridges().unwrap(), vec![Edge(1, 2)]);
    }

    #[test]
    fn root_with_two_children_is_articulation_point() {
        // star centered at the DFS root
        let star = Graph::from_edges(4, false, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(star.articulation_points().unwrap(), vec![0]);

        // a root with a single child is not
        let cycle = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(cycle.articulation_points().unwrap().is_empty());
        assert!(cycle.bridges().unwrap().is_empty());
    }

    #[test]
    fn disconnected() {
        let graph = Graph::from_edges(7, false, [(0, 1), (1, 2), (4, 5), (5, 6), (6, 4), (3, 3)]);
        assert_eq!(graph.bridges().unwrap(), vec![Edge(0, 1), Edge(1, 2)]);
        assert_eq!(graph.articulation_points().unwrap(), vec![1]);
    }

    #[test]
    fn directed_graphs_are_rejected() {
        let graph = Graph::from_edges(2, true, [(0, 1)]);
        assert_eq!(
            graph.bridges(),
            Err(GraphError::DirectedGraph {
                operation: "bridges"
            })
        );
        assert!(matches!(
            graph.articulation_points(),
            Err(GraphError::DirectedGraph { .. })
        ));
    }

    #[test]
    fn lowlink_undirected() {
        // 0 - 1 - 2 - 0 triangle, 2 - 3 pendant
        let graph = Graph::from_edges(5, false, [(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(
            graph.dfs_lowlink(0),
            vec![Some(0), Some(0), Some(0), Some(3), None]
        );
    }

    #[test]
    fn lowlink_directed() {
        let graph = Graph::from_edges(4, true, [(0, 1), (1, 2), (2, 1), (2, 3)]);
        assert_eq!(
            graph.dfs_lowlink(1),
            vec![None, Some(1), Some(1), Some(3)]
        );
    }
}
