use super::*;

/// Returns *true* if `a < b` where `None` is infinitely far away
fn shorter<W: Weight>(a: Option<W>, b: Option<W>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn extend<W: Weight>(a: Option<W>, b: Option<W>) -> Option<W> {
    Some(a? + b?)
}

/// Result of [`ShortestPaths::dijkstra`]
#[derive(Clone, Debug, PartialEq)]
pub struct Dijkstra<W> {
    /// Final distance of every node; `None` if unreachable
    pub dist: Vec<Option<W>>,
    /// Nodes in the order they were solved
    pub vertex_order: Vec<Node>,
    /// Distances before the first and after every step (`n + 1` rows)
    pub table: Vec<Vec<Option<W>>>,
    /// Parent pointers before the first and after every step (`n + 1` rows)
    pub parents: Vec<Vec<Option<Node>>>,
    /// Number of times an already finite distance was improved
    pub num_changes: usize,
}

impl<W: Weight> Dijkstra<W> {
    /// Returns the final parent pointers
    pub fn parent(&self) -> &[Option<Node>] {
        self.parents.last().map_or(&[], |p| p.as_slice())
    }

    /// Returns the nodes on the shortest path from the source to `target`, both included,
    /// or `None` if `target` is unreachable
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        if self.dist.get(target as usize).is_none_or(|d| d.is_none()) {
            return None;
        }
        let parent = self.parent();

        let mut path = vec![target];
        let mut u = target;
        while let Some(p) = parent[u as usize] {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Result of [`ShortestPaths::bellman_ford`]
#[derive(Clone, Debug, PartialEq)]
pub struct BellmanFord<W> {
    pub dist: Vec<Option<W>>,
    pub parent: Vec<Option<Node>>,
    /// Some edge could still be relaxed after `n - 1` rounds
    pub negative_cycle: bool,
}

/// Result of [`ShortestPaths::floyd_warshall`]: the initial matrices followed by the matrices
/// after each pivot, `n + 1` entries each.
#[derive(Clone, Debug, PartialEq)]
pub struct FloydWarshall<W> {
    pub distances: Vec<Vec<Vec<Option<W>>>>,
    /// `paths[k][i][j]` lists the nodes of the best known `i`-`j` path; empty if there is none
    pub paths: Vec<Vec<Vec<Vec<Node>>>>,
}

impl<W: Weight> FloydWarshall<W> {
    /// Returns the final distance from `u` to `v`
    pub fn distance(&self, u: Node, v: Node) -> Option<W> {
        self.distances
            .last()
            .and_then(|m| m[u as usize][v as usize])
    }

    /// Returns the final shortest path from `u` to `v`; empty if there is none
    pub fn path(&self, u: Node, v: Node) -> &[Node] {
        self.paths
            .last()
            .map_or(&[], |m| m[u as usize][v as usize].as_slice())
    }
}

/// Shortest path algorithms recording their intermediate states
pub trait ShortestPaths<W: Weight> {
    /// Selection-based Dijkstra from `source` in `O(n^2)`.
    ///
    /// In every step the first unsolved node of minimal tentative distance (scanning in
    /// ascending order) is solved, even if unreachable, and its out-edges are relaxed.
    /// Negative weights are not detected; see [`ShortestPaths::try_dijkstra`].
    /// ** Panics if `source >= n` **
    fn dijkstra(&self, source: Node) -> Dijkstra<W>;

    /// Like [`ShortestPaths::dijkstra`], but rejects negative weights.
    ///
    /// # Errors
    /// Fails with [`GraphError::NegativeWeight`] naming the first negative edge.
    fn try_dijkstra(&self, source: Node) -> GraphResult<Dijkstra<W>>;

    /// Bellman-Ford from `source`: relaxes every edge `n - 1` times, then reports whether any
    /// edge can still be relaxed.
    /// ** Panics if `source >= n` **
    fn bellman_ford(&self, source: Node) -> BellmanFord<W>;

    /// All-pairs shortest paths. Paths are only replaced by strictly shorter ones.
    fn floyd_warshall(&self) -> FloydWarshall<W>;
}

impl<W: Weight> ShortestPaths<W> for WeightedGraph<W> {
    fn dijkstra(&self, source: Node) -> Dijkstra<W> {
        let n = self.len();
        assert!((source as usize) < n, "Source {source} is out of range");
        debug!("dijkstra: n={n} source={source}");

        let mut dist: Vec<Option<W>> = vec![None; n];
        dist[source as usize] = Some(W::zero());

        let mut solved = vec![false; n];
        let mut vertex_order = Vec::with_capacity(n);
        let mut table = vec![dist.clone()];
        let mut parents = vec![vec![None; n]];
        let mut num_changes = 0;

        for _ in 0..n {
            let mut min: Option<Node> = None;
            for j in self.vertices() {
                if solved[j as usize] {
                    continue;
                }
                if min.is_none_or(|m| shorter(dist[j as usize], dist[m as usize])) {
                    min = Some(j);
                }
            }
            let Some(u) = min else {
                break;
            };

            solved[u as usize] = true;
            vertex_order.push(u);

            let mut step_parents = parents[parents.len() - 1].clone();
            for v in self.neighbors_of(u) {
                let candidate = extend(dist[u as usize], Some(self.weight_or_zero(u, v)));
                if shorter(candidate, dist[v as usize]) {
                    step_parents[v as usize] = Some(u);
                    if dist[v as usize].is_some() {
                        num_changes += 1;
                    }
                    dist[v as usize] = candidate;
                }
            }

            table.push(dist.clone());
            parents.push(step_parents);
        }

        debug!("dijkstra: order={vertex_order:?} changes={num_changes}");
        Dijkstra {
            dist,
            vertex_order,
            table,
            parents,
            num_changes,
        }
    }

    fn try_dijkstra(&self, source: Node) -> GraphResult<Dijkstra<W>> {
        for Edge(u, v) in self.edges(false) {
            if self.weight_or_zero(u, v) < W::zero() {
                return Err(GraphError::NegativeWeight { u, v });
            }
        }
        Ok(self.dijkstra(source))
    }

    fn bellman_ford(&self, source: Node) -> BellmanFord<W> {
        let n = self.len();
        assert!((source as usize) < n, "Source {source} is out of range");
        debug!("bellman_ford: n={n} source={source}");

        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut parent = vec![None; n];
        dist[source as usize] = Some(W::zero());

        let edges = self
            .edges(false)
            .map(|Edge(u, v)| (u, v, self.weight_or_zero(u, v)))
            .collect_vec();

        for _ in 1..n {
            let mut changed = false;
            for &(u, v, w) in &edges {
                let candidate = extend(dist[u as usize], Some(w));
                if shorter(candidate, dist[v as usize]) {
                    dist[v as usize] = candidate;
                    parent[v as usize] = Some(u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let negative_cycle = edges
            .iter()
            .any(|&(u, v, w)| shorter(extend(dist[u as usize], Some(w)), dist[v as usize]));

        debug!("bellman_ford: negative_cycle={negative_cycle}");
        BellmanFord {
            dist,
            parent,
            negative_cycle,
        }
    }

    fn floyd_warshall(&self) -> FloydWarshall<W> {
        let n = self.len();
        debug!("floyd_warshall: n={n}");

        let mut dist: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
        let mut paths: Vec<Vec<Vec<Node>>> = vec![vec![Vec::new(); n]; n];

        for Edge(u, v) in self.edges(false) {
            dist[u as usize][v as usize] = Some(self.weight_or_zero(u, v));
            paths[u as usize][v as usize] = vec![u, v];
        }
        for u in self.vertices() {
            dist[u as usize][u as usize] = Some(W::zero());
            paths[u as usize][u as usize] = vec![u];
        }

        let mut distances = vec![dist.clone()];
        let mut path_history = vec![paths.clone()];

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = extend(dist[i][k], dist[k][j]);
                    if shorter(through, dist[i][j]) {
                        dist[i][j] = through;
                        let mut path = paths[i][k].clone();
                        path.extend_from_slice(&paths[k][j][1..]);
                        paths[i][j] = path;
                    }
                }
            }
            distances.push(dist.clone());
            path_history.push(paths.clone());
        }

        FloydWarshall {
            distances,
            paths: path_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::six_vertex_example;

    #[test]
    fn dijkstra_simple() {
        let graph = WeightedGraph::from_weighted_edges(3, false, [(9, 0, 1), (1, 0, 2), (5, 1, 2)]);
        let d = graph.dijkstra(0);
        assert_eq!(d.dist, vec![Some(0), Some(6), Some(1)]);
        assert_eq!(d.vertex_order, vec![0, 2, 1]);
        assert_eq!(d.num_changes, 1);
    }

    #[test]
    fn dijkstra_example() {
        let graph = six_vertex_example();
        let d = graph.dijkstra(0);

        assert_eq!(
            d.dist,
            [0, 9, 1, 6, 7, 8].into_iter().map(Some).collect_vec()
        );
        assert_eq!(d.vertex_order, vec![0, 2, 3, 4, 5, 1]);
        assert_eq!(d.table.len(), 7);
        assert_eq!(d.parents.len(), 7);
        assert_eq!(d.table[0], vec![Some(0), None, None, None, None, None]);
        assert_eq!(
            d.table[1],
            vec![Some(0), Some(9), Some(1), None, None, None]
        );
        assert_eq!(d.parents[0], vec![None; 6]);
        assert_eq!(
            d.parent(),
            &[None, Some(0), Some(0), Some(2), Some(2), Some(3)]
        );
        assert_eq!(d.path_to(5), Some(vec![0, 2, 3, 5]));
        assert_eq!(d.num_changes, 0);
    }

    #[test]
    fn dijkstra_unreachable() {
        let graph = WeightedGraph::from_weighted_edges(3, true, [(2, 1, 0)]);
        let d = graph.dijkstra(0);
        assert_eq!(d.dist, vec![Some(0), None, None]);
        assert_eq!(d.vertex_order, vec![0, 1, 2]);
        assert_eq!(d.path_to(1), None);
        assert_eq!(d.path_to(0), Some(vec![0]));
    }

    #[test]
    fn try_dijkstra_rejects_negative_weights() {
        let graph = WeightedGraph::from_weighted_edges(3, true, [(2, 0, 1), (-1, 1, 2)]);
        assert_eq!(
            graph.try_dijkstra(0),
            Err(GraphError::NegativeWeight { u: 1, v: 2 })
        );
        assert!(six_vertex_example().try_dijkstra(0).is_ok());
    }

    #[test]
    fn bellman_ford_matches_dijkstra() {
        let graph = six_vertex_example();
        let bf = graph.bellman_ford(0);
        assert_eq!(bf.dist, graph.dijkstra(0).dist);
        assert!(!bf.negative_cycle);
        assert_eq!(bf.parent[5], Some(3));
    }

    #[test]
    fn bellman_ford_negative_edges() {
        let graph = WeightedGraph::from_weighted_edges(
            4,
            true,
            [(4, 0, 1), (5, 0, 2), (-3, 2, 1), (2, 1, 3)],
        );
        let bf = graph.bellman_ford(0);
        assert_eq!(bf.dist, vec![Some(0), Some(2), Some(5), Some(4)]);
        assert!(!bf.negative_cycle);

        let cyclic =
            WeightedGraph::from_weighted_edges(3, true, [(1, 0, 1), (-2, 1, 2), (-1, 2, 1)]);
        assert!(cyclic.bellman_ford(0).negative_cycle);
    }

    #[test]
    fn floyd_warshall_example() {
        let graph = six_vertex_example();
        let fw = graph.floyd_warshall();

        assert_eq!(fw.distances.len(), 7);
        assert_eq!(fw.paths.len(), 7);
        assert_eq!(fw.distances[0][0][1], Some(9));
        assert_eq!(fw.distances[0][0][3], None);
        assert!(fw.paths[0][0][3].is_empty());

        let d = graph.dijkstra(0);
        for v in graph.vertices() {
            assert_eq!(fw.distance(0, v), d.dist[v as usize]);
        }
        assert_eq!(fw.path(0, 5), &[0, 2, 3, 5]);
        assert_eq!(fw.path(1, 4), &[1, 3, 5, 4]);
        assert_eq!(fw.path(4, 4), &[4]);
    }

    #[test]
    fn floyd_warshall_directed_unreachable() {
        let graph = WeightedGraph::from_weighted_edges(3, true, [(1.5, 0, 1), (2.0, 1, 2)]);
        let fw = graph.floyd_warshall();
        assert_eq!(fw.distance(0, 2), Some(3.5));
        assert_eq!(fw.distance(2, 0), None);
        assert!(fw.path(2, 0).is_empty());
        assert_eq!(fw.path(0, 2), &[0, 1, 2]);
    }
}
