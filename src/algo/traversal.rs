/*!
Depth- and breadth-first traversals that record what they did.

A single [`DfsSearch`] produces every DFS-derived structure at once: the step trace used for
animations, parent pointers, visitation order and pre-/post-order numbers. All of them
agree because they come from the same run, with ties broken by adjacency-list order.

The search keeps an explicit stack of `(node, next neighbor index)` frames instead of
recursing, so deep graphs (e.g. long paths) do not overflow the call stack.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use super::*;

/// One record of a DFS trace
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DfsStep {
    /// The search moves along the tree edge `(parent, child)`
    Descend(Node, Node),
    /// The search returns to `parent` after finishing one of its children
    Return(Node),
}

/// Kind of an edge with respect to a DFS forest
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Edge of the DFS tree
    Tree,
    /// Edge to an ancestor (includes self-loops)
    Back,
    /// Edge between nodes where neither is an ancestor of the other (directed only)
    Cross,
    /// Non-tree edge to a proper descendant (directed only)
    Direct,
}

/// Everything a DFS records.
///
/// Entries of unreached nodes are `None`. Pre- and post-order numbers start at `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DfsRun {
    pub trace: Vec<DfsStep>,
    pub parent: Vec<Option<Node>>,
    pub order: Vec<Node>,
    pub preorder: Vec<Option<NumNodes>>,
    pub postorder: Vec<Option<NumNodes>>,
}

impl DfsRun {
    /// Returns *true* if the run reached `u`
    pub fn reached(&self, u: Node) -> bool {
        self.preorder[u as usize].is_some()
    }

    /// Returns the tree edges `(parent, child)` in the order they were descended
    pub fn tree_edges(&self) -> Vec<Edge> {
        self.trace
            .iter()
            .filter_map(|step| match *step {
                DfsStep::Descend(u, v) => Some(Edge(u, v)),
                DfsStep::Return(_) => None,
            })
            .collect()
    }

    /// Returns *true* if `u` is an ancestor of `v` in the DFS forest (every node is its own ancestor)
    pub fn is_ancestor(&self, u: Node, v: Node) -> bool {
        match (
            self.preorder[u as usize],
            self.postorder[u as usize],
            self.preorder[v as usize],
            self.postorder[v as usize],
        ) {
            (Some(pre_u), Some(post_u), Some(pre_v), Some(post_v)) => {
                pre_u <= pre_v && post_v <= post_u
            }
            _ => false,
        }
    }
}

/// Iterative depth-first search.
///
/// Call [`DfsSearch::visit`] for one or more roots and collect the result with
/// [`DfsSearch::finish`]. Visiting several roots yields a DFS forest; a root that was already
/// reached is ignored.
pub struct DfsSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    run: DfsRun,
    next_pre: NumNodes,
    next_post: NumNodes,
    stack: Vec<(Node, usize)>,
}

impl<'a, G> DfsSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    pub fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            run: DfsRun {
                trace: Vec::new(),
                parent: vec![None; n],
                order: Vec::with_capacity(n),
                preorder: vec![None; n],
                postorder: vec![None; n],
            },
            next_pre: 0,
            next_post: 0,
            stack: Vec::new(),
        }
    }

    fn discover(&mut self, u: Node) {
        self.run.preorder[u as usize] = Some(self.next_pre);
        self.next_pre += 1;
        self.run.order.push(u);
        self.stack.push((u, 0));
    }

    /// Runs the search from `root` unless `root` was already reached
    /// ** Panics if `root >= n` **
    pub fn visit(&mut self, root: Node) {
        assert!(
            (root as usize) < self.graph.len(),
            "Start node {root} is out of range"
        );
        if self.run.reached(root) {
            return;
        }

        self.discover(root);

        while let Some(frame) = self.stack.last_mut() {
            let (u, idx) = *frame;

            if let Some(v) = self.graph.ith_neighbor(u, idx) {
                frame.1 += 1;
                if !self.run.reached(v) {
                    self.run.trace.push(DfsStep::Descend(u, v));
                    self.run.parent[v as usize] = Some(u);
                    self.discover(v);
                }
                continue;
            }

            self.stack.pop();
            self.run.postorder[u as usize] = Some(self.next_post);
            self.next_post += 1;

            if let Some(p) = self.run.parent[u as usize] {
                self.run.trace.push(DfsStep::Return(p));
            }
        }
    }

    /// Runs the search from every unreached node in ascending order
    pub fn visit_all(&mut self) {
        for u in self.graph.vertices_range() {
            self.visit(u);
        }
    }

    pub fn finish(self) -> DfsRun {
        self.run
    }
}

/// Classifies every edge leaving a reached node of `run`.
/// Undirected edges are reported once, oriented as `(u, v)` with `u <= v`.
fn classify_edges<G>(graph: &G, run: &DfsRun) -> Vec<(Edge, EdgeKind)>
where
    G: AdjacencyList + GraphType,
{
    let directed = graph.is_directed();
    // a parallel copy of a tree edge is not a tree edge
    let mut tree_seen: FxHashSet<Edge> = FxHashSet::default();
    let mut result = Vec::new();

    for u in graph.vertices() {
        if !run.reached(u) {
            continue;
        }

        for v in graph.neighbors_of(u) {
            if !directed && u > v {
                continue;
            }

            let is_tree_pair = run.parent[v as usize] == Some(u)
                || (!directed && run.parent[u as usize] == Some(v));

            let kind = if is_tree_pair && tree_seen.insert(Edge(u, v)) {
                EdgeKind::Tree
            } else if !directed || run.is_ancestor(v, u) {
                EdgeKind::Back
            } else if run.is_ancestor(u, v) {
                EdgeKind::Direct
            } else {
                EdgeKind::Cross
            };

            result.push((Edge(u, v), kind));
        }
    }

    result
}

/// Traversal methods available on every graph
pub trait Traversal: AdjacencyList + NeighborsSlice + Sized {
    /// Runs a DFS from `start` and returns all of its records.
    /// ** Panics if `start >= n` **
    fn dfs_search(&self, start: Node) -> DfsRun {
        let mut search = DfsSearch::new(self);
        search.visit(start);
        search.finish()
    }

    /// Runs a DFS from every unreached node in ascending order (a DFS forest)
    fn dfs_forest(&self) -> DfsRun {
        let mut search = DfsSearch::new(self);
        search.visit_all();
        search.finish()
    }

    /// Returns the DFS trace from `start`: a `Descend(parent, child)` before visiting a child
    /// and a `Return(parent)` once the child is finished.
    ///
    /// # Examples
    /// ```
    /// use stepgraph::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, false, [(0, 1), (1, 2)]);
    /// assert_eq!(
    ///     g.dfs(0),
    ///     vec![DfsStep::Descend(0, 1), DfsStep::Descend(1, 2), DfsStep::Return(1), DfsStep::Return(0)]
    /// );
    /// ```
    fn dfs(&self, start: Node) -> Vec<DfsStep> {
        self.dfs_search(start).trace
    }

    /// Returns the tree edges of the DFS from `start` in descend order
    fn dfs_tree(&self, start: Node) -> Vec<Edge> {
        self.dfs_search(start).tree_edges()
    }

    /// Returns the DFS parent of every node (`None` for `start` and unreached nodes)
    fn dfs_parent(&self, start: Node) -> Vec<Option<Node>> {
        self.dfs_search(start).parent
    }

    /// Returns the nodes reached from `start` in the order the DFS discovered them
    fn dfs_order(&self, start: Node) -> Vec<Node> {
        self.dfs_search(start).order
    }

    /// Returns the DFS preorder number of every node
    fn dfs_preorder_numeration(&self, start: Node) -> Vec<Option<NumNodes>> {
        self.dfs_search(start).preorder
    }

    /// Returns the DFS postorder number of every node
    fn dfs_postorder_numeration(&self, start: Node) -> Vec<Option<NumNodes>> {
        self.dfs_search(start).postorder
    }

    /// Labels every edge reachable from `start` as tree, back, cross or direct edge.
    /// Undirected graphs only have tree and back edges.
    fn dfs_edge_classification(&self, start: Node) -> Vec<(Edge, EdgeKind)>
    where
        Self: GraphType,
    {
        let run = self.dfs_search(start);
        classify_edges(self, &run)
    }

    /// Returns the discovery edges `(parent, child)` of a BFS from `start` in queue order.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use stepgraph::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, false, [(0, 1), (0, 2)]);
    /// assert_eq!(g.bfs(0), vec![Edge(0, 1), Edge(0, 2)]);
    /// ```
    fn bfs(&self, start: Node) -> Vec<Edge> {
        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::from([start]);
        let mut trace = Vec::new();
        visited[start as usize] = true;

        while let Some(u) = queue.pop_front() {
            for v in self.neighbors_of(u) {
                if !visited[v as usize] {
                    visited[v as usize] = true;
                    queue.push_back(v);
                    trace.push(Edge(u, v));
                }
            }
        }

        trace
    }

    /// Returns the nodes reachable from `start` in BFS order, starting with `start`
    fn bfs_order(&self, start: Node) -> Vec<Node> {
        std::iter::once(start)
            .chain(self.bfs(start).into_iter().map(|Edge(_, v)| v))
            .collect()
    }
}

impl<G> Traversal for G where G: AdjacencyList + NeighborsSlice + Sized {}
