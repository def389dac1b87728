use super::*;

/// Result of Tarjan's algorithm.
///
/// Components are numbered in the order they are completed, which is a reverse topological
/// order of the condensation: if there is an edge from component `a` to a different
/// component `b`, then `b < a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SccDecomposition {
    /// Component id of every node
    pub component: Vec<NumNodes>,
    /// Low-link of every node, given as the node of smallest DFS index it reaches on the stack
    pub lowlink: Vec<Node>,
    /// Nodes in the order they were assigned to their component
    pub order: Vec<Node>,
    /// Number of components
    pub number_of_components: NumNodes,
}

impl SccDecomposition {
    /// Returns the nodes of every component, each in ascending order
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut comps = vec![Vec::new(); self.number_of_components as usize];
        for (u, &c) in self.component.iter().enumerate() {
            comps[c as usize].push(u as Node);
        }
        comps
    }
}

#[derive(Clone, Copy, Default)]
struct NodeState {
    index: Option<Node>,
    on_stack: bool,
}

/// Implementation of Tarjan's algorithm for strongly connected components.
///
/// Tarjan's algorithm is usually described recursively. To avoid stack overflows on large
/// graphs, the recursion is simulated by the explicit `call_stack` of `(node, next neighbor
/// index)` frames. On its first visit a node receives the next DFS index and is its own
/// low-link. Eventually all nodes of an SCC share one low-link, the unique node whose low-link
/// is itself is the root, and the SCC is popped from `path_stack`.
pub(crate) struct TarjanSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    idx: Node,
    states: Vec<NodeState>,
    lowlink: Vec<Node>,
    component: Vec<Option<NumNodes>>,
    order: Vec<Node>,
    num_components: NumNodes,
    path_stack: Vec<Node>,
    call_stack: Vec<(Node, usize)>,
}

impl<'a, G> TarjanSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    pub(crate) fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            idx: 0,
            states: vec![NodeState::default(); n],
            lowlink: (0..n as Node).collect(),
            component: vec![None; n],
            order: Vec::with_capacity(n),
            num_components: 0,
            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    fn index_of(&self, u: Node) -> Node {
        self.states[u as usize].index.unwrap_or(INVALID_NODE)
    }

    fn try_lower_link(&mut self, u: Node, candidate: Node) {
        if self.index_of(candidate) < self.index_of(self.lowlink[u as usize]) {
            self.lowlink[u as usize] = candidate;
        }
    }

    fn push_node(&mut self, u: Node) {
        self.states[u as usize] = NodeState {
            index: Some(self.idx),
            on_stack: true,
        };
        self.idx += 1;
        self.path_stack.push(u);
        self.call_stack.push((u, 0));
    }

    /// Searches from `root` unless it was visited already
    pub(crate) fn visit(&mut self, root: Node) {
        if self.states[root as usize].index.is_some() {
            return;
        }
        self.push_node(root);

        'recurse: while let Some(&(v, next)) = self.call_stack.last() {
            let mut i = next;
            while let Some(w) = self.graph.ith_neighbor(v, i) {
                i += 1;
                let w_state = self.states[w as usize];

                if w_state.index.is_none() {
                    if let Some(frame) = self.call_stack.last_mut() {
                        frame.1 = i;
                    }
                    self.push_node(w);
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.try_lower_link(v, w);
                }
            }

            self.call_stack.pop();

            if let Some(&(parent, _)) = self.call_stack.last() {
                let low = self.lowlink[v as usize];
                self.try_lower_link(parent, low);
            }

            if self.lowlink[v as usize] == v {
                while let Some(w) = self.path_stack.pop() {
                    self.states[w as usize].on_stack = false;
                    self.component[w as usize] = Some(self.num_components);
                    self.order.push(w);
                    if w == v {
                        break;
                    }
                }
                self.num_components += 1;
            }
        }
    }

    /// Low-links of all visited nodes, `None` for the rest
    pub(crate) fn partial_lowlink(&self) -> Vec<Option<Node>> {
        self.states
            .iter()
            .zip(&self.lowlink)
            .map(|(s, &l)| s.index.map(|_| l))
            .collect()
    }

    /// Visits every remaining node and returns the decomposition
    pub(crate) fn finish(mut self) -> SccDecomposition {
        for u in self.graph.vertices_range() {
            self.visit(u);
        }

        SccDecomposition {
            component: self.component.into_iter().flatten().collect(),
            lowlink: self.lowlink,
            order: self.order,
            number_of_components: self.num_components,
        }
    }
}

/// Labels connected components by repeated DFS.
/// Edges of directed graphs are followed in both directions (weak connectivity).
fn label_components<G>(graph: &G) -> Vec<NumNodes>
where
    G: AdjacencyList + GraphType,
{
    let n = graph.len();
    let mut reverse: Vec<Vec<Node>> = vec![Vec::new(); if graph.is_directed() { n } else { 0 }];
    if graph.is_directed() {
        for Edge(u, v) in graph.edges(false) {
            reverse[v as usize].push(u);
        }
    }

    let mut label: Vec<Option<NumNodes>> = vec![None; n];
    let mut num_components = 0;
    let mut stack = Vec::new();

    for root in graph.vertices_range() {
        if label[root as usize].is_some() {
            continue;
        }

        label[root as usize] = Some(num_components);
        stack.push(root);
        while let Some(u) = stack.pop() {
            let backwards = reverse.get(u as usize).into_iter().flatten().copied();
            for v in graph.neighbors_of(u).chain(backwards) {
                if label[v as usize].is_none() {
                    label[v as usize] = Some(num_components);
                    stack.push(v);
                }
            }
        }

        num_components += 1;
    }

    label.into_iter().flatten().collect()
}

pub trait Connectivity: AdjacencyList + NeighborsSlice + GraphType + Sized {
    /// Returns the connected-component id of every node.
    /// Components are numbered by their smallest node, in ascending order.
    /// Directed graphs are treated as undirected.
    fn connected_components(&self) -> Vec<NumNodes> {
        label_components(self)
    }

    /// Returns the nodes of every connected component
    fn connected_component_sets(&self) -> Vec<Vec<Node>> {
        let labels = self.connected_components();
        let num = labels.iter().max().map_or(0, |&c| c as usize + 1);
        let mut comps = vec![Vec::new(); num];
        for (u, c) in labels.into_iter().enumerate() {
            comps[c as usize].push(u as Node);
        }
        comps
    }

    /// Returns *true* if the graph has exactly one connected component.
    /// The graph without nodes is not connected.
    fn connected(&self) -> bool {
        !self.is_empty() && self.connected_components().iter().all(|&c| c == 0)
    }

    /// Runs Tarjan's algorithm over all nodes
    fn tarjan_scc(&self) -> SccDecomposition {
        debug!("tarjan_scc: n={}", self.len());
        let scc = TarjanSearch::new(self).finish();
        debug!("tarjan_scc: {} components", scc.number_of_components);
        scc
    }

    /// Returns the strongly-connected-component id of every node
    fn strongly_connected_components(&self) -> Vec<NumNodes> {
        self.tarjan_scc().component
    }

    /// Returns *true* if every node can reach every other node
    fn is_strongly_connected(&self) -> bool {
        !self.is_empty() && self.tarjan_scc().number_of_components == 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + NeighborsSlice + GraphType + Sized {}
