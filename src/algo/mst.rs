use std::cmp::Ordering;

use super::*;

/// Result of [`MinimumSpanningTree::prim`]
#[derive(Clone, Debug, PartialEq)]
pub struct Prim<W> {
    /// Nodes in the order they joined the tree, starting with `0`
    pub vertex_order: Vec<Node>,
    /// Selected edges as `(weight, tree node, new node)` in selection order
    pub mst_edges: Vec<WeightedEdge<W>>,
    pub mst_weight: W,
}

/// Result of [`MinimumSpanningTree::kruskal`]
#[derive(Clone, Debug, PartialEq)]
pub struct Kruskal<W> {
    /// Selected edges in the order they were accepted
    pub mst_edges: Vec<WeightedEdge<W>>,
    pub mst_weight: W,
    /// Every edge in processing order, marked *true* if it was accepted
    pub all_edges: Vec<(Edge, bool)>,
}

/// Minimum spanning trees of undirected weighted graphs
pub trait MinimumSpanningTree<W: Weight> {
    /// Grows a tree from node `0`. In every step the cheapest edge from the tree to a new node is
    /// added; ties are broken by the smaller new node, then by the earlier candidate.
    ///
    /// On a disconnected graph only the component of node `0` is spanned.
    fn prim(&self) -> Prim<W>;

    /// Processes all edges sorted by `(weight, u, v)` and accepts every edge joining two
    /// different trees. Trees are tracked by repainting a color array.
    fn kruskal(&self) -> Kruskal<W>;
}

impl<W: Weight> MinimumSpanningTree<W> for WeightedGraph<W> {
    fn prim(&self) -> Prim<W> {
        let n = self.len();
        debug!("prim: n={n}");

        let mut mst_weight = W::zero();
        let mut mst_edges = Vec::new();
        if n == 0 {
            return Prim {
                vertex_order: Vec::new(),
                mst_edges,
                mst_weight,
            };
        }

        let mut in_tree = vec![false; n];
        let mut vertex_order = vec![0];
        let mut candidates: Vec<WeightedEdge<W>> = Vec::new();
        let mut u: Node = 0;
        in_tree[0] = true;

        while vertex_order.len() < n {
            candidates.retain(|e| e.2 != u);
            for v in self.neighbors_of(u) {
                if !in_tree[v as usize] {
                    candidates.push(WeightedEdge(self.weight_or_zero(u, v), u, v));
                }
            }

            let Some((best, _)) = candidates.iter().enumerate().reduce(|best, cand| {
                let (b, c) = (best.1, cand.1);
                if c.0 < b.0 || (c.0 == b.0 && c.2 < b.2) {
                    cand
                } else {
                    best
                }
            }) else {
                break;
            };

            let edge = candidates.remove(best);
            u = edge.2;
            in_tree[u as usize] = true;
            mst_weight = mst_weight + edge.0;
            mst_edges.push(edge);
            vertex_order.push(u);
        }

        debug!("prim: {} edges, order={vertex_order:?}", mst_edges.len());
        Prim {
            vertex_order,
            mst_edges,
            mst_weight,
        }
    }

    fn kruskal(&self) -> Kruskal<W> {
        let n = self.len();
        debug!("kruskal: n={n}");

        let mut sorted = self.weighted_edges();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut color: Vec<Node> = (0..n as Node).collect();
        let mut mst_edges = Vec::new();
        let mut all_edges = Vec::with_capacity(sorted.len());
        let mut mst_weight = W::zero();

        for edge in sorted {
            let WeightedEdge(w, a, b) = edge;
            let (color_a, color_b) = (color[a as usize], color[b as usize]);

            let accepted = color_a != color_b;
            if accepted {
                mst_edges.push(edge);
                mst_weight = mst_weight + w;
                for c in &mut color {
                    if *c == color_a {
                        *c = color_b;
                    }
                }
            }
            all_edges.push((Edge(a, b), accepted));
        }

        debug!("kruskal: {} of {} edges accepted", mst_edges.len(), all_edges.len());
        Kruskal {
            mst_edges,
            mst_weight,
            all_edges,
        }
    }
}
