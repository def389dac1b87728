use crate::*;

/// Disjoint sets over the nodes `0..n`.
///
/// `union` always attaches the root of the first set below the root of the second, so every
/// parent chain ends in a self-parented root. `find` compresses the path it walks.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<Node>,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `node` and points every node on the
    /// way directly at it.
    /// ** Panics if `node >= n` **
    pub fn find(&mut self, node: Node) -> Node {
        let mut root = node;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = node;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets of `a` and `b` by attaching the root of `a` below the root of `b`.
    /// Returns *false* if both already were in the same set.
    /// ** Panics if `a >= n || b >= n` **
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a as usize] = root_b;
        true
    }

    /// Returns *true* if `a` and `b` are in the same set
    /// ** Panics if `a >= n || b >= n` **
    pub fn same_set(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }
}
