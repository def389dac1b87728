/*!
# Substructure Generators

Adds paths, cycles and cliques to an already existing graph. The random generators use these to
plant the structure they guarantee, e.g. a Hamiltonian cycle for strong connectivity.

```rust
use stepgraph::{prelude::*, gens::*};

let mut g = Graph::new(5, true);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(false).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use super::*;

/// Trait for creating additional substructures inside an existing graph
pub trait GeneratorSubstructures {
    /// Connects consecutive nodes by an edge
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects consecutive nodes by an edge and the last node back to the first.
    /// A single node receives a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all pairs of the given nodes, skipping edges that already exist.
    /// Undirected graphs receive every pair once.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        for &u in nodes {
            for &v in nodes {
                let e = Edge(u, v);
                if (!with_loops && e.is_loop()) || (self.is_undirected() && !e.is_normalized()) {
                    continue;
                }

                self.try_add_edge(u, v);
            }
        }
    }
}
