/*!
`stepgraph` is a graph algorithms library built for step-by-step visualisation. Next to the final
answer, every algorithm exposes the intermediate states a teaching tool wants to show, and a
generic reversible command history replays these states forwards and backwards.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; weighted edges are
`WeightedEdge(weight, u, v)`.

### Directed vs Undirected

Whether a graph is directed is decided when it is constructed:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)`. Both
  neighborhoods store the edge and edge lists report it once, normalized to `u <= v`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are distinct.

Neighborhoods keep insertion order. Traversals and minimum spanning trees break ties by it, so
their traces are fully deterministic.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the
  [`Graph`](crate::repr::Graph) and [`WeightedGraph`](crate::repr::WeightedGraph) representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as DFS with edge
  classification (`graph.dfs(start_node)`), Tarjan's SCC, bridges, shortest paths and MSTs,
- [`gens`] includes deterministic and random graph generators with guaranteed structure
  (connected, acyclic, strongly connected, Eulerian, ...),
- [`commands`] includes the reversible [`Command`](crate::commands::Command) abstraction and the
  [`CommandHistory`](crate::commands::CommandHistory) cursor,
- [`display`] includes the presentation state of graph and array widgets and the commands that
  mutate it.

In most use-cases, `use stepgraph::{prelude::*, algo::*};` suffices for your needs.

```
use stepgraph::{prelude::*, algo::*};

let graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3)]);
assert_eq!(graph.dfs_order(0), vec![0, 1, 2, 3]);
assert_eq!(graph.bridges().unwrap().len(), 3);
```

# Logging

Algorithms report their start and result at `debug` level through the [`log`] facade; command
histories report every applied and reverted step at `trace` level. No logger is installed.
*/

pub mod algo;
pub mod commands;
pub mod display;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `stepgraph::prelude` includes definitions for nodes and edges, the error type, all basic graph
/// operation traits as well as both graph representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
