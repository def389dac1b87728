/*!
# Graph Algorithms

This module provides the algorithms of this crate as extension traits that are implemented on the
graph representations themselves. All of them are re-exported here, so you can simply do:
```rust
use stepgraph::algo::*;
```
and gain access to traversal, connectivity, topological sorting, shortest paths and minimum
spanning trees.

Most algorithms do not only return their final answer but also the intermediate states a
step-by-step visualisation needs: DFS traces, per-step distance tables or the matrices after
every pivot of Floyd-Warshall.
*/

mod bridges;
mod connectivity;
mod mst;
mod shortest_path;
mod topological;
mod traversal;

use itertools::Itertools;
use log::debug;

use crate::{error::*, prelude::*};

pub use bridges::*;
pub use connectivity::*;
pub use mst::*;
pub use shortest_path::*;
pub use topological::*;
pub use traversal::*;
