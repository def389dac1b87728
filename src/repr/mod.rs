/*!
# Graph Representations

[`Graph`] stores one adjacency array per node and decides at construction whether edges are
directed. [`WeightedGraph`] adds a dense weight matrix on top of a [`Graph`] and exposes the
same read-only traits, so every unweighted algorithm also runs on weighted graphs.
*/

use crate::{ops::*, *};

mod graph;
mod weighted;

pub use graph::*;
pub use weighted::*;
