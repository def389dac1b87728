/*!
# Utilities

Helpers shared by algorithms and generators:
- [`UnionFind`]: disjoint sets over the nodes of a graph, used by the spanning-tree generators,
- [`Probability`]: validity check for probabilities passed to generators.
*/

use num::{One, Zero};

pub mod union_find;

pub use union_find::UnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
