//! Constraint propagation over the combinatorial structure of the cube
//!
//! Each cubie slot keeps a residual set of (cubie, orientation) hypotheses
//! ([`SlotOptions`]); a [`CubieBuilder`] aggregates the slots of one cubie
//! kind and propagates color facts between them until a fixpoint or a
//! contradiction. Corners and edges run the same algorithm with different
//! slot and orientation counts, so the builder is parameterized over both.
//!
//! Builders are plain `Copy` values with fixed-capacity inline storage:
//! the matcher snapshots one with a single byte copy before every tentative
//! assignment and restores it by swapping the copy back in.

mod builder;
mod options;

pub use builder::{CornerBuilder, CubieBuilder, EdgeBuilder};
pub use options::SlotOptions;
