//! # Sequence-level recurrent layers
//!
//! The public entry points for evaluating a whole time series. A layer is
//! built once from its configuration record plus pretrained weights and
//! then applied with `forward`; it owns no algorithmic logic beyond
//! dispatch into [`crate::cells`] and [`crate::ops`].
//!
//! ## Tensor convention
//!
//! | Axis | Meaning |
//! |------|---------|
//! | height | fixed at 1 for this layer family |
//! | width | time (or spatial) position |
//! | depth | channels / features |
//!
//! Inputs may also arrive as one width-1 tensor per timestep; the layer
//! detects the convention from the slice length and answers in kind.

pub mod bidirectional;

pub use bidirectional::{Bidirectional, BidirectionalConfig};
