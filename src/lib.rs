//! # bilstm - forward-pass LSTM and bidirectional LSTM layers
//!
//! Inference-only evaluation of gated-memory recurrent layers on
//! pretrained weights, built on the Burn tensor framework. Given the
//! weight matrices a model loader has already parsed, these layers
//! reproduce the numeric output the training framework would produce for
//! the same configuration.
//!
//! ## Features
//!
//! - **LSTM recurrence**: batched input projection plus a strictly
//!   sequential gate loop, full-sequence or final-state output
//! - **Bidirectional composition**: forward and time-reversed passes,
//!   realigned and merged under `concat`, `sum`, `mul` or `ave`
//! - **Seven activations**: `linear`, `tanh`, `sigmoid`, `hard_sigmoid`,
//!   `relu`, `selu`, `elu`, selected by name and resolved before the loop
//! - **Stateless between calls**: hidden/cell state is zeroed per call,
//!   so one layer value serves concurrent callers
//!
//! ## Quick Start
//!
//! ```rust
//! use bilstm::prelude::*;
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let units = 2;
//! let features = 3;
//!
//! // Weights normally come from a parsed model file.
//! let forward = LstmWeights::new(
//!     Tensor::<Backend, 2>::zeros([features, 4 * units], &device),
//!     Tensor::<Backend, 2>::zeros([units, 4 * units], &device),
//!     None,
//! );
//! let backward = forward.clone();
//!
//! let layer = BidirectionalConfig::new(
//!     "concat".into(),
//!     units,
//!     "tanh".into(),
//!     "sigmoid".into(),
//!     "LSTM".into(),
//!     false,
//!     true,
//! )
//! .init(forward, backward);
//!
//! let input = Tensor::<Backend, 3>::zeros([1, 5, features], &device);
//! let outputs = layer.forward(&[input]).unwrap();
//!
//! assert_eq!(outputs.len(), 1);
//! assert_eq!(outputs[0].dims(), [1, 5, 2 * units]);
//! ```
//!
//! ## Scope
//!
//! Training, gradients and weight (de)serialization are out of scope;
//! this crate is the numeric core a surrounding model-evaluation engine
//! feeds with already-parsed configuration and tensors.

pub mod activation;
pub mod cells;
pub mod error;
pub mod ops;
pub mod rnn;

pub mod prelude {
    pub use crate::activation::Activation;
    pub use crate::cells::{lstm_forward, LstmWeights};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{merge, reverse_time, MergeMode};
    pub use crate::rnn::{Bidirectional, BidirectionalConfig};
}
