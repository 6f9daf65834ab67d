//! # Recurrent kernels
//!
//! Single-direction recurrence engines evaluated over whole time series.
//! These are wrapped by the sequence-level layers in [`crate::rnn`]; use
//! them directly to evaluate a unidirectional layer without the
//! bidirectional machinery.
//!
//! Only the LSTM gate structure is implemented. The layer configuration
//! carries a wrapped-layer name so further cell kinds can slot in later,
//! but today any other name is rejected at apply time.

pub mod lstm;

pub use lstm::{lstm_forward, LstmWeights};
