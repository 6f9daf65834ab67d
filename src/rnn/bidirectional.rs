//! Bidirectional wrapper around the LSTM recurrence.
//!
//! Runs the wrapped cell once over the input as given and once over the
//! time-reversed input, realigns the backward result, and merges the two
//! directional outputs under the configured merge mode.

use burn::config::Config;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::cells::{lstm_forward, LstmWeights};
use crate::ops::{merge, reverse_time, MergeMode};

// The error types stay fully qualified in this module: the `Config` derive
// expands to serde impls spelling `Result` and `Error` unqualified, and a
// module-local one-parameter `Result` alias would capture them.

/// Configuration record for a bidirectional recurrent layer.
///
/// Values are stored exactly as the model loader supplies them;
/// construction never fails. Selector names (merge mode, activations,
/// wrapped layer) are validated on first apply, matching the lazy
/// validation the rest of this layer family uses.
#[derive(Config, Debug)]
pub struct BidirectionalConfig {
    /// Merge policy name: `concat`, `sum`, `mul` or `ave`.
    merge_mode: String,
    /// Hidden/cell state width of each directional pass.
    units: usize,
    /// Candidate/cell activation name.
    activation: String,
    /// Input/forget/output gate activation name.
    recurrent_activation: String,
    /// Name of the wrapped cell kind. Only `LSTM` is implemented.
    wrapped_layer: String,
    /// Whether the gate bias is applied.
    use_bias: bool,
    /// Emit every timestep, or only the final one.
    return_sequences: bool,
}

impl BidirectionalConfig {
    /// Pair the configuration with the two pretrained weight sets.
    pub fn init<B: Backend>(
        &self,
        forward_weights: LstmWeights<B>,
        backward_weights: LstmWeights<B>,
    ) -> Bidirectional<B> {
        Bidirectional {
            config: self.clone(),
            forward_weights,
            backward_weights,
        }
    }
}

/// A bidirectional recurrent layer evaluating pretrained weights.
///
/// The layer is immutable after construction and keeps no state between
/// calls, so a single instance may serve concurrent `forward` calls; each
/// call owns its working state on its own stack.
#[derive(Debug, Clone)]
pub struct Bidirectional<B: Backend> {
    config: BidirectionalConfig,
    forward_weights: LstmWeights<B>,
    backward_weights: LstmWeights<B>,
}

impl<B: Backend> Bidirectional<B> {
    /// Hidden state width of each directional pass. The merged output
    /// carries `2 * units` channels under `concat`, `units` otherwise.
    pub fn units(&self) -> usize {
        self.config.units
    }

    pub fn return_sequences(&self) -> bool {
        self.config.return_sequences
    }

    /// Apply the layer to an input time series.
    ///
    /// Two input conventions are accepted and detected from the slice
    /// length: a single `[1, T, features]` tensor with time along the
    /// width axis, or one `[1, 1, features]` tensor per timestep. The
    /// output comes back in the caller's convention: per-timestep tensors
    /// for the multi-input case with `return_sequences`, one tensor
    /// otherwise.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`](crate::error::Error::UnsupportedOperation)
    /// for an unknown activation or wrapped-layer name,
    /// [`Error::Configuration`](crate::error::Error::Configuration) for an
    /// unknown merge mode or an empty or zero-width input. All are fatal
    /// to the call; no partial output is returned.
    pub fn forward(&self, inputs: &[Tensor<B, 3>]) -> crate::error::Result<Vec<Tensor<B, 3>>> {
        let multi_input = inputs.len() > 1;

        let x = match inputs {
            [] => {
                return Err(crate::error::Error::configuration(
                    "bidirectional layer applied to an empty input sequence",
                ))
            }
            [single] => single.clone(),
            many => {
                // Multi-input convention: one tensor per timestep, data at
                // width index zero of each element.
                let steps: Vec<Tensor<B, 3>> =
                    many.iter().map(|t| t.clone().narrow(1, 0, 1)).collect();
                Tensor::cat(steps, 1)
            }
        };

        let (result_forward, result_backward) = match self.config.wrapped_layer.as_str() {
            "LSTM" => {
                let fwd = self.run_pass(x.clone(), &self.forward_weights)?;
                let bwd = self.run_pass(reverse_time(x), &self.backward_weights)?;
                // Re-reverse so position i of both outputs refers to the
                // same original timestep.
                (fwd, reverse_time(bwd))
            }
            other => {
                return Err(crate::error::Error::unsupported_operation(format!(
                    "layer '{other}' not yet implemented"
                )))
            }
        };

        let mode = MergeMode::from_name(&self.config.merge_mode)?;
        let merged = merge(mode, result_forward, result_backward)?;

        if multi_input && self.config.return_sequences {
            let [_, width, _] = merged.dims();
            Ok((0..width)
                .map(|t| merged.clone().narrow(1, t, 1))
                .collect())
        } else {
            Ok(vec![merged])
        }
    }

    fn run_pass(
        &self,
        input: Tensor<B, 3>,
        weights: &LstmWeights<B>,
    ) -> crate::error::Result<Tensor<B, 3>> {
        lstm_forward(
            input,
            weights,
            self.config.units,
            self.config.use_bias,
            self.config.return_sequences,
            &self.config.activation,
            &self.config.recurrent_activation,
        )
    }
}
