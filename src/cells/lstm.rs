//! Single-direction LSTM recurrence over a time series.
//!
//! This is the kernel shared by the standalone LSTM layer and both passes
//! of the bidirectional layer. Weights arrive pretrained from the model
//! loader; nothing here is trainable or mutated.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::activation::Activation;
use crate::error::{Error, Result};

/// Pretrained weights for one directional LSTM pass.
///
/// Gate blocks occupy fixed column ranges of the `4 * units` axis:
/// input gate at `0..n`, forget at `n..2n`, candidate at `2n..3n`,
/// output at `3n..4n`. This ordering is a contract of the persisted
/// weight layout and must not be rearranged.
#[derive(Debug, Clone)]
pub struct LstmWeights<B: Backend> {
    /// Input-to-gates kernel, `[features, 4 * units]`.
    pub kernel: Tensor<B, 2>,
    /// Hidden-state-to-gates recurrent kernel, `[units, 4 * units]`.
    pub recurrent_kernel: Tensor<B, 2>,
    /// Gate bias, `[1, 4 * units]`, absent for layers trained without one.
    pub bias: Option<Tensor<B, 2>>,
}

impl<B: Backend> LstmWeights<B> {
    pub fn new(
        kernel: Tensor<B, 2>,
        recurrent_kernel: Tensor<B, 2>,
        bias: Option<Tensor<B, 2>>,
    ) -> Self {
        Self {
            kernel,
            recurrent_kernel,
            bias,
        }
    }
}

/// Evaluate one directional LSTM pass.
///
/// # Arguments
/// * `input` - Time series of shape `[1, seq_len, features]`
/// * `weights` - The directional weight set
/// * `units` - Hidden/cell state width `n`
/// * `use_bias` - Whether the gate bias is added to the input projection
/// * `return_sequences` - Emit every timestep's hidden state, or only the last
/// * `activation` - Name of the candidate/cell activation
/// * `recurrent_activation` - Name of the input/forget/output gate activation
///
/// # Returns
/// `[1, seq_len, units]` when `return_sequences`, else `[1, 1, units]`
/// holding the final hidden state.
///
/// Hidden and cell state start at zero on every call; no state survives
/// the call, so a fresh invocation always evaluates a fresh sequence.
///
/// # Errors
/// An unknown activation name, a zero-width time series, or `use_bias`
/// set on a weight set that carries no bias.
pub fn lstm_forward<B: Backend>(
    input: Tensor<B, 3>,
    weights: &LstmWeights<B>,
    units: usize,
    use_bias: bool,
    return_sequences: bool,
    activation: &str,
    recurrent_activation: &str,
) -> Result<Tensor<B, 3>> {
    let act = Activation::from_name(activation)?;
    let act_recurrent = Activation::from_name(recurrent_activation)?;

    let device = input.device();
    let [_, seq_len, _] = input.dims();
    if seq_len == 0 {
        return Err(Error::configuration(
            "lstm applied to a zero-width time series",
        ));
    }

    // The input projection has no sequential dependency, so it runs as one
    // batched matmul over all timesteps before the loop.
    let x: Tensor<B, 2> = input.squeeze(0);
    let mut projected = x.matmul(weights.kernel.clone());
    if use_bias {
        let bias = weights.bias.as_ref().ok_or_else(|| {
            Error::configuration("use_bias is set but the weight set carries no bias")
        })?;
        projected = projected + bias.clone();
    }

    let mut h = Tensor::<B, 2>::zeros([1, units], &device);
    let mut c = Tensor::<B, 2>::zeros([1, units], &device);

    let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(if return_sequences {
        seq_len
    } else {
        1
    });

    // Strictly sequential: each step reads the previous step's h and c.
    for t in 0..seq_len {
        let ifco = h.matmul(weights.recurrent_kernel.clone());
        let z = projected.clone().narrow(0, t, 1) + ifco;

        let gates = z.chunk(4, 1);
        let input_gate = act_recurrent.forward(gates[0].clone());
        let forget_gate = act_recurrent.forward(gates[1].clone());
        let candidate = act.forward(gates[2].clone());
        let output_gate = act_recurrent.forward(gates[3].clone());

        c = forget_gate * c + input_gate * candidate;
        h = output_gate * act.forward(c.clone());

        if return_sequences {
            outputs.push(h.clone());
        }
    }

    if !return_sequences {
        outputs.push(h);
    }

    Ok(Tensor::stack(outputs, 1))
}
