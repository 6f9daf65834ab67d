//! Tensor utilities shared by the recurrent layers: time-axis reversal and
//! the four policies for merging the two directional outputs.
//!
//! All tensors here follow the `[1, time, channels]` layout the layers use
//! internally (height fixed at one, width carrying time).

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::error::{Error, Result};

/// Reverse a time series along its time axis.
///
/// Pure: returns a new tensor, the input is untouched. Reversing twice
/// reproduces the original.
pub fn reverse_time<B: Backend>(x: Tensor<B, 3>) -> Tensor<B, 3> {
    x.flip([1])
}

/// Policy for combining the forward and backward directional outputs.
///
/// The names are the ones the training framework persists: `concat`,
/// `sum`, `mul`, `ave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Channel-wise concatenation, first operand's channels first.
    Concat,
    /// Elementwise sum.
    Sum,
    /// Elementwise product.
    Mul,
    /// Elementwise average (sum divided by two).
    Ave,
}

impl MergeMode {
    /// Resolve a symbolic merge-mode name, rejecting anything unknown.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "concat" => Ok(Self::Concat),
            "sum" => Ok(Self::Sum),
            "mul" => Ok(Self::Mul),
            "ave" => Ok(Self::Ave),
            _ => Err(Error::configuration(format!(
                "merge mode '{name}' not valid"
            ))),
        }
    }
}

/// Merge two directional outputs into one tensor.
///
/// Height and width must match for every mode; the elementwise modes also
/// require identical channel depth, while `concat` adds the depths.
pub fn merge<B: Backend>(
    mode: MergeMode,
    a: Tensor<B, 3>,
    b: Tensor<B, 3>,
) -> Result<Tensor<B, 3>> {
    let dims_a = a.dims();
    let dims_b = b.dims();

    if dims_a[0] != dims_b[0] || dims_a[1] != dims_b[1] {
        return Err(Error::configuration(format!(
            "merge operands disagree on height/width: {dims_a:?} vs {dims_b:?}"
        )));
    }

    if mode != MergeMode::Concat && dims_a[2] != dims_b[2] {
        return Err(Error::configuration(format!(
            "elementwise merge requires equal channel depth: {dims_a:?} vs {dims_b:?}"
        )));
    }

    Ok(match mode {
        MergeMode::Concat => Tensor::cat(vec![a, b], 2),
        MergeMode::Sum => a + b,
        MergeMode::Mul => a * b,
        MergeMode::Ave => (a + b) / 2.0f32,
    })
}
