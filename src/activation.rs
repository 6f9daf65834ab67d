//! Activation functions for the recurrent layers.
//!
//! Activation selection arrives from the model loader as a symbolic name
//! (the names the training framework uses). [`Activation::from_name`]
//! resolves the name once, before the temporal loop runs, so the per-step
//! gate math dispatches on a plain enum instead of comparing strings.

use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

const SELU_ALPHA: f32 = 1.673_263_2;
const SELU_SCALE: f32 = 1.050_701;

/// An elementwise activation function.
///
/// The seven supported functions and their closed forms:
///
/// | Name | Formula |
/// |------|---------|
/// | `linear` | `x` |
/// | `tanh` | `tanh(x)` |
/// | `sigmoid` | `1 / (1 + e^-x)` |
/// | `hard_sigmoid` | `clamp(0.2x + 0.5, 0, 1)` |
/// | `relu` | `max(x, 0)` |
/// | `selu` | `scale * x` if `x >= 0`, else `scale * alpha * (e^x - 1)` |
/// | `elu` | `x` if `x >= 0`, else `e^x - 1` |
///
/// # Example
///
/// ```rust
/// use burn::backend::NdArray;
/// use burn::tensor::Tensor;
/// use bilstm::activation::Activation;
///
/// type Backend = NdArray<f32>;
/// let device = Default::default();
///
/// let act = Activation::from_name("sigmoid").unwrap();
/// let x = Tensor::<Backend, 1>::from_floats([0.0], &device);
/// assert!((act.forward(x).into_scalar() - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Linear,
    Tanh,
    Sigmoid,
    HardSigmoid,
    Relu,
    Selu,
    Elu,
}

impl Activation {
    /// Resolve a symbolic activation name.
    ///
    /// Any name outside the table above is rejected with
    /// [`Error::UnsupportedOperation`](crate::error::Error::UnsupportedOperation)
    /// carrying the offending name; there is no silent default.
    pub fn from_name(name: &str) -> crate::error::Result<Self> {
        match name {
            "linear" => Ok(Self::Linear),
            "tanh" => Ok(Self::Tanh),
            "sigmoid" => Ok(Self::Sigmoid),
            "hard_sigmoid" => Ok(Self::HardSigmoid),
            "relu" => Ok(Self::Relu),
            "selu" => Ok(Self::Selu),
            "elu" => Ok(Self::Elu),
            _ => Err(crate::error::Error::unsupported_operation(format!(
                "activation function '{name}' not yet implemented"
            ))),
        }
    }

    /// Apply the activation elementwise.
    ///
    /// The branching functions (`selu`, `elu`) are expressed as the sum of
    /// a clamped-positive part and a clamped-negative exponential part;
    /// both parts vanish on the other side of zero, so the sum equals the
    /// piecewise definition everywhere including at zero.
    pub fn forward<B: Backend, const D: usize>(self, x: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Self::Linear => x,
            Self::Tanh => x.tanh(),
            Self::Sigmoid => activation::sigmoid(x),
            Self::HardSigmoid => (x * 0.2f32 + 0.5f32).clamp(0.0f32, 1.0f32),
            Self::Relu => activation::relu(x),
            Self::Selu => {
                let positive = x.clone().clamp_min(0.0f32);
                let negative = (x.clamp_max(0.0f32).exp() - 1.0f32) * SELU_ALPHA;
                (positive + negative) * SELU_SCALE
            }
            Self::Elu => {
                let positive = x.clone().clamp_min(0.0f32);
                positive + (x.clamp_max(0.0f32).exp() - 1.0f32)
            }
        }
    }
}
