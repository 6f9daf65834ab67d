//! Tests for the activation registry against the closed-form formulas.

use bilstm::activation::Activation;
use burn::backend::NdArray;
use burn::tensor::Tensor;

type Backend = NdArray<f32>;

const SELU_ALPHA: f32 = 1.673_263_2;
const SELU_SCALE: f32 = 1.050_701;

fn eval(name: &str, x: f32) -> f32 {
    let device = Default::default();
    let act = Activation::from_name(name).unwrap();
    let t = Tensor::<Backend, 1>::from_floats([x], &device);
    act.forward(t).into_scalar()
}

fn scalar_reference(name: &str, x: f32) -> f32 {
    match name {
        "linear" => x,
        "tanh" => x.tanh(),
        "sigmoid" => 1.0 / (1.0 + (-x).exp()),
        "hard_sigmoid" => (0.2 * x + 0.5).clamp(0.0, 1.0),
        "relu" => x.max(0.0),
        "selu" => {
            if x >= 0.0 {
                SELU_SCALE * x
            } else {
                SELU_SCALE * SELU_ALPHA * (x.exp() - 1.0)
            }
        }
        "elu" => {
            if x >= 0.0 {
                x
            } else {
                x.exp() - 1.0
            }
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_all_activations_match_closed_forms() {
    let names = [
        "linear",
        "tanh",
        "sigmoid",
        "hard_sigmoid",
        "relu",
        "selu",
        "elu",
    ];
    let samples = [-3.0f32, -1.0, -0.25, 0.0, 0.25, 1.0, 3.0];

    for name in names {
        for &x in &samples {
            let got = eval(name, x);
            let expected = scalar_reference(name, x);
            assert!(
                (got - expected).abs() < 1e-5,
                "{} incorrect at x={}: got {}, expected {}",
                name,
                x,
                got,
                expected
            );
        }
    }
}

#[test]
fn test_documented_sample_points() {
    assert!((eval("sigmoid", 0.0) - 0.5).abs() < 1e-6);
    assert_eq!(eval("relu", -3.0), 0.0);
    assert!(eval("elu", 0.0).abs() < 1e-7);
    assert_eq!(eval("hard_sigmoid", 10.0), 1.0);
    assert_eq!(eval("hard_sigmoid", -10.0), 0.0);
    assert!((eval("selu", 1.0) - SELU_SCALE).abs() < 1e-6);
}

#[test]
fn test_applies_elementwise_on_3d_tensors() {
    let device = Default::default();
    let act = Activation::from_name("tanh").unwrap();

    let values = [[[-1.0f32, 0.5], [2.0, -0.3], [0.0, 1.5]]];
    let x = Tensor::<Backend, 3>::from_floats(values, &device);
    let y = act.forward(x);

    assert_eq!(y.dims(), [1, 3, 2]);
    for i in 0..3 {
        for j in 0..2 {
            let got = y
                .clone()
                .slice([0..1, i..i + 1, j..j + 1])
                .into_scalar();
            let expected = values[0][i][j].tanh();
            assert!((got - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_unknown_activation_is_an_error() {
    let err = Activation::from_name("gelu").unwrap_err();
    assert!(err.to_string().contains("gelu"));

    assert!(Activation::from_name("").is_err());
    assert!(Activation::from_name("Sigmoid").is_err());
}
