//! Tests for the plain-RNN nonlinearity

use burn::backend::NdArray;
use burn::tensor::Tensor;
use recurrent_options::activation::{Nonlinearity, NonlinearityActivation};
use recurrent_options::options::{PlainRNNOptions, RecurrentOptions};

type Backend = NdArray<f32>;

#[test]
fn test_tanh_zero() {
    let device = Default::default();
    let x = Tensor::<Backend, 1>::zeros([5], &device);
    let y = Nonlinearity::Tanh.forward(x);

    let sum = y.sum().into_scalar();
    assert!((sum - 0.0).abs() < 1e-6);
}

#[test]
fn test_tanh_saturation() {
    let device = Default::default();

    let y_pos = Nonlinearity::Tanh.forward(Tensor::<Backend, 1>::full([1], 100.0f32, &device));
    assert!(y_pos.into_scalar() > 0.999);

    let y_neg = Nonlinearity::Tanh.forward(Tensor::<Backend, 1>::full([1], -100.0f32, &device));
    assert!(y_neg.into_scalar() < -0.999);
}

#[test]
fn test_relu_multidimensional() {
    let device = Default::default();
    let x = Tensor::<Backend, 2>::random(
        [4, 8],
        burn::tensor::Distribution::Uniform(-2.0, 2.0),
        &device,
    );

    let y = Nonlinearity::ReLU.forward(x.clone());
    assert_eq!(y.dims(), [4, 8]);

    for i in 0..4 {
        for j in 0..8 {
            let x_val = x.clone().slice([i..i + 1, j..j + 1]).into_scalar();
            let y_val = y.clone().slice([i..i + 1, j..j + 1]).into_scalar();
            let expected = x_val.max(0.0);
            assert!(
                (y_val - expected).abs() < 1e-6,
                "Element [{}, {}] incorrect: got {}, expected {}",
                i,
                j,
                y_val,
                expected
            );
        }
    }
}

#[test]
fn test_options_select_activation() {
    let device = Default::default();
    let options = PlainRNNOptions::new(3, 3).with_nonlinearity(Nonlinearity::ReLU);

    let x = Tensor::<Backend, 3>::full([2, 1, 3], -1.0f32, &device);
    let y = x.activate(options.nonlinearity);

    assert_eq!(y.dims(), [2, 1, 3]);
    assert!(y.sum().into_scalar().abs() < 1e-6);
    assert_eq!(
        options.cell_kind().nonlinearity(),
        Some(options.nonlinearity)
    );
}
