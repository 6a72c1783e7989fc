//! Activation choice for plain (Elman) RNN layers
//!
//! LSTM and GRU cells fix their gate activations internally; only the plain
//! RNN lets the caller pick the nonlinearity applied to the hidden update.

use burn::config::Config;
use burn::tensor::{activation, backend::Backend, Tensor};

use crate::options::CellKind;

/// Nonlinearity used by a plain RNN cell.
///
/// The hidden update of a plain RNN layer is
/// `h' = f(W_ih x + b_ih + W_hh h + b_hh)` where `f` is selected here.
///
/// # Example
///
/// ```rust
/// use burn::backend::NdArray;
/// use burn::tensor::Tensor;
/// use recurrent_options::activation::Nonlinearity;
///
/// type Backend = NdArray<f32>;
/// let device = Default::default();
///
/// let x = Tensor::<Backend, 1>::from_floats([-1.0, 0.0, 1.0], &device);
/// let y = Nonlinearity::ReLU.forward(x);
/// assert_eq!(y.dims(), [3]);
/// ```
#[derive(Config, Debug, PartialEq, Eq, Hash, Copy)]
pub enum Nonlinearity {
    /// Hyperbolic tangent. This is the default.
    Tanh,
    /// Rectified linear unit.
    ReLU,
}

impl Default for Nonlinearity {
    fn default() -> Self {
        Self::Tanh
    }
}

impl Nonlinearity {
    /// Every legal nonlinearity.
    pub const ALL: [Nonlinearity; 2] = [Nonlinearity::Tanh, Nonlinearity::ReLU];

    /// The plain-RNN cell kind that runs with this nonlinearity.
    pub fn cell_kind(self) -> CellKind {
        match self {
            Self::Tanh => CellKind::RnnTanh,
            Self::ReLU => CellKind::RnnRelu,
        }
    }

    /// Short lowercase name, as printed in a
    /// [`ParameterLayout`](crate::layout::ParameterLayout) summary.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tanh => "tanh",
            Self::ReLU => "relu",
        }
    }

    /// Applies the nonlinearity element-wise.
    ///
    /// # Arguments
    ///
    /// * `x` - Input tensor of any dimension
    pub fn forward<B: Backend, const D: usize>(self, x: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Self::Tanh => x.tanh(),
            Self::ReLU => activation::relu(x),
        }
    }
}

/// Applies a [`Nonlinearity`] directly on a tensor.
pub trait NonlinearityActivation {
    /// Applies `nonlinearity` element-wise
    fn activate(self, nonlinearity: Nonlinearity) -> Self;
}

impl<B: Backend, const D: usize> NonlinearityActivation for Tensor<B, D> {
    fn activate(self, nonlinearity: Nonlinearity) -> Self {
        nonlinearity.forward(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::Tensor;

    type Backend = NdArray<f32>;

    #[test]
    fn test_default_is_tanh() {
        assert_eq!(Nonlinearity::default(), Nonlinearity::Tanh);
    }

    #[test]
    fn test_cell_kind_mapping() {
        assert_eq!(Nonlinearity::Tanh.cell_kind(), CellKind::RnnTanh);
        assert_eq!(Nonlinearity::ReLU.cell_kind(), CellKind::RnnRelu);
    }

    #[test]
    fn test_tanh_matches_scalar() {
        let device = Default::default();
        let test_values = [-10.0f32, -1.0, 0.0, 0.5, 3.0];

        for &val in &test_values {
            let x = Tensor::<Backend, 1>::full([1], val, &device);
            let y = Nonlinearity::Tanh.forward(x).into_scalar();
            assert!(
                (y - val.tanh()).abs() < 1e-5,
                "tanh incorrect at x={}",
                val
            );
        }
    }

    #[test]
    fn test_relu_clamps_negatives() {
        let device = Default::default();
        let x = Tensor::<Backend, 1>::from_floats([-2.0f32, -0.5, 0.0, 0.5, 2.0], &device);
        let y = Nonlinearity::ReLU.forward(x);

        let expected = [0.0f32, 0.0, 0.0, 0.5, 2.0];
        for (i, &e) in expected.iter().enumerate() {
            let v = y.clone().slice([i..i + 1]).into_scalar();
            assert!((v - e).abs() < 1e-6, "relu[{}] = {}, expected {}", i, v, e);
        }
    }

    #[test]
    fn test_trait_matches_direct() {
        let device = Default::default();
        let x = Tensor::<Backend, 2>::random(
            [3, 4],
            burn::tensor::Distribution::Uniform(-2.0, 2.0),
            &device,
        );

        for nonlinearity in Nonlinearity::ALL {
            let via_trait = x.clone().activate(nonlinearity);
            let direct = nonlinearity.forward(x.clone());
            let diff = (via_trait - direct).abs().sum().into_scalar();
            assert!(diff < 1e-6);
        }
    }
}
