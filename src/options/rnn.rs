use burn::config::Config;

use super::{CellKind, RecurrentLayerOptionsBase};
use crate::activation::Nonlinearity;
use crate::errors::OptionsError;

/// Options for plain (Elman) RNN layers.
///
/// This is the only option type with a cell-specific field: the
/// [`Nonlinearity`] applied to the hidden update.
#[derive(Config, Debug, PartialEq)]
pub struct PlainRNNOptions {
    /// The number of expected features in the input `x`
    pub input_size: usize,
    /// The number of features in the hidden state `h`
    pub hidden_size: usize,
    /// Number of recurrent layers. E.g., setting `num_layers = 2`
    /// would mean stacking two RNNs together to form a stacked RNN,
    /// with the second RNN taking in outputs of the first RNN and
    /// computing the final results. Default: 1
    #[config(default = 1)]
    pub num_layers: usize,
    /// The non-linearity to use. Default: [`Nonlinearity::Tanh`]
    #[config(default = "Nonlinearity::Tanh")]
    pub nonlinearity: Nonlinearity,
    /// If `false`, then the layer does not use bias weights `b_ih` and `b_hh`.
    /// Default: `true`
    #[config(default = true)]
    pub bias: bool,
    /// If `true`, then the input and output tensors are provided
    /// as `(batch, seq, feature)`. Default: `false`
    #[config(default = false)]
    pub batch_first: bool,
    /// If non-zero, introduces a dropout layer on the outputs of each
    /// RNN layer except the last layer, with dropout probability equal to
    /// `dropout`. Default: 0
    ///
    /// Any value is accepted, but NaN and infinities serialize to JSON `null`
    /// and cannot be loaded back.
    #[config(default = 0.0)]
    pub dropout: f64,
    /// If `true`, becomes a bidirectional RNN. Default: `false`
    #[config(default = false)]
    pub bidirectional: bool,
}

impl PlainRNNOptions {
    /// Set the input size
    pub fn with_input_size(mut self, input_size: usize) -> Self {
        self.input_size = input_size;
        self
    }

    /// Set the hidden size
    pub fn with_hidden_size(mut self, hidden_size: usize) -> Self {
        self.hidden_size = hidden_size;
        self
    }
}

impl_recurrent_options!(PlainRNNOptions, |this| this.nonlinearity.cell_kind());

impl From<PlainRNNOptions> for RecurrentLayerOptionsBase {
    fn from(options: PlainRNNOptions) -> Self {
        super::RecurrentOptions::to_base(&options)
    }
}

impl TryFrom<RecurrentLayerOptionsBase> for PlainRNNOptions {
    type Error = OptionsError;

    fn try_from(base: RecurrentLayerOptionsBase) -> Result<Self, Self::Error> {
        let mode = base.mode();
        let nonlinearity = mode.nonlinearity().ok_or(OptionsError::ModeMismatch {
            expected: "RNN_TANH or RNN_RELU",
            found: mode,
        })?;

        Ok(Self::new(base.input_size, base.hidden_size)
            .with_num_layers(base.num_layers)
            .with_nonlinearity(nonlinearity)
            .with_bias(base.bias)
            .with_batch_first(base.batch_first)
            .with_dropout(base.dropout)
            .with_bidirectional(base.bidirectional))
    }
}
