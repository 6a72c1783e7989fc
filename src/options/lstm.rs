use burn::config::Config;

use super::{CellKind, RecurrentLayerOptionsBase};
use crate::errors::OptionsError;

/// Options for LSTM layers.
///
/// The gating structure is fixed by the cell, so only the shared shape is
/// configurable.
#[derive(Config, Debug, PartialEq)]
pub struct LSTMOptions {
    /// The number of expected features in the input `x`
    pub input_size: usize,
    /// The number of features in the hidden state `h`
    pub hidden_size: usize,
    /// Number of recurrent layers. E.g., setting `num_layers = 2`
    /// would mean stacking two LSTMs together to form a stacked LSTM,
    /// with the second LSTM taking in outputs of the first LSTM and
    /// computing the final results. Default: 1
    #[config(default = 1)]
    pub num_layers: usize,
    /// If `false`, then the layer does not use bias weights `b_ih` and `b_hh`.
    /// Default: `true`
    #[config(default = true)]
    pub bias: bool,
    /// If `true`, then the input and output tensors are provided
    /// as `(batch, seq, feature)`. Default: `false`
    #[config(default = false)]
    pub batch_first: bool,
    /// If non-zero, introduces a dropout layer on the outputs of each
    /// LSTM layer except the last layer, with dropout probability equal to
    /// `dropout`. Default: 0
    ///
    /// Any value is accepted, but NaN and infinities serialize to JSON `null`
    /// and cannot be loaded back.
    #[config(default = 0.0)]
    pub dropout: f64,
    /// If `true`, becomes a bidirectional LSTM. Default: `false`
    #[config(default = false)]
    pub bidirectional: bool,
}

impl LSTMOptions {
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

impl_recurrent_options!(LSTMOptions, |_this| CellKind::Lstm);

impl From<LSTMOptions> for RecurrentLayerOptionsBase {
    fn from(options: LSTMOptions) -> Self {
        super::RecurrentOptions::to_base(&options)
    }
}

impl TryFrom<RecurrentLayerOptionsBase> for LSTMOptions {
    type Error = OptionsError;

    fn try_from(base: RecurrentLayerOptionsBase) -> Result<Self, Self::Error> {
        base.expect_mode(CellKind::Lstm)?;

        Ok(Self::new(base.input_size, base.hidden_size)
            .with_num_layers(base.num_layers)
            .with_bias(base.bias)
            .with_batch_first(base.batch_first)
            .with_dropout(base.dropout)
            .with_bidirectional(base.bidirectional))
    }
}
