use burn::config::Config;

use crate::activation::Nonlinearity;
use crate::errors::OptionsError;

/// Which recurrent cell an options value configures.
#[derive(Config, Debug, PartialEq, Eq, Hash, Copy)]
pub enum CellKind {
    /// Long short-term memory: input, forget, cell and output gates.
    Lstm,
    /// Gated recurrent unit: reset, update and new gates.
    Gru,
    /// Elman RNN with tanh activation.
    RnnTanh,
    /// Elman RNN with ReLU activation.
    RnnRelu,
}

impl CellKind {
    /// Every legal cell kind.
    pub const ALL: [CellKind; 4] = [
        CellKind::Lstm,
        CellKind::Gru,
        CellKind::RnnTanh,
        CellKind::RnnRelu,
    ];

    /// Number of stacked gate blocks in each weight matrix.
    ///
    /// A layer's input-hidden and hidden-hidden weights have
    /// `gate_count() * hidden_size` rows.
    pub fn gate_count(self) -> usize {
        match self {
            Self::Lstm => 4,
            Self::Gru => 3,
            Self::RnnTanh | Self::RnnRelu => 1,
        }
    }

    /// The activation a plain RNN cell of this kind uses, or `None` for gated cells.
    pub fn nonlinearity(self) -> Option<Nonlinearity> {
        match self {
            Self::RnnTanh => Some(Nonlinearity::Tanh),
            Self::RnnRelu => Some(Nonlinearity::ReLU),
            Self::Lstm | Self::Gru => None,
        }
    }

    /// Whether the cell carries a separate cell state next to the hidden state.
    pub fn has_cell_state(self) -> bool {
        matches!(self, Self::Lstm)
    }

    /// Canonical upper-case name (`LSTM`, `GRU`, `RNN_TANH`, `RNN_RELU`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Lstm => "LSTM",
            Self::Gru => "GRU",
            Self::RnnTanh => "RNN_TANH",
            Self::RnnRelu => "RNN_RELU",
        }
    }
}

/// Read access shared by every recurrent option type.
///
/// Layer constructors take `&impl RecurrentOptions` (or
/// `Box<dyn RecurrentOptions>`) when they only care about the shared shape.
pub trait RecurrentOptions {
    /// The cell this configuration describes
    fn cell_kind(&self) -> CellKind;

    /// Number of features per timestep of the input sequence
    fn input_size(&self) -> usize;

    /// Number of features in the hidden state
    fn hidden_size(&self) -> usize;

    /// Number of stacked recurrent layers
    fn num_layers(&self) -> usize;

    /// Whether affine bias terms are used
    fn bias(&self) -> bool;

    /// Whether sequences are laid out `(batch, seq, feature)`
    fn batch_first(&self) -> bool;

    /// Dropout probability between stacked layers
    fn dropout(&self) -> f64;

    /// Whether the layer runs in both directions
    fn bidirectional(&self) -> bool;

    /// 2 for bidirectional layers, 1 otherwise
    fn num_directions(&self) -> usize {
        if self.bidirectional() {
            2
        } else {
            1
        }
    }

    /// Copies the shared fields into a [`RecurrentLayerOptionsBase`].
    fn to_base(&self) -> RecurrentLayerOptionsBase {
        RecurrentLayerOptionsBase::new(self.cell_kind(), self.input_size(), self.hidden_size())
            .with_num_layers(self.num_layers())
            .with_bias(self.bias())
            .with_batch_first(self.batch_first())
            .with_dropout(self.dropout())
            .with_bidirectional(self.bidirectional())
    }
}

/// Common options for RNN, LSTM and GRU layers.
///
/// The cell kind is fixed when the value is created; every other field can
/// be overwritten through its `with_*` setter.
#[derive(Config, Debug, PartialEq)]
pub struct RecurrentLayerOptionsBase {
    mode: CellKind,
    /// The number of features of a single sample in the input sequence `x`.
    pub input_size: usize,
    /// The number of features in the hidden state `h`.
    pub hidden_size: usize,
    /// The number of recurrent layers (cells) to use.
    #[config(default = 1)]
    pub num_layers: usize,
    /// Whether a bias term should be added to all linear operations.
    #[config(default = true)]
    pub bias: bool,
    /// If true, the input sequence should be provided as `(batch, sequence,
    /// features)`. If false (default), the expected layout is `(sequence, batch,
    /// features)`.
    #[config(default = false)]
    pub batch_first: bool,
    /// If non-zero, adds dropout with the given probability to the output of each
    /// RNN layer, except the final layer.
    ///
    /// Any value is accepted, but NaN and infinities serialize to JSON `null`
    /// and cannot be loaded back.
    #[config(default = 0.0)]
    pub dropout: f64,
    /// Whether to make the RNN bidirectional.
    #[config(default = false)]
    pub bidirectional: bool,
}

impl RecurrentLayerOptionsBase {
    /// The cell kind chosen at construction.
    pub fn mode(&self) -> CellKind {
        self.mode
    }

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

    /// Checks that this configuration describes `expected`.
    pub(crate) fn expect_mode(&self, expected: CellKind) -> Result<(), OptionsError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(OptionsError::ModeMismatch {
                expected: expected.name(),
                found: self.mode,
            })
        }
    }
}

impl_recurrent_options!(RecurrentLayerOptionsBase, |this| this.mode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_defaults() {
        let options = RecurrentLayerOptionsBase::new(CellKind::Gru, 4, 8);

        assert_eq!(options.mode(), CellKind::Gru);
        assert_eq!(options.input_size, 4);
        assert_eq!(options.hidden_size, 8);
        assert_eq!(options.num_layers, 1);
        assert!(options.bias);
        assert!(!options.batch_first);
        assert_eq!(options.dropout, 0.0);
        assert!(!options.bidirectional);
    }

    #[test]
    fn test_gate_counts() {
        assert_eq!(CellKind::Lstm.gate_count(), 4);
        assert_eq!(CellKind::Gru.gate_count(), 3);
        assert_eq!(CellKind::RnnTanh.gate_count(), 1);
        assert_eq!(CellKind::RnnRelu.gate_count(), 1);
    }

    #[test]
    fn test_nonlinearity_round_trip() {
        for kind in CellKind::ALL {
            if let Some(nonlinearity) = kind.nonlinearity() {
                assert_eq!(nonlinearity.cell_kind(), kind);
            }
        }
        assert_eq!(CellKind::Lstm.nonlinearity(), None);
        assert_eq!(CellKind::Gru.nonlinearity(), None);
    }

    #[test]
    fn test_size_setters_keep_mode() {
        let options = RecurrentLayerOptionsBase::new(CellKind::RnnRelu, 1, 1)
            .with_input_size(32)
            .with_hidden_size(64);

        assert_eq!(options.mode(), CellKind::RnnRelu);
        assert_eq!(options.input_size, 32);
        assert_eq!(options.hidden_size, 64);
    }

    #[test]
    fn test_expect_mode() {
        let options = RecurrentLayerOptionsBase::new(CellKind::Lstm, 1, 1);
        assert!(options.expect_mode(CellKind::Lstm).is_ok());
        assert_eq!(
            options.expect_mode(CellKind::Gru),
            Err(OptionsError::ModeMismatch {
                expected: "GRU",
                found: CellKind::Lstm,
            })
        );
    }

    #[test]
    fn test_boxed_trait_object() {
        let boxed: Box<dyn RecurrentOptions> =
            Box::new(RecurrentLayerOptionsBase::new(CellKind::Lstm, 3, 5).with_bidirectional(true));

        assert_eq!(boxed.cell_kind(), CellKind::Lstm);
        assert_eq!(boxed.num_directions(), 2);
        assert_eq!(boxed.to_base().hidden_size, 5);
    }
}
