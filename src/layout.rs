//! Parameter Layout Planning
//!
//! Turns a finished options value into the list of weight and bias
//! parameters a recurrent layer allocates, along with the tensor shapes its
//! forward pass expects.
//!
//! This is the point where option values are checked. The option types
//! themselves accept anything; a layer constructor builds a
//! [`ParameterLayout`] first and refuses configurations that cannot produce
//! parameters.
//!
//! ## Parameter Naming
//!
//! | Parameter | Shape |
//! |-----------|-------|
//! | `weight_ih_l{k}{suffix}` | `[gate_size, layer_input_size]` |
//! | `weight_hh_l{k}{suffix}` | `[gate_size, hidden_size]` |
//! | `bias_ih_l{k}{suffix}` | `[gate_size]` (only with `bias`) |
//! | `bias_hh_l{k}{suffix}` | `[gate_size]` (only with `bias`) |
//!
//! `suffix` is empty for the forward direction and `_reverse` for the
//! backward direction of a bidirectional layer. `gate_size` is
//! `gate_count * hidden_size` (4 for LSTM, 3 for GRU, 1 for plain RNN).

use std::fmt;

use serde::Serialize;

use crate::errors::OptionsError;
use crate::options::{CellKind, RecurrentOptions};

/// One weight or bias tensor of a recurrent layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Parameter name, e.g. `weight_ih_l0_reverse`
    pub name: String,
    /// Tensor shape
    pub shape: Vec<usize>,
    /// Index of the stacked layer this parameter belongs to
    pub layer: usize,
    /// Whether it belongs to the backward direction
    pub reverse: bool,
}

impl ParameterSpec {
    /// Number of scalar elements, or `None` if it does not fit in `usize`.
    pub fn numel(&self) -> Option<usize> {
        self.shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
    }
}

/// Planned parameters and tensor shapes for one recurrent layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterLayout {
    cell_kind: CellKind,
    input_size: usize,
    hidden_size: usize,
    num_layers: usize,
    num_directions: usize,
    bias: bool,
    batch_first: bool,
    dropout: f64,
    gate_size: usize,
    output_size: usize,
    parameter_count: usize,
    parameters: Vec<ParameterSpec>,
}

impl ParameterLayout {
    /// Plan the parameters for `options`.
    ///
    /// # Errors
    /// * [`OptionsError::ZeroHiddenSize`] if `hidden_size` is 0
    /// * [`OptionsError::ZeroLayers`] if `num_layers` is 0
    /// * [`OptionsError::DropoutOutOfRange`] if `dropout` is not in `[0, 1]`
    /// * [`OptionsError::SizeOverflow`] if a shape or the parameter count does not fit in `usize`
    pub fn from_options<O: RecurrentOptions + ?Sized>(options: &O) -> Result<Self, OptionsError> {
        let hidden_size = options.hidden_size();
        let num_layers = options.num_layers();
        let dropout = options.dropout();

        if hidden_size == 0 {
            return Err(OptionsError::ZeroHiddenSize);
        }
        if num_layers == 0 {
            return Err(OptionsError::ZeroLayers);
        }
        if !(0.0..=1.0).contains(&dropout) {
            return Err(OptionsError::DropoutOutOfRange(dropout));
        }
        if dropout > 0.0 && num_layers == 1 {
            tracing::warn!(
                dropout,
                num_layers,
                "dropout is only applied between stacked layers, so a single-layer network never uses it"
            );
        }

        let cell_kind = options.cell_kind();
        let num_directions = options.num_directions();
        let bias = options.bias();
        let gate_size = checked(cell_kind.gate_count().checked_mul(hidden_size))?;
        let output_size = checked(hidden_size.checked_mul(num_directions))?;
        let tensors_per_direction = if bias { 4 } else { 2 };
        let tensor_count = checked(
            num_layers
                .checked_mul(num_directions)
                .and_then(|n| n.checked_mul(tensors_per_direction)),
        )?;

        // Scalars per direction: the first layer reads the input, deeper
        // layers read the concatenated output of the layer below.
        let bias_scalars = if bias {
            checked(gate_size.checked_mul(2))?
        } else {
            0
        };
        let layer_scalars = |layer_input_size: usize| {
            gate_size
                .checked_mul(layer_input_size)?
                .checked_add(gate_size.checked_mul(hidden_size)?)?
                .checked_add(bias_scalars)
        };
        let first_scalars = checked(layer_scalars(options.input_size()))?;
        let deeper_scalars = if num_layers > 1 {
            checked(
                layer_scalars(output_size).and_then(|deeper| deeper.checked_mul(num_layers - 1)),
            )?
        } else {
            0
        };
        let parameter_count = checked(
            first_scalars
                .checked_add(deeper_scalars)
                .and_then(|n| n.checked_mul(num_directions)),
        )?;

        let mut parameters = Vec::new();
        parameters
            .try_reserve_exact(tensor_count)
            .map_err(|_| OptionsError::SizeOverflow)?;
        for layer in 0..num_layers {
            let layer_input_size = if layer == 0 {
                options.input_size()
            } else {
                output_size
            };

            for direction in 0..num_directions {
                let reverse = direction == 1;
                let suffix = if reverse { "_reverse" } else { "" };

                let mut tensors = vec![
                    ("weight_ih", vec![gate_size, layer_input_size]),
                    ("weight_hh", vec![gate_size, hidden_size]),
                ];
                if bias {
                    tensors.push(("bias_ih", vec![gate_size]));
                    tensors.push(("bias_hh", vec![gate_size]));
                }

                for (kind, shape) in tensors {
                    parameters.push(ParameterSpec {
                        name: format!("{kind}_l{layer}{suffix}"),
                        shape,
                        layer,
                        reverse,
                    });
                }
            }
        }

        let layout = Self {
            cell_kind,
            input_size: options.input_size(),
            hidden_size,
            num_layers,
            num_directions,
            bias,
            batch_first: options.batch_first(),
            dropout,
            gate_size,
            output_size,
            parameter_count,
            parameters,
        };

        tracing::debug!(
            cell = cell_kind.name(),
            tensors = layout.parameters.len(),
            scalars = layout.parameter_count(),
            "planned recurrent layer parameters"
        );

        Ok(layout)
    }

    /// The cell kind the layout was planned for
    pub fn cell_kind(&self) -> CellKind {
        self.cell_kind
    }

    /// Rows of every weight matrix: `gate_count * hidden_size`
    pub fn gate_size(&self) -> usize {
        self.gate_size
    }

    /// 2 for bidirectional layers, 1 otherwise
    pub fn num_directions(&self) -> usize {
        self.num_directions
    }

    /// Feature width of the layer output: `hidden_size * num_directions`
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// All parameters in allocation order (layer, then direction).
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Total number of scalar parameters.
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    /// Shape of the input sequence tensor.
    ///
    /// `[batch, seq, input_size]` when batch-first, `[seq, batch, input_size]` otherwise.
    pub fn input_shape(&self, batch_size: usize, seq_len: usize) -> [usize; 3] {
        self.sequence_shape(batch_size, seq_len, self.input_size)
    }

    /// Shape of the output sequence tensor, laid out like the input.
    pub fn output_shape(&self, batch_size: usize, seq_len: usize) -> [usize; 3] {
        self.sequence_shape(batch_size, seq_len, self.output_size())
    }

    /// Shape of the initial/final hidden state: `[num_layers * num_directions, batch, hidden_size]`.
    ///
    /// The state is always sequence-first regardless of `batch_first`.
    pub fn hidden_state_shape(&self, batch_size: usize) -> [usize; 3] {
        // Bounded by the tensor count checked in `from_options`.
        [
            self.num_layers * self.num_directions,
            batch_size,
            self.hidden_size,
        ]
    }

    /// Shape of the LSTM cell state, `None` for cells without one.
    pub fn cell_state_shape(&self, batch_size: usize) -> Option<[usize; 3]> {
        self.cell_kind
            .has_cell_state()
            .then(|| self.hidden_state_shape(batch_size))
    }

    /// Dropout probability applied to the output of `layer`, if any.
    ///
    /// The last layer never gets dropout.
    pub fn dropout_after_layer(&self, layer: usize) -> Option<f64> {
        (self.dropout > 0.0 && layer < self.num_layers - 1).then_some(self.dropout)
    }

    fn sequence_shape(&self, batch_size: usize, seq_len: usize, features: usize) -> [usize; 3] {
        if self.batch_first {
            [batch_size, seq_len, features]
        } else {
            [seq_len, batch_size, features]
        }
    }
}

fn checked(value: Option<usize>) -> Result<usize, OptionsError> {
    value.ok_or(OptionsError::SizeOverflow)
}

/// One-line summary in the form `LSTM(input_size=8, hidden_size=16, ...)`.
///
/// Plain RNN layers print as `RNN` with their `nonlinearity`.
impl fmt::Display for ParameterLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer_name = match self.cell_kind {
            CellKind::Lstm => "LSTM",
            CellKind::Gru => "GRU",
            CellKind::RnnTanh | CellKind::RnnRelu => "RNN",
        };
        write!(
            f,
            "{layer_name}(input_size={}, hidden_size={}, num_layers={}",
            self.input_size, self.hidden_size, self.num_layers
        )?;
        if let Some(nonlinearity) = self.cell_kind.nonlinearity() {
            write!(f, ", nonlinearity={}", nonlinearity.name())?;
        }
        write!(
            f,
            ", bias={}, batch_first={}, dropout={}, bidirectional={})",
            self.bias,
            self.batch_first,
            self.dropout,
            self.num_directions == 2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{GRUOptions, LSTMOptions, PlainRNNOptions};

    #[test]
    fn test_single_layer_lstm_layout() {
        let layout = ParameterLayout::from_options(&LSTMOptions::new(10, 20)).unwrap();

        assert_eq!(layout.gate_size(), 80);
        let names: Vec<&str> = layout.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["weight_ih_l0", "weight_hh_l0", "bias_ih_l0", "bias_hh_l0"]
        );
        assert_eq!(layout.parameter("weight_ih_l0").unwrap().shape, vec![80, 10]);
        assert_eq!(layout.parameter("weight_hh_l0").unwrap().shape, vec![80, 20]);
        assert_eq!(layout.parameter("bias_hh_l0").unwrap().shape, vec![80]);
    }

    #[test]
    fn test_parameter_count_without_bias() {
        let options = GRUOptions::new(4, 5).with_bias(false);
        let layout = ParameterLayout::from_options(&options).unwrap();

        // 15 * 4 + 15 * 5
        assert_eq!(layout.parameter_count(), 135);
        assert!(layout.parameter("bias_ih_l0").is_none());
    }

    #[test]
    fn test_zero_layers_rejected() {
        let options = PlainRNNOptions::new(4, 5).with_num_layers(0);
        assert_eq!(
            ParameterLayout::from_options(&options),
            Err(OptionsError::ZeroLayers)
        );
    }

    #[test]
    fn test_numel_overflow() {
        let spec = ParameterSpec {
            name: "weight_ih_l0".to_string(),
            shape: vec![usize::MAX, 2],
            layer: 0,
            reverse: false,
        };
        assert_eq!(spec.numel(), None);
    }

    #[test]
    fn test_nan_dropout_rejected() {
        let options = LSTMOptions::new(4, 5).with_dropout(f64::NAN);
        assert!(matches!(
            ParameterLayout::from_options(&options),
            Err(OptionsError::DropoutOutOfRange(_))
        ));
    }
}
