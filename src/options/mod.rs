//! # Recurrent Layer Options
//!
//! Typed configuration consumed by RNN, LSTM and GRU layer constructors.
//! Each option type is a [`burn::config::Config`]: construct it with the
//! mandatory sizes, chain `with_*` setters for everything else, then hand it
//! to a layer.
//!
//! ## Option Types
//!
//! | Type | Cell | Extra fields |
//! |------|------|--------------|
//! | [`PlainRNNOptions`] | Elman RNN | `nonlinearity` |
//! | [`LSTMOptions`] | LSTM | none |
//! | [`GRUOptions`] | GRU | none |
//! | [`RecurrentLayerOptionsBase`] | any, picked by [`CellKind`] | none |
//!
//! ## Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `num_layers` | `1` |
//! | `bias` | `true` |
//! | `batch_first` | `false` |
//! | `dropout` | `0.0` |
//! | `bidirectional` | `false` |
//! | `nonlinearity` (plain RNN only) | [`Nonlinearity::Tanh`](crate::activation::Nonlinearity::Tanh) |
//!
//! None of these values are validated here. A layer that needs, say, a
//! non-zero hidden size checks it when it plans its parameters; see
//! [`ParameterLayout`](crate::layout::ParameterLayout).
//!
//! ## Example
//!
//! ```rust
//! use recurrent_options::options::{LSTMOptions, RecurrentOptions};
//!
//! let options = LSTMOptions::new(8, 16)
//!     .with_num_layers(3)
//!     .with_bidirectional(true);
//!
//! assert_eq!(options.num_layers, 3);
//! assert_eq!(options.num_directions(), 2);
//! assert!(options.bias);
//! ```

/// Implements [`RecurrentOptions`] for a concrete option type whose shared
/// fields are public struct fields.
macro_rules! impl_recurrent_options {
    ($options:ty, |$this:ident| $cell_kind:expr) => {
        impl $crate::options::RecurrentOptions for $options {
            fn cell_kind(&self) -> $crate::options::CellKind {
                let $this = self;
                $cell_kind
            }

            fn input_size(&self) -> usize {
                self.input_size
            }

            fn hidden_size(&self) -> usize {
                self.hidden_size
            }

            fn num_layers(&self) -> usize {
                self.num_layers
            }

            fn bias(&self) -> bool {
                self.bias
            }

            fn batch_first(&self) -> bool {
                self.batch_first
            }

            fn dropout(&self) -> f64 {
                self.dropout
            }

            fn bidirectional(&self) -> bool {
                self.bidirectional
            }
        }
    };
}

mod base;
mod gru;
mod lstm;
mod rnn;

pub use base::{CellKind, RecurrentLayerOptionsBase, RecurrentOptions};
pub use gru::GRUOptions;
pub use lstm::LSTMOptions;
pub use rnn::PlainRNNOptions;
