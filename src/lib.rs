//! # recurrent-options
//!
//! Typed configuration for recurrent layer constructors (plain RNN, LSTM,
//! GRU) built on Burn's `Config` derive.
//!
//! ## Features
//!
//! - **Option types**: [`PlainRNNOptions`](options::PlainRNNOptions),
//!   [`LSTMOptions`](options::LSTMOptions), [`GRUOptions`](options::GRUOptions)
//!   and the mode-tagged [`RecurrentLayerOptionsBase`](options::RecurrentLayerOptionsBase)
//! - **Closed tags**: [`CellKind`](options::CellKind) and
//!   [`Nonlinearity`](activation::Nonlinearity), exhaustively matchable
//! - **Fluent setters** with fixed defaults, JSON save/load through `Config`
//! - **Parameter planning**: [`ParameterLayout`](layout::ParameterLayout)
//!   derives weight names and shapes for a layer constructor
//!
//! ## Quick Start
//!
//! ```rust
//! use recurrent_options::prelude::*;
//!
//! let options = PlainRNNOptions::new(10, 20)
//!     .with_nonlinearity(Nonlinearity::ReLU)
//!     .with_num_layers(2);
//!
//! assert_eq!(options.cell_kind(), CellKind::RnnRelu);
//!
//! let layout = ParameterLayout::from_options(&options).unwrap();
//! assert_eq!(layout.hidden_state_shape(4), [2, 4, 20]);
//! ```

pub mod activation;
pub mod errors;
pub mod layout;
pub mod options;

pub mod prelude {
    pub use crate::activation::{Nonlinearity, NonlinearityActivation};
    pub use crate::errors::OptionsError;
    pub use crate::layout::{ParameterLayout, ParameterSpec};
    pub use crate::options::{
        CellKind, GRUOptions, LSTMOptions, PlainRNNOptions, RecurrentLayerOptionsBase,
        RecurrentOptions,
    };
}
