//! Errors raised when options are narrowed to a concrete cell or planned into parameters.

use thiserror::Error;

use crate::options::CellKind;

/// Errors from option conversions and parameter planning.
///
/// Building or mutating an options value never fails; these only surface
/// when a consumer asks for something the values cannot support.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("expected {expected} options, got mode {}", .found.name())]
    ModeMismatch {
        expected: &'static str,
        found: CellKind,
    },

    #[error("hidden_size must be greater than zero")]
    ZeroHiddenSize,

    #[error("num_layers must be greater than zero")]
    ZeroLayers,

    #[error("layer sizes are too large: a parameter shape or count does not fit in usize")]
    SizeOverflow,

    #[error("dropout should be a number in range [0, 1] representing the probability of an element being zeroed, got {0}")]
    DropoutOutOfRange(f64),
}
