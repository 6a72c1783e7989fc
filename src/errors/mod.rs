//! Error types.

mod options_error;

pub use options_error::OptionsError;
