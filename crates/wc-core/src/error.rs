use thiserror::Error;

pub type WcResult<T> = Result<T, WcError>;

/// Errors raised when a caller asks a question the engine cannot answer.
///
/// These are contract violations, not user input problems. Invalid field
/// values are reported through validation error trees instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WcError {
    #[error("Pinned grid has no squares ({what})")]
    PinnedGridHasNoSquares { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
