use thiserror::Error;

/// Errors produced by the selection routines and the timing harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// There is no k-th smallest element of an empty collection.
    #[error("cannot select from an empty collection")]
    EmptyInput,

    /// The requested rank is not in `[0, len)`.
    #[error("rank {k} is out of bounds for a collection of length {len}")]
    InvalidRank { k: usize, len: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The two selectors returned different values for the same input and rank.
    #[error("selectors disagree: deterministic returned {deterministic}, randomized returned {randomized}")]
    Disagreement {
        deterministic: String,
        randomized: String,
    },
}

impl SelectError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SelectError::InvalidInput(msg.into())
    }
}

pub use SelectError as Error;

pub type Result<T> = std::result::Result<T, SelectError>;

/// Checks the rank contract shared by every selector.
pub(crate) fn validate_rank(len: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(SelectError::EmptyInput);
    }
    if k >= len {
        return Err(SelectError::InvalidRank { k, len });
    }
    Ok(())
}
