use thiserror::Error;

/// A rejected search window or removal index.
///
/// Every public operation validates its `(start, count)` arguments before
/// touching the buffer, so a returned error guarantees the buffer was not
/// mutated. The variants carry the offending values so callers (and tests)
/// can tell exactly which bound was violated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
  #[error("start index {start} is out of bounds for length {len}")]
  StartOutOfBounds { start: usize, len: usize },

  #[error("window of {count} at {start} runs past the end of the buffer (len {len})")]
  WindowOutOfBounds { start: usize, count: usize, len: usize },

  #[error("backward window of {count} at {start} crosses below index 0")]
  WindowUnderflow { start: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
