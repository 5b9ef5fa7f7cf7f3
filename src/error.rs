use thiserror::Error;

/// Failure of a positional queue operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The index is at or beyond the current length.
    #[error("index {index} is out of range for queue of length {len}")]
    OutOfRange { index: usize, len: usize },
}
