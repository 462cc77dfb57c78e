use thiserror::Error;

/// Returned by `pop` and `top` when the queue holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty")]
pub struct EmptyQueueError;

/// A token of queue text that could not be parsed as an element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse token {index} ({token:?}) of queue text: {reason}")]
pub struct ParseQueueError {
    /// Zero-based position of the token in the comma-separated text.
    pub index: usize,
    pub token: String,
    pub reason: String,
}
