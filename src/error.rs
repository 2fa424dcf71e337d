use thiserror::Error;

/// Errors raised while validating or reading a vertex buffer.
///
/// Empty input (no buffer, or a non-positive vertex count) is not an error;
/// it yields [`Bounds::ZERO`](crate::bounds::prelude::Bounds::ZERO).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BoundsError {
    /// A layout or matrix argument can never describe a valid read.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The buffer is too short for the record that was asked for.
    #[error("vertex {index} needs bytes {offset}..{needed} but the buffer holds {len}")]
    OutOfBounds {
        index: usize,
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// An [IO](std::io) Error from the positional reader
    #[error("could not read vertex data: {0}")]
    Io(#[from] std::io::Error),
}

impl BoundsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
