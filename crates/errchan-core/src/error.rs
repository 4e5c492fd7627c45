use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("invalid buffer capacity {capacity}: need room for at least one byte and a terminator")]
    InvalidCapacity { capacity: usize },
    #[error("invalid separator: NUL would cut off the text at the C boundary")]
    InvalidSeparator,
    #[error(
        "error channel already initialized with capacity {existing} and separator {existing_separator:?}, \
         requested capacity {requested} and separator {requested_separator:?}"
    )]
    AlreadyInitialized {
        existing: usize,
        existing_separator: char,
        requested: usize,
        requested_separator: char,
    },
    #[error("error channel used before initialization")]
    NotInitialized,
    #[error("thread-local error slot is unavailable on this thread")]
    SlotUnavailable,
    #[error("an error context is already active on this thread")]
    ContextActive,
}

/// Failure of one error context: the native status together with the
/// messages the library reported while it ran.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("native call failed (status {status}): {message}")]
pub struct NativeError {
    pub status: i32,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, ChannelError>;
