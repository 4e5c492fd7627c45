use crate::error::{ChannelError, Result};

/// Buffer size in bytes, terminator included.
pub const DEFAULT_CAPACITY: usize = 1024;

pub const DEFAULT_SEPARATOR: char = '\n';

/// Configuration shared by every per-thread buffer of a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Size of each buffer in bytes, including the terminator, so at most
    /// `capacity - 1` bytes of message text are ever stored.
    pub capacity: usize,
    /// Inserted between consecutive messages.
    pub separator: char,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl ChannelConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Number of message bytes a buffer can hold.
    pub fn max_len(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity < 2 {
            return Err(ChannelError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        if self.separator == '\0' {
            return Err(ChannelError::InvalidSeparator);
        }
        Ok(())
    }
}
