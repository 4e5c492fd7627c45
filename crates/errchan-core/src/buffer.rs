use tracing::{debug, trace};

use crate::config::ChannelConfig;

/// Whether a buffer currently holds any message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    Empty,
    Accumulating,
}

/// Bounded accumulator for the error messages of one thread.
///
/// Messages are joined with the configured separator. A message that would
/// push the text past `capacity - 1` bytes is dropped whole, and every later
/// message is dropped too until the next [`clear`](Self::clear), so the
/// stored text is always a prefix of the full concatenation that ends on a
/// message boundary.
///
/// The separator goes between accepted messages, empty ones included, so
/// the text is always the exact join of what was accepted.
#[derive(Debug, Clone)]
pub struct ErrorBuffer {
    content: String,
    max_len: usize,
    separator: char,
    count: usize,
    saturated: bool,
    last_status: Option<i32>,
}

impl ErrorBuffer {
    pub fn new(config: &ChannelConfig) -> Self {
        Self {
            content: String::with_capacity(config.max_len()),
            max_len: config.max_len(),
            separator: config.separator,
            count: 0,
            saturated: false,
            last_status: None,
        }
    }

    /// Append a message. Returns `false` if it was dropped.
    ///
    /// `status` is recorded but never interpreted.
    pub fn append(&mut self, message: &str, status: i32) -> bool {
        let sep_len = if self.count == 0 {
            0
        } else {
            self.separator.len_utf8()
        };
        let needed = self.content.len() + sep_len + message.len();

        if self.saturated || needed > self.max_len {
            if !self.saturated {
                debug!(
                    len = self.content.len(),
                    msg_len = message.len(),
                    max_len = self.max_len,
                    "error buffer full, dropping message"
                );
            }
            self.saturated = true;
            return false;
        }

        if sep_len > 0 {
            self.content.push(self.separator);
        }
        self.content.push_str(message);
        self.count += 1;
        self.last_status = Some(status);
        trace!(status, len = self.content.len(), "error message appended");
        true
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.count = 0;
        self.saturated = false;
        self.last_status = None;
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of messages accepted since the last clear.
    pub fn message_count(&self) -> usize {
        self.count
    }

    /// Maximum number of message bytes this buffer holds.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True once a message has been dropped since the last clear.
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    pub fn last_status(&self) -> Option<i32> {
        self.last_status
    }

    pub fn state(&self) -> BufferState {
        if self.count == 0 {
            BufferState::Empty
        } else {
            BufferState::Accumulating
        }
    }
}
