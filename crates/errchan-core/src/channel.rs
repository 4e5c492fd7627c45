use std::cell::RefCell;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::buffer::{BufferState, ErrorBuffer};
use crate::config::ChannelConfig;
use crate::context::ErrorContext;
use crate::error::{ChannelError, Result};

static CHANNEL: OnceLock<ErrorChannel> = OnceLock::new();

/// Per-thread state: the lazily created buffer and whether an error
/// context currently owns it.
struct ThreadSlot {
    buffer: Option<ErrorBuffer>,
    context_active: bool,
}

impl ThreadSlot {
    const fn new() -> Self {
        Self {
            buffer: None,
            context_active: false,
        }
    }
}

thread_local! {
    static SLOT: RefCell<ThreadSlot> = const { RefCell::new(ThreadSlot::new()) };
}

/// Process-wide error channel. Each thread that touches the channel gets
/// its own [`ErrorBuffer`]; no buffer is ever visible to another thread.
#[derive(Debug)]
pub struct ErrorChannel {
    config: ChannelConfig,
}

impl ErrorChannel {
    /// Register the process-wide channel.
    ///
    /// Calling again with the same config returns the existing channel;
    /// a different config is rejected.
    pub fn init(config: ChannelConfig) -> Result<&'static ErrorChannel> {
        config.validate()?;
        let channel = CHANNEL.get_or_init(|| {
            info!(capacity = config.capacity, "error channel initialized");
            ErrorChannel {
                config: config.clone(),
            }
        });
        if channel.config != config {
            return Err(ChannelError::AlreadyInitialized {
                existing: channel.config.capacity,
                existing_separator: channel.config.separator,
                requested: config.capacity,
                requested_separator: config.separator,
            });
        }
        Ok(channel)
    }

    /// The registered channel.
    pub fn global() -> Result<&'static ErrorChannel> {
        CHANNEL.get().ok_or(ChannelError::NotInitialized)
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Run `f` against the calling thread's buffer, creating it on first use.
    /// The slot stays borrowed while `f` runs, so `f` must not call back
    /// into the channel.
    pub(crate) fn with_buffer<R>(&self, f: impl FnOnce(&mut ErrorBuffer) -> R) -> Result<R> {
        self.with_slot(|slot| {
            let buffer = slot
                .buffer
                .get_or_insert_with(|| ErrorBuffer::new(&self.config));
            f(buffer)
        })
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut ThreadSlot) -> R) -> Result<R> {
        SLOT.try_with(|slot| f(&mut slot.borrow_mut()))
            .map_err(|_| ChannelError::SlotUnavailable)
    }

    /// Empty the calling thread's buffer.
    pub fn clear(&self) {
        if let Err(e) = self.with_buffer(|b| b.clear()) {
            warn!("error buffer not cleared: {}", e);
        }
    }

    /// Append a message to the calling thread's buffer. Messages that do
    /// not fit are dropped without notice.
    pub fn append(&self, message: &str, status: i32) {
        if let Err(e) = self.with_buffer(|b| b.append(message, status)) {
            warn!(status, "error message dropped: {}", e);
        }
    }

    /// Everything appended on this thread since the last clear.
    pub fn read(&self) -> String {
        self.with_buffer(|b| b.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn state(&self) -> BufferState {
        self.with_buffer(|b| b.state())
            .unwrap_or(BufferState::Empty)
    }

    /// Start an error context on the calling thread: the buffer is cleared
    /// and stays owned by the returned guard until it is finished or dropped.
    pub fn begin(&self) -> Result<ErrorContext<'_>> {
        self.with_slot(|slot| {
            if slot.context_active {
                return Err(ChannelError::ContextActive);
            }
            slot.context_active = true;
            slot.buffer
                .get_or_insert_with(|| ErrorBuffer::new(&self.config))
                .clear();
            Ok(())
        })??;
        Ok(ErrorContext::new(self))
    }

    /// Run `f` inside a fresh error context and return its result together
    /// with the messages reported while it ran.
    pub fn scoped<T>(&self, f: impl FnOnce(&mut ErrorContext<'_>) -> T) -> Result<(T, String)> {
        let mut ctx = self.begin()?;
        let value = f(&mut ctx);
        Ok((value, ctx.finish()))
    }

    /// Called by the context guard when it is finished or dropped.
    pub(crate) fn end_context(&self) -> String {
        self.with_slot(|slot| {
            slot.context_active = false;
            match slot.buffer.as_mut() {
                Some(buffer) => {
                    let message = buffer.as_str().to_string();
                    buffer.clear();
                    message
                }
                None => String::new(),
            }
        })
        .unwrap_or_default()
    }
}
