pub mod buffer;
pub mod channel;
pub mod config;
pub mod context;
pub mod error;
pub mod sink;

pub use buffer::{BufferState, ErrorBuffer};
pub use channel::ErrorChannel;
pub use config::{ChannelConfig, DEFAULT_CAPACITY, DEFAULT_SEPARATOR};
pub use context::ErrorContext;
pub use error::{ChannelError, NativeError, Result};
pub use sink::ErrorSink;
