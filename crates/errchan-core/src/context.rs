use std::marker::PhantomData;

use crate::channel::ErrorChannel;
use crate::error::NativeError;
use crate::sink::ErrorSink;

/// Guard for one error context on the current thread.
///
/// Created by [`ErrorChannel::begin`], which clears the thread's buffer.
/// Finishing the context hands back the accumulated text; dropping it
/// unfinished discards the text. Either way the buffer is left empty, so
/// nothing leaks into the next context on this thread.
#[must_use = "dropping an error context discards its messages"]
#[derive(Debug)]
pub struct ErrorContext<'a> {
    channel: &'a ErrorChannel,
    finished: bool,
    // thread-affine
    _not_send: PhantomData<*const ()>,
}

impl<'a> ErrorContext<'a> {
    pub(crate) fn new(channel: &'a ErrorChannel) -> Self {
        Self {
            channel,
            finished: false,
            _not_send: PhantomData,
        }
    }

    pub fn report(&mut self, status: i32, message: &str) {
        self.channel.append(message, status);
    }

    /// Messages reported so far, without ending the context.
    pub fn read(&self) -> String {
        self.channel.read()
    }

    /// End the context and return everything reported during it.
    pub fn finish(mut self) -> String {
        self.finished = true;
        self.channel.end_context()
    }

    /// End the context and combine the native library's own status with
    /// the reported messages. A non-zero status or any reported message
    /// counts as failure.
    pub fn check(self, status: i32) -> Result<(), NativeError> {
        let message = self.finish();
        if status == 0 && message.is_empty() {
            Ok(())
        } else {
            Err(NativeError { status, message })
        }
    }
}

impl ErrorSink for ErrorContext<'_> {
    fn put_err(&mut self, status: i32, message: &str) {
        self.report(status, message);
    }
}

impl Drop for ErrorContext<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.channel.end_context();
        }
    }
}
