use crate::buffer::ErrorBuffer;

/// Receiver for error reports coming out of a native library.
///
/// Implementations are single-threaded; a sink is handed to the code
/// running one native call sequence and is not shared.
pub trait ErrorSink {
    /// Deliver one error message. `message` should not contain the
    /// separator character.
    fn put_err(&mut self, status: i32, message: &str);
}

impl ErrorSink for ErrorBuffer {
    fn put_err(&mut self, status: i32, message: &str) {
        self.append(message, status);
    }
}

impl ErrorSink for Vec<String> {
    fn put_err(&mut self, _status: i32, message: &str) {
        self.push(message.to_string());
    }
}
