mod logging;
mod snapshot;
mod types;

pub use types::*;

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use errchan_core::{ChannelConfig, ErrorChannel};
use tracing::warn;

/// Execute a closure that returns an `ECStatus`, catching any panics
/// and converting them into `ECStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> ECStatus + std::panic::UnwindSafe>(f: F) -> ECStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => ECStatus::ErrorInternal,
    }
}

fn init(config: ChannelConfig) -> ECStatus {
    match ErrorChannel::init(config) {
        Ok(_) => ECStatus::Ok,
        Err(e) => {
            warn!("error channel init failed: {}", e);
            ECStatus::from(&e)
        }
    }
}

fn channel() -> Option<&'static ErrorChannel> {
    match ErrorChannel::global() {
        Ok(ch) => Some(ch),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Initialize error reporting with the default 1024-byte buffer.
///
/// Must be called once, before the native library can report errors.
/// Returns `ECStatus::Ok` on success and a non-zero status otherwise, in
/// which case the host should not go on to use the library.
#[no_mangle]
pub extern "C" fn ec_err_init() -> ECStatus {
    catch_panic(|| init(ChannelConfig::default()))
}

/// Initialize error reporting with a buffer of `capacity` bytes,
/// terminator included.
#[no_mangle]
pub extern "C" fn ec_err_init_with_capacity(capacity: usize) -> ECStatus {
    catch_panic(|| init(ChannelConfig::with_capacity(capacity)))
}

/// Deliver an error message from the native library.
///
/// The message is appended to the calling thread's buffer, separated from
/// earlier ones by a newline. Messages that no longer fit are silently
/// discarded. `status` is not interpreted. `message` must be null or a
/// NUL-terminated string and should not contain newlines.
#[no_mangle]
pub unsafe extern "C" fn ec_put_err(status: c_int, message: *const c_char) {
    if message.is_null() {
        warn!(status, "null error message ignored");
        return;
    }
    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    let _ = std::panic::catch_unwind(|| {
        if let Some(ch) = channel() {
            ch.append(&message, status);
        }
    });
}

/// Pointer to `ec_put_err`, for registering with the native library.
#[no_mangle]
pub extern "C" fn ec_put_err_hook() -> ECPutErrFn {
    Some(ec_put_err)
}

/// Reset the calling thread's error buffer.
///
/// Call at the start of each sequence of native calls so that no messages
/// from an earlier sequence are left pending.
#[no_mangle]
pub extern "C" fn ec_clear_err_msg() {
    let _ = std::panic::catch_unwind(|| {
        if let Some(ch) = channel() {
            ch.clear();
        }
    });
}

/// Retrieve the messages reported on the calling thread since the last
/// `ec_clear_err_msg`.
///
/// Messages are separated by newlines, with no trailing newline. The
/// returned string is owned by the library and stays valid until the next
/// `ec_get_err_msg` call on the same thread; it must not be freed.
#[no_mangle]
pub extern "C" fn ec_get_err_msg() -> *const c_char {
    std::panic::catch_unwind(|| match channel() {
        Some(ch) => snapshot::publish(ch.read()),
        None => snapshot::empty(),
    })
    .unwrap_or_else(|_| snapshot::empty())
}

/// Install a log subscriber driven by the `RUST_LOG` environment variable.
#[no_mangle]
pub extern "C" fn ec_init_logging() {
    let _ = std::panic::catch_unwind(logging::init_tracing);
}
