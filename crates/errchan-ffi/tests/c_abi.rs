use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::thread;

use errchan_ffi::*;

fn init() {
    assert_eq!(ec_err_init(), ECStatus::Ok);
}

fn get() -> String {
    let p = ec_get_err_msg();
    assert!(!p.is_null());
    unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string()
}

fn put(status: i32, message: &str) {
    let c = CString::new(message).unwrap();
    unsafe { ec_put_err(status, c.as_ptr()) };
}

#[test]
fn test_put_and_get() {
    init();
    ec_clear_err_msg();
    put(1, "bad value");
    put(2, "out of range");
    assert_eq!(get(), "bad value\nout of range");
}

#[test]
fn test_clear_then_get() {
    init();
    put(1, "stale");
    ec_clear_err_msg();
    assert_eq!(get(), "");
}

#[test]
fn test_get_is_idempotent() {
    init();
    ec_clear_err_msg();
    put(7, "same");
    assert_eq!(get(), "same");
    assert_eq!(get(), "same");
}

#[test]
fn test_null_message_ignored() {
    init();
    ec_clear_err_msg();
    put(1, "kept");
    unsafe { ec_put_err(2, std::ptr::null::<c_char>()) };
    assert_eq!(get(), "kept");
}

#[test]
fn test_overflow_dropped_silently() {
    init();
    ec_clear_err_msg();
    let long = "e".repeat(1020);
    put(1, &long);
    put(2, "tail");
    assert_eq!(get(), long);
}

#[test]
fn test_non_utf8_replaced() {
    init();
    ec_clear_err_msg();
    let raw = CStr::from_bytes_with_nul(b"bad\xff\0").unwrap();
    unsafe { ec_put_err(1, raw.as_ptr()) };
    assert_eq!(get(), "bad\u{FFFD}");
}

#[test]
fn test_replacement_chars_count_toward_capacity() {
    init();
    ec_clear_err_msg();
    // 1020 raw bytes fit in 1023, but each 0xff becomes a 3-byte U+FFFD
    let mut bytes = vec![b'a'; 1018];
    bytes.extend_from_slice(&[0xff, 0xff]);
    let raw = CString::new(bytes).unwrap();
    unsafe { ec_put_err(1, raw.as_ptr()) };
    assert_eq!(get(), "");

    put(2, "short");
    assert_eq!(get(), "");

    ec_clear_err_msg();
    put(3, "short");
    assert_eq!(get(), "short");
}

#[test]
fn test_hook_delivers_to_buffer() {
    init();
    ec_clear_err_msg();
    let hook = ec_put_err_hook().unwrap();
    let c = CString::new("via hook").unwrap();
    unsafe { hook(4, c.as_ptr()) };
    assert_eq!(get(), "via hook");
}

#[test]
fn test_threads_see_own_messages() {
    init();
    ec_clear_err_msg();
    put(1, "main");
    let worker = thread::spawn(|| {
        ec_clear_err_msg();
        put(1, "worker");
        get()
    })
    .join()
    .unwrap();
    assert_eq!(worker, "worker");
    assert_eq!(get(), "main");
}

#[test]
fn test_reinit_status_codes() {
    init();
    assert_eq!(ec_err_init(), ECStatus::Ok);
    assert_eq!(ec_err_init_with_capacity(1024), ECStatus::Ok);
    assert_eq!(ec_err_init_with_capacity(64), ECStatus::ErrorAlreadyInitialized);
    assert_eq!(ec_err_init_with_capacity(1), ECStatus::ErrorInvalidArgument);
    assert_ne!(ECStatus::ErrorAlreadyInitialized as i32, 0);
}

#[test]
fn test_init_logging_twice() {
    ec_init_logging();
    ec_init_logging();
}
