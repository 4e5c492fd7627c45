use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

thread_local! {
    static SNAPSHOT: RefCell<CString> = RefCell::new(CString::default());
}

static EMPTY: &CStr = c"";

/// Copy `text` into this thread's snapshot and return a pointer to it.
///
/// The pointer stays valid until the next call on the same thread. Text
/// after an interior NUL is cut off.
pub fn publish(text: String) -> *const c_char {
    let c_text = match CString::new(text) {
        Ok(c) => c,
        Err(e) => {
            let mut bytes = e.into_vec();
            let nul = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
            bytes.truncate(nul);
            CString::new(bytes).unwrap_or_default()
        }
    };
    SNAPSHOT
        .try_with(|s| {
            let mut s = s.borrow_mut();
            *s = c_text;
            s.as_ptr()
        })
        .unwrap_or_else(|_| empty())
}

pub fn empty() -> *const c_char {
    EMPTY.as_ptr()
}
