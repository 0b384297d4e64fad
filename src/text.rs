//! Text helpers for keys and report lines crossing the boundary
//!
//! Strings returned to native callers are allocated here and must come
//! back through `rust_free_string`. Rust allocated the memory, so Rust
//! releases it.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_uint};
use std::ptr;

/// Count the Unicode scalar values in a string
///
/// This counts characters, not bytes, so multi-byte UTF-8 sequences
/// count once.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Format one census record as a presentation line
pub fn format_entry(code: &str, count: u32) -> String {
    format!("{} => {}", code, count)
}

/// Count the characters of a UTF-8 C string
///
/// Returns 0 for null input or invalid UTF-8.
///
/// # Safety
///
/// - `s` must be null or a valid null-terminated C string
/// - The memory referenced by `s` must not be modified during this call
#[no_mangle]
pub unsafe extern "C" fn rust_char_count(s: *const c_char) -> c_uint {
    if s.is_null() {
        return 0;
    }

    match CStr::from_ptr(s).to_str() {
        Ok(r_str) => char_count(r_str) as c_uint,
        Err(_) => 0,
    }
}

/// Format one census record as a newly allocated C string
///
/// Returns null for null or invalid input. The returned string is owned
/// by the caller and must be released with `rust_free_string` exactly
/// once.
///
/// # Safety
///
/// - `code` must be null or a valid null-terminated C string
/// - The memory referenced by `code` must not be modified during this
///   call
#[no_mangle]
pub unsafe extern "C" fn rust_format_entry(code: *const c_char, count: c_uint) -> *mut c_char {
    if code.is_null() {
        return ptr::null_mut();
    }

    let code_str = match CStr::from_ptr(code).to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    let line = format_entry(code_str, count);
    CString::new(line)
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Free a string allocated by Rust
///
/// # Safety
///
/// - `s` must be either null or a pointer previously returned from Rust
/// - If non-null, `s` must point to memory allocated by Rust and not
///   already freed
#[no_mangle]
pub unsafe extern "C" fn rust_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}
