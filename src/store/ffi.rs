// FFI bindings for the census store
// Provides a C-compatible interface around an opaque store handle

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uint};
use std::path::PathBuf;

use super::census::CensusStore;

/// Convert C string to String
unsafe fn cstr_to_string(c_str: *const c_char) -> Option<String> {
    if c_str.is_null() {
        return None;
    }

    CStr::from_ptr(c_str).to_str().ok().map(String::from)
}

/// Convert C string to PathBuf
unsafe fn cstr_to_path(c_str: *const c_char) -> Option<PathBuf> {
    if c_str.is_null() {
        return None;
    }

    CStr::from_ptr(c_str).to_str().ok().map(PathBuf::from)
}

/// Create a new, empty census store
///
/// Returns an opaque handle owned by the caller. The handle must be
/// released with `rust_census_free` exactly once; every other function
/// here borrows it. The internal layout of the store is not part of the
/// contract.
#[no_mangle]
pub extern "C" fn rust_census_new() -> *mut CensusStore {
    Box::into_raw(Box::new(CensusStore::new()))
}

/// Destroy a census store and release all records it owns
///
/// The handle is consumed and must not be used again. Passing null is a
/// no-op.
///
/// # Safety
///
/// `ptr` must be null or a handle from `rust_census_new` that has not
/// already been freed.
#[no_mangle]
pub unsafe extern "C" fn rust_census_free(ptr: *mut CensusStore) {
    if !ptr.is_null() {
        let _ = Box::from_raw(ptr);
    }
}

/// Apply the fixed seed batch to the store
///
/// Repeated calls are idempotent: seed records overwrite themselves.
///
/// # Safety
///
/// `ptr` must be null or a live handle from `rust_census_new`.
#[no_mangle]
pub unsafe extern "C" fn rust_census_populate(ptr: *mut CensusStore) {
    if ptr.is_null() {
        return;
    }

    (*ptr).populate();
}

/// Insert one record, overwriting any existing count for the code
///
/// Returns 1 on success, 0 if the handle or code is null/invalid.
///
/// # Safety
///
/// `ptr` must be null or a live handle from `rust_census_new`. `code`
/// must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rust_census_insert(
    ptr: *mut CensusStore,
    code: *const c_char,
    count: c_uint,
) -> c_int {
    if ptr.is_null() {
        return 0;
    }

    match cstr_to_string(code) {
        Some(code_str) if !code_str.is_empty() => {
            (*ptr).insert(code_str, count);
            1
        }
        _ => 0,
    }
}

/// Look up a population count by postal code
///
/// Returns 0 when the code is absent; a miss is a normal outcome, not an
/// error. A null handle or an invalid key also yields 0.
///
/// # Safety
///
/// `ptr` must be null or a live handle from `rust_census_new`. `code`
/// must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rust_census_query(
    ptr: *const CensusStore,
    code: *const c_char,
) -> c_uint {
    if ptr.is_null() {
        return 0;
    }

    match cstr_to_string(code) {
        Some(code_str) => (*ptr).count(&code_str),
        None => 0,
    }
}

/// Check if a code is present in the store
///
/// Returns 1 if present, 0 otherwise.
///
/// # Safety
///
/// `ptr` must be null or a live handle from `rust_census_new`. `code`
/// must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rust_census_contains(
    ptr: *const CensusStore,
    code: *const c_char,
) -> c_int {
    if ptr.is_null() {
        return 0;
    }

    match cstr_to_string(code) {
        Some(code_str) => {
            if (*ptr).contains(&code_str) {
                1
            } else {
                0
            }
        }
        None => 0,
    }
}

/// Number of records in the store
///
/// # Safety
///
/// `ptr` must be null or a live handle from `rust_census_new`.
#[no_mangle]
pub unsafe extern "C" fn rust_census_len(ptr: *const CensusStore) -> usize {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).len()
}

/// Merge records parsed from a `code = count` file into the store
///
/// Records from the file overwrite existing records with the same code.
/// Returns 1 on success, 0 on null input, unreadable file, or malformed
/// records.
///
/// # Safety
///
/// `ptr` must be null or a live handle from `rust_census_new`. `path`
/// must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rust_census_load(
    ptr: *mut CensusStore,
    path: *const c_char,
) -> c_int {
    if ptr.is_null() {
        return 0;
    }

    match cstr_to_path(path) {
        Some(path_buf) => match CensusStore::from_file(&path_buf) {
            Ok(batch) => {
                (*ptr).merge(batch);
                1
            }
            Err(e) => {
                log::warn!("failed to load records from {}: {}", path_buf.display(), e);
                0
            }
        },
        None => 0,
    }
}
