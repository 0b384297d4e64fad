/* FFI bindings for the natively-compiled sorting routine */

// Re-export libc types for convenience
pub use libc::{c_char, c_int};

#[link(name = "sorting", kind = "static")]
extern "C" {
    /// Sort `numbers` in descending order
    /// This is defined in c_src/sorting.c
    pub fn interop_sort(numbers: *mut c_int, size: usize);
}
