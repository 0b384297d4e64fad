//! Safe wrapper around the natively-compiled sorting routine

use crate::c_bindings::interop_sort;

/// Sort a slice in descending order using the linked C routine
///
/// The empty slice is a no-op that never crosses the boundary.
pub fn sort_descending(values: &mut [i32]) {
    if values.is_empty() {
        return;
    }

    unsafe {
        interop_sort(values.as_mut_ptr(), values.len());
    }
}
