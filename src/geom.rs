//! Small value types passed by value across the boundary

use std::os::raw::c_uint;

/// A grid point passed by value between Rust and native callers
///
/// Field order and widths are part of the contract: two unsigned 32-bit
/// fields, `x` first.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub x: c_uint,
    pub y: c_uint,
}

impl From<(u32, u32)> for GridPoint {
    fn from(tup: (u32, u32)) -> GridPoint {
        GridPoint { x: tup.0, y: tup.1 }
    }
}

impl From<GridPoint> for (u32, u32) {
    fn from(point: GridPoint) -> (u32, u32) {
        (point.x, point.y)
    }
}

/// Swap a point's axes, shifting the new coordinates by one
///
/// The result is `(y + 1, x - 1)`; both shifts wrap at the u32 boundary.
pub fn flip(point: GridPoint) -> GridPoint {
    let (x, y): (u32, u32) = point.into();
    (y.wrapping_add(1), x.wrapping_sub(1)).into()
}

/// Swap a point's axes, shifting the new coordinates by one
///
/// The struct is passed and returned by value; the caller keeps its copy.
#[no_mangle]
pub extern "C" fn rust_point_flip(point: GridPoint) -> GridPoint {
    flip(point)
}
