//! Zero-cost conversions between signed and unsigned byte collections.
//!
//! The byte array tag stores `i8` (its elements are signed on the wire),
//! while [`std::io::Read`] and [`std::io::Write`] traffic in `u8`. These
//! functions reinterpret between the two without copying.

use std::mem::ManuallyDrop;

/// Converts a `Vec<u8>` into a `Vec<i8>` without cloning.
#[inline]
pub fn u8_vec_into_i8_vec(vec: Vec<u8>) -> Vec<i8> {
    // SAFETY: u8 and i8 share a layout, and the original vec is not dropped
    // after Vec::from_raw_parts takes ownership of its allocation.
    unsafe {
        let mut vec = ManuallyDrop::new(vec);
        Vec::from_raw_parts(vec.as_mut_ptr() as *mut i8, vec.len(), vec.capacity())
    }
}

/// Converts a `&[i8]` into a `&[u8]`.
#[inline]
pub fn i8_slice_as_u8_slice(slice: &[i8]) -> &[u8] {
    // SAFETY: i8 has the same layout as u8.
    unsafe { std::slice::from_raw_parts(slice.as_ptr() as *const u8, slice.len()) }
}
