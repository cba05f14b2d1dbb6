//! C-callable surface over the example API.
//!
//! Holders cross the boundary as opaque pointers owned by the caller;
//! failures are reported through `bool` results instead of unwinding.

use std::os::raw::c_int;

use crate::core::factor::ExampleHolder;
use crate::core::random::{random_number, BIG_NUMBER};

/// [`BIG_NUMBER`] as a linkable symbol for C callers.
#[no_mangle]
pub static EXAMPLE_BIG_NUMBER: c_int = BIG_NUMBER;

/// Allocates a holder with the given initial example factor.
///
/// The returned pointer must be released with [`example_holder_free`].
#[no_mangle]
pub extern "C" fn example_holder_new(factor: f64) -> *mut ExampleHolder {
    Box::into_raw(Box::new(ExampleHolder::new(factor)))
}

/// Overwrites the example factor stored in `holder`.
///
/// Returns `true` when the factor was updated, `false` when `holder` is null.
///
/// # Safety
///
/// `holder` must be null or a pointer obtained from [`example_holder_new`]
/// that has not been freed.
#[no_mangle]
pub unsafe extern "C" fn example_holder_set_factor(
    holder: *mut ExampleHolder,
    factor: f64,
) -> bool {
    match holder.as_mut() {
        Some(holder) => holder.set_factor(factor).is_ok(),
        None => false,
    }
}

/// Releases a holder allocated by [`example_holder_new`]. Null is a no-op.
///
/// # Safety
///
/// `holder` must be null or a pointer obtained from [`example_holder_new`]
/// that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn example_holder_free(holder: *mut ExampleHolder) {
    if !holder.is_null() {
        drop(Box::from_raw(holder));
    }
}

/// Writes a random integer from `[min, max]` to `out`.
///
/// Returns `false` without touching `out` when the range is inverted or
/// `out` is null.
///
/// # Safety
///
/// `out` must be null or valid for a single `c_int` write.
#[no_mangle]
pub unsafe extern "C" fn example_random_number(min: c_int, max: c_int, out: *mut c_int) -> bool {
    if out.is_null() {
        return false;
    }
    match random_number(min, max) {
        Ok(value) => {
            out.write(value);
            true
        }
        Err(_) => false,
    }
}
