//! Flat C-linkage boundary for dynamic loading by the host pipeline.
//!
//! The host resolves `isValid` / `isSignificant` by name and reads the i32
//! return as a flag (nonzero = true), so the export names, argument widths
//! and return convention here are frozen. No exported mutable state; both
//! entry points are reentrant from any thread.

use crate::filters;

#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn isValid(price: f32, volume: f32) -> i32 {
    filters::is_valid(price, volume) as i32
}

#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn isSignificant(current: f32, last: f32, threshold_percent: f32) -> i32 {
    filters::is_significant(current, last, threshold_percent) as i32
}
