//! Integer division two calls deep. Dividing by zero panics inside `foo` and nothing on the way out
//! catches it.

use log::info;

/// Floor division of `a` by `b`, rounding towards negative infinity.
///
/// # Panics
///
/// If `b` is zero, or if the quotient overflows (`i64::MIN / -1`).
// Both functions stay out of line so that each shows up as its own frame in a backtrace.
#[inline(never)]
pub fn foo(a: i64, b: i64) -> i64 {
    let quotient = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}

#[inline(never)]
pub fn bar(a: i64, b: i64) -> i64 {
    info!("Dividing {a} by {b}");
    foo(a, b)
}
