//! Circular index arithmetic over a sequence of `len` items.
//!
//! A sequence of zero or one item never wraps: `next` and `prev` hand the
//! index back unchanged.

use crate::error::CarouselError;

pub fn next(index: usize, len: usize) -> usize {
    if len <= 1 {
        return index;
    }
    (index + 1) % len
}

pub fn prev(index: usize, len: usize) -> usize {
    if len <= 1 {
        return index;
    }
    (index + len - 1) % len
}

/// Direct "go to slide k" is exact, never wrapped.
pub fn checked_goto(target: usize, len: usize) -> Result<usize, CarouselError> {
    if target >= len {
        return Err(CarouselError::OutOfRange { index: target, len });
    }
    Ok(target)
}
