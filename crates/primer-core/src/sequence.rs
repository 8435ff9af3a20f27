//! # Unbounded Producer
//!
//! `Naturals` is the head of every sequence pipeline in this crate: an
//! ascending run of `u64` values that yields on demand and never allocates.
//!
//! It is "unbounded" in the logical sense only. At `u64::MAX` the producer
//! yields that value once more and is then exhausted for good, which makes it
//! a `FusedIterator` and keeps the counter from wrapping back to zero.
//!
//! ## Usage
//!
//! ```rust
//! use primer_core::sequence::Naturals;
//!
//! let odd: Vec<u64> = Naturals::starting_at(1).filter(|n| n % 2 == 1).take(3).collect();
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

use std::iter::FusedIterator;

/// An ascending, lazily produced run of natural numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naturals {
    /// The next value to yield, or `None` once `u64::MAX` has been yielded.
    next: Option<u64>,
}

impl Naturals {
    /// Create a producer whose first value is `start`.
    #[must_use]
    pub const fn starting_at(start: u64) -> Self {
        Self { next: Some(start) }
    }

    /// The value the next call to `next()` will yield, without advancing.
    #[must_use]
    pub const fn peek_next(&self) -> Option<u64> {
        self.next
    }

    /// Whether the producer has run past `u64::MAX`.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for Naturals {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(next) = self.next else {
            return (0, Some(0));
        };
        // Up to 2^64 values remain, which only fits in u128.
        let remaining = u128::from(u64::MAX - next) + 1;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Naturals {}

// =============================================================================
// TESTS
// =============================================================================
