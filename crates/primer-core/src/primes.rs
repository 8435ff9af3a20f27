//! # Prime Sequences
//!
//! The primality predicate and the lazy pipeline built on top of it.
//!
//! ## Pipeline
//!
//! ```text
//! Naturals::starting_at(2) ──► filter(is_prime) ──► take(count) ──► Vec<u64>
//!       (producer)                 (predicate)         (limiter)
//! ```
//!
//! Each stage pulls from the one before it only when asked. The limiter stops
//! pulling as soon as it has `count` values, so the predicate is never
//! evaluated on a candidate past the last prime returned.
//!
//! Trial division suits bounded, on-demand queries. It is not a sieve.

use crate::limits::FIRST_PRIME;
use crate::sequence::Naturals;

// =============================================================================
// PREDICATE
// =============================================================================

/// Whether `n` is prime.
///
/// Total over all of `u64` and usable in constant evaluation. The loop bound is
/// `d <= n / d` rather than `d * d <= n` so the divisor square never overflows
/// for inputs near `u64::MAX`.
///
/// ```rust
/// use primer_core::is_prime;
///
/// const NINETY_SEVEN: bool = is_prime(97);
/// assert!(NINETY_SEVEN);
/// assert!(!is_prime(100));
/// ```
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

const _: () = assert!(is_prime(97));
const _: () = assert!(!is_prime(100));

// =============================================================================
// LAZY PIPELINE
// =============================================================================

/// The unbounded, lazily evaluated stream of primes in increasing order.
pub fn primes() -> impl Iterator<Item = u64> + Clone {
    Naturals::starting_at(FIRST_PRIME).filter(|&n| is_prime(n))
}

/// The first `count` values from 2 upward that satisfy `predicate`.
///
/// This is the generic form of [`first_n_primes`]. The predicate is called on
/// consecutive candidates starting at 2 and is not called again once `count`
/// matches have been found.
pub fn first_n_matching<P>(count: usize, mut predicate: P) -> Vec<u64>
where
    P: FnMut(u64) -> bool,
{
    let mut out = Vec::with_capacity(count);
    out.extend(
        Naturals::starting_at(FIRST_PRIME)
            .filter(|&n| predicate(n))
            .take(count),
    );
    out
}

/// The first `count` primes, strictly increasing and starting at 2.
///
/// `first_n_primes(0)` is empty. Repeated calls with the same `count` return
/// identical vectors; there is no hidden state.
///
/// ```rust
/// use primer_core::first_n_primes;
///
/// assert_eq!(first_n_primes(5), vec![2, 3, 5, 7, 11]);
/// ```
#[must_use]
pub fn first_n_primes(count: usize) -> Vec<u64> {
    first_n_matching(count, is_prime)
}

/// The zero-based `index`-th prime (`nth_prime(0) == 2`).
///
/// Returns `None` only if the search domain runs out, which cannot happen for
/// any index reachable in practice.
#[must_use]
pub fn nth_prime(index: usize) -> Option<u64> {
    primes().nth(index)
}

/// Lazily square each value.
///
/// Squares are widened to `u128` so no value of `u64` can overflow.
pub fn squares<I>(values: I) -> impl Iterator<Item = u128>
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().map(|x| {
        let wide = u128::from(x);
        wide * wide
    })
}

// =============================================================================
// TESTS
// =============================================================================
