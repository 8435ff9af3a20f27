//! # Variadic Aggregation
//!
//! `sum!` folds any number of arguments with `+`.
//!
//! Two forms:
//! - `sum!(a, b, c)` when every argument already has the same type
//! - `sum!(T; a, b, c)` to convert each argument into `T` (via `From`) first,
//!   so mixed inputs such as `1`, `2.5` and `3u32` land in a common type
//!
//! ```rust
//! use primer_core::sum;
//!
//! assert_eq!(sum!(1, 2, 3), 6);
//! assert_eq!(sum!(f64; 1, 2.5, 3u32), 6.5);
//! assert_eq!(sum!(f64;), 0.0);
//! ```

use std::iter::Sum;

/// Sum a variadic list of values, optionally converting them into a common type.
#[macro_export]
macro_rules! sum {
    ($target:ty; $($value:expr),* $(,)?) => {
        <$target as ::core::default::Default>::default()
            $(+ <$target as ::core::convert::From<_>>::from($value))*
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first $(+ $rest)*
    };
}

/// Runtime counterpart of `sum!` for an arbitrary number of values.
pub fn sum_all<T, I>(values: I) -> T
where
    T: Sum<T>,
    I: IntoIterator<Item = T>,
{
    values.into_iter().sum()
}
