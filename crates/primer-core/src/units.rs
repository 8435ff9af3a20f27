//! # Strong-Typed Units
//!
//! Distinct wrappers around `f64` so distances, durations and speeds cannot be
//! mixed by accident. Each type exposes only the operations meaningful for its
//! unit:
//!
//! - `Meters + Meters`, `Meters - Meters`
//! - `Seconds + Seconds`, `Seconds - Seconds`
//! - `Meters / Seconds -> MetersPerSecond`
//!
//! Comparison is only defined within a unit, so mixing units does not compile:
//!
//! ```compile_fail
//! use primer_core::{Meters, Seconds};
//!
//! let _ = Meters::new(1.0) < Seconds::new(2.0);
//! ```
//!
//! ```rust
//! use primer_core::Meters;
//!
//! assert!(Meters::new(1.0) < Meters::new(2.0));
//! ```
//!
//! ```rust
//! use primer_core::{Meters, MetersPerSecond, Seconds};
//!
//! let speed = Meters::new(42.0) / Seconds::new(6.0);
//! assert_eq!(speed, MetersPerSecond::new(7.0));
//! ```

use crate::PrimerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Sub};

// =============================================================================
// UNIT DEFINITIONS
// =============================================================================

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Wrap a raw value.
            #[must_use]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// The raw value.
            #[must_use]
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $suffix)
            }
        }
    };
}

unit!(
    /// A distance in meters.
    Meters,
    "m"
);

unit!(
    /// A duration in seconds.
    Seconds,
    "s"
);

unit!(
    /// A speed in meters per second.
    MetersPerSecond,
    "m/s"
);

// =============================================================================
// SAME-UNIT ARITHMETIC
// =============================================================================

macro_rules! additive {
    ($name:ident) => {
        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }
    };
}

additive!(Meters);
additive!(Seconds);

// =============================================================================
// DERIVED UNITS
// =============================================================================

impl Div<Seconds> for Meters {
    type Output = MetersPerSecond;

    fn div(self, rhs: Seconds) -> MetersPerSecond {
        MetersPerSecond(self.0 / rhs.0)
    }
}

impl MetersPerSecond {
    /// Compute a speed, rejecting inputs that would not yield a finite one.
    ///
    /// Unlike the `/` operator, which follows IEEE semantics, this refuses
    /// non-finite inputs and durations that are zero or negative.
    pub fn checked_from(distance: Meters, duration: Seconds) -> Result<Self, PrimerError> {
        if !distance.0.is_finite() {
            return Err(PrimerError::InvalidQuantity(format!(
                "distance must be finite, got {}",
                distance.0
            )));
        }
        if !duration.0.is_finite() || duration.0 <= 0.0 {
            return Err(PrimerError::InvalidQuantity(format!(
                "duration must be positive and finite, got {}",
                duration.0
            )));
        }
        Ok(distance / duration)
    }
}

// =============================================================================
// TESTS
// =============================================================================
