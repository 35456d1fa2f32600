/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Exact half-integer arithmetic for angular momentum quantum numbers
//!
//! Spin projections, total spin and total angular momentum J are all
//! multiples of 1/2. They are stored as doubled integers so comparisons and
//! ranges never go through floating point.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Serialize, Serializer};

/// A multiple of 1/2, stored as twice its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HalfInteger(i32);

impl HalfInteger {
    pub const ZERO: HalfInteger = HalfInteger(0);
    pub const HALF: HalfInteger = HalfInteger(1);

    /// Build from a doubled value, e.g. `from_doubled(3)` is 3/2
    pub const fn from_doubled(doubled: i32) -> Self {
        HalfInteger(doubled)
    }

    /// Build from a whole number
    pub const fn from_integer(value: i32) -> Self {
        HalfInteger(2 * value)
    }

    /// Twice the value
    pub const fn doubled(self) -> i32 {
        self.0
    }

    pub const fn is_integer(self) -> bool {
        self.0 % 2 == 0
    }

    pub const fn abs(self) -> Self {
        HalfInteger(self.0.abs())
    }

    /// Floating-point view, for display and interop only
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Values from `self` to `end` inclusive in steps of one
    ///
    /// Empty when `end < self` or the two differ by a half-integer.
    pub fn range_inclusive(self, end: HalfInteger) -> impl DoubleEndedIterator<Item = HalfInteger> {
        let count = if end.0 >= self.0 && (end.0 - self.0) % 2 == 0 {
            (end.0 - self.0) / 2 + 1
        } else {
            0
        };
        let start = self.0;
        (0..count).map(move |i| HalfInteger(start + 2 * i))
    }
}

impl From<i32> for HalfInteger {
    fn from(value: i32) -> Self {
        HalfInteger::from_integer(value)
    }
}

impl Add for HalfInteger {
    type Output = HalfInteger;

    fn add(self, rhs: HalfInteger) -> HalfInteger {
        HalfInteger(self.0 + rhs.0)
    }
}

impl Sub for HalfInteger {
    type Output = HalfInteger;

    fn sub(self, rhs: HalfInteger) -> HalfInteger {
        HalfInteger(self.0 - rhs.0)
    }
}

impl Neg for HalfInteger {
    type Output = HalfInteger;

    fn neg(self) -> HalfInteger {
        HalfInteger(-self.0)
    }
}

impl std::iter::Sum for HalfInteger {
    fn sum<I: Iterator<Item = HalfInteger>>(iter: I) -> Self {
        iter.fold(HalfInteger::ZERO, Add::add)
    }
}

impl fmt::Display for HalfInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}/2", self.0)
        }
    }
}

// Half-integers are exact in binary floating point
impl Serialize for HalfInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
