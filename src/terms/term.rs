/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! The term symbol value type

use serde::Serialize;

use super::angular::HalfInteger;
use super::config::FormatStyle;
use super::errors::Result;
use super::formatter::format_term;

/// A spectroscopic term level (2S+1, L, J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    /// Spin multiplicity 2S+1
    pub multiplicity: u32,
    /// Total orbital angular momentum
    pub l: u32,
    /// Total angular momentum
    pub j: HalfInteger,
}

impl Term {
    pub fn new(multiplicity: u32, l: u32, j: HalfInteger) -> Self {
        Self { multiplicity, l, j }
    }

    pub fn j(&self) -> HalfInteger {
        self.j
    }

    /// Total spin S = (multiplicity - 1) / 2
    pub fn spin(&self) -> HalfInteger {
        HalfInteger::from_doubled(self.multiplicity as i32 - 1)
    }

    /// Microstates of the parent LS term, (2S+1)(2L+1)
    ///
    /// Every J level of a term reports the same value.
    pub fn degeneracy(&self) -> u64 {
        u64::from(self.multiplicity) * u64::from(2 * self.l + 1)
    }

    /// Render this term in the given notation
    pub fn label(&self, style: FormatStyle) -> Result<String> {
        format_term(self, style)
    }
}
