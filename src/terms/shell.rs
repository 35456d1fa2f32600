/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Subshell descriptors and single-electron states

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::angular::HalfInteger;
use super::errors::{Result, TermError};
use crate::data::{subshell_capacity, subshell_l, SUBSHELL_LETTERS};
use crate::utils::binomial;

/// Quantum numbers (m_l, m_s) of one electron in a subshell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElectronState {
    pub ml: i32,
    pub ms: HalfInteger,
}

/// A validated subshell configuration n l^k
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShellConfig {
    n: u32,
    l: u32,
    electron_count: u32,
}

impl ShellConfig {
    /// Create a configuration, checking l < n and 0 < electron_count <= 2(2l+1)
    pub fn new(n: u32, l: u32, electron_count: u32) -> Result<Self> {
        if l >= n {
            return Err(TermError::invalid("l", l, format!("must be less than n = {}", n)));
        }
        let capacity = subshell_capacity(l).ok_or_else(|| {
            TermError::invalid("l", l, "no subshell capacity is tabulated for this l")
        })?;
        if electron_count == 0 {
            return Err(TermError::invalid(
                "electron_count",
                electron_count,
                "must be positive",
            ));
        }
        if electron_count > capacity {
            return Err(TermError::invalid(
                "electron_count",
                electron_count,
                format!("must be no more than the subshell capacity {}", capacity),
            ));
        }

        Ok(Self {
            n,
            l,
            electron_count,
        })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn electron_count(&self) -> u32 {
        self.electron_count
    }

    /// Number of electrons the subshell can hold, 2(2l+1)
    pub fn capacity(&self) -> u32 {
        2 * (2 * self.l + 1)
    }

    /// Whether J levels are inverted (more than half of the subshell occupied)
    pub fn is_more_than_half_filled(&self) -> bool {
        self.electron_count > self.capacity() / 2
    }

    /// Number of Pauli-allowed microstates, C(capacity, electron_count)
    pub fn microstate_count(&self) -> u64 {
        binomial(u64::from(self.capacity()), u64::from(self.electron_count))
    }

    /// Every (m_l, m_s) state of the subshell, m_l ascending and spin down first
    pub fn electron_states(&self) -> Vec<ElectronState> {
        let l = self.l as i32;
        (-l..=l)
            .flat_map(|ml| {
                [-HalfInteger::HALF, HalfInteger::HALF]
                    .into_iter()
                    .map(move |ms| ElectronState { ml, ms })
            })
            .collect()
    }
}

impl fmt::Display for ShellConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // new() only accepts l with a tabulated capacity, which also has a letter
        let letter = SUBSHELL_LETTERS[self.l as usize];
        write!(f, "{}{}{}", self.n, letter, self.electron_count)
    }
}

impl FromStr for ShellConfig {
    type Err = TermError;

    /// Parse notation such as "2p2", "3d5" or "1s" (one electron when omitted)
    fn from_str(s: &str) -> Result<Self> {
        let notation = s.trim();
        let invalid = || TermError::InvalidNotation(s.to_string());

        let letter_pos = notation
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (n_part, rest) = notation.split_at(letter_pos);
        let mut chars = rest.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let count_part = chars.as_str();

        let n: u32 = n_part.parse().map_err(|_| invalid())?;
        let l = subshell_l(letter.to_ascii_lowercase()).ok_or_else(invalid)?;
        let electron_count: u32 = if count_part.is_empty() {
            1
        } else {
            count_part.parse().map_err(|_| invalid())?
        };

        ShellConfig::new(n, l, electron_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let shell = ShellConfig::new(2, 1, 3).unwrap();
        assert_eq!(shell.capacity(), 6);
        assert_eq!(shell.microstate_count(), 20);
        assert!(!shell.is_more_than_half_filled());
        assert!(ShellConfig::new(2, 1, 4).unwrap().is_more_than_half_filled());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            ShellConfig::new(1, 1, 1),
            Err(TermError::InvalidConfiguration { parameter: "l", .. })
        ));
        assert!(matches!(
            ShellConfig::new(2, 0, 0),
            Err(TermError::InvalidConfiguration { parameter: "electron_count", value: 0, .. })
        ));
        assert!(matches!(
            ShellConfig::new(3, 2, 11),
            Err(TermError::InvalidConfiguration { parameter: "electron_count", value: 11, .. })
        ));
        assert!(ShellConfig::new(9, 7, 1).is_err());
    }

    #[test]
    fn test_electron_states() {
        let shell = ShellConfig::new(2, 1, 1).unwrap();
        let states = shell.electron_states();
        assert_eq!(states.len(), 6);
        assert_eq!(states[0], ElectronState { ml: -1, ms: -HalfInteger::HALF });
        assert_eq!(states[1], ElectronState { ml: -1, ms: HalfInteger::HALF });
        assert_eq!(states[5], ElectronState { ml: 1, ms: HalfInteger::HALF });
    }

    #[test]
    fn test_parse_notation() {
        let shell: ShellConfig = "3d5".parse().unwrap();
        assert_eq!((shell.n(), shell.l(), shell.electron_count()), (3, 2, 5));
        assert_eq!(shell.to_string(), "3d5");

        let single: ShellConfig = "1s".parse().unwrap();
        assert_eq!(single.electron_count(), 1);

        assert!(matches!("p2".parse::<ShellConfig>(), Err(TermError::InvalidNotation(_))));
        assert!(matches!("2x1".parse::<ShellConfig>(), Err(TermError::InvalidNotation(_))));
        assert!(matches!("2p-1".parse::<ShellConfig>(), Err(TermError::InvalidNotation(_))));
        assert!(matches!(
            "1p1".parse::<ShellConfig>(),
            Err(TermError::InvalidConfiguration { .. })
        ));
    }
}
