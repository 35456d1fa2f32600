/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Static spectroscopic tables
//!
//! Orbital-letter labels for total orbital angular momentum and the electron
//! capacity of each subshell. These are plain constant tables; nothing here
//! is computed at runtime.

/// Upper-case labels for total orbital angular momentum L = 0, 1, 2, ...
///
/// Follows spectroscopic convention: S, P, D, F, then alphabetical from G
/// skipping J (and the already used P and S).
pub const ORBITAL_LETTERS: [&str; 21] = [
    "S", "P", "D", "F", "G", "H", "I", "K", "L", "M", "N", "O", "Q", "R", "T", "U", "V", "W",
    "X", "Y", "Z",
];

/// Lower-case subshell letters for a single electron's l = 0..=6
pub const SUBSHELL_LETTERS: [char; 7] = ['s', 'p', 'd', 'f', 'g', 'h', 'i'];

/// Electron capacity 2(2l+1) of each supported subshell, indexed by l
pub const SUBSHELL_CAPACITY: [u32; 7] = [2, 6, 10, 14, 18, 22, 26];

/// Label for total orbital angular momentum `l`, if the table has one
pub fn orbital_letter(l: u32) -> Option<&'static str> {
    ORBITAL_LETTERS.get(l as usize).copied()
}

/// Capacity of the subshell with angular momentum `l`
pub fn subshell_capacity(l: u32) -> Option<u32> {
    SUBSHELL_CAPACITY.get(l as usize).copied()
}

/// Angular momentum quantum number for a lower-case subshell letter
pub fn subshell_l(letter: char) -> Option<u32> {
    SUBSHELL_LETTERS
        .iter()
        .position(|&c| c == letter)
        .map(|l| l as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbital_letters() {
        assert_eq!(orbital_letter(0), Some("S"));
        assert_eq!(orbital_letter(3), Some("F"));
        assert_eq!(orbital_letter(7), Some("K")); // J is skipped
        assert_eq!(orbital_letter(12), Some("Q")); // P is not reused
        assert_eq!(orbital_letter(21), None);
    }

    #[test]
    fn test_capacity_matches_formula() {
        for (l, &capacity) in SUBSHELL_CAPACITY.iter().enumerate() {
            assert_eq!(capacity, 2 * (2 * l as u32 + 1));
        }
        assert_eq!(subshell_capacity(7), None);
    }

    #[test]
    fn test_subshell_letter_lookup() {
        assert_eq!(subshell_l('s'), Some(0));
        assert_eq!(subshell_l('f'), Some(3));
        assert_eq!(subshell_l('j'), None);
    }
}
