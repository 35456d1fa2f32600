/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Combinatorics helpers

/// Number of ways to choose `r` items from `n` without repetition.
///
/// Returns 0 when `r > n`. The running product is divided at every step so
/// intermediate values stay exact and small.
///
/// # Arguments
///
/// * `n` - Number of things
/// * `r` - Number of elements taken
pub fn binomial(n: u64, r: u64) -> u64 {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    (1..=r).fold(1u64, |acc, i| acc * (n - r + i) / i)
}
