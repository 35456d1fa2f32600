/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Term enumeration for a subshell configuration
//!
//! The pipeline is: count microstates by (M_L, M_S), reduce the resulting
//! grid into LS terms, split each term into its J levels, then rank the
//! levels by Hund's rules.
//!
//! J ordering within a term follows shell filling only: ascending when the
//! subshell is at most half full, descending otherwise. This is the usual
//! textbook approximation of Hund's third rule.

use log::debug;

use super::angular::HalfInteger;
use super::config::{TermOptions, TermOutput};
use super::errors::Result;
use super::formatter::format_terms;
use super::microstates::FrequencyTable;
use super::reduction::{reduce, LsTerm};
use super::shell::ShellConfig;
use super::term::Term;

/// Ordered term levels of the subshell n l^electron_count
///
/// # Arguments
///
/// * `n` - Principal quantum number
/// * `l` - Orbital angular momentum of the subshell, must be less than `n`
/// * `electron_count` - Electrons in the subshell, 1 to 2(2l+1)
///
/// # Returns
///
/// Terms sorted by descending multiplicity, then descending L. J levels of
/// one term stay adjacent in their Hund's-rule order.
pub fn enumerate_terms(n: u32, l: u32, electron_count: u32) -> Result<Vec<Term>> {
    let shell = ShellConfig::new(n, l, electron_count)?;
    Ok(enumerate_shell_terms(&shell))
}

/// Ordered term levels of an already validated configuration
pub fn enumerate_shell_terms(shell: &ShellConfig) -> Vec<Term> {
    let table = FrequencyTable::from_shell(shell);
    let ls_terms = reduce(table);
    debug!("{}: {} LS terms", shell, ls_terms.len());

    let inverted = shell.is_more_than_half_filled();
    let mut terms: Vec<Term> = ls_terms
        .iter()
        .flat_map(|ls| split_levels(ls, inverted))
        .collect();

    // Stable, so J order within a term survives
    terms.sort_by(|a, b| (b.multiplicity, b.l).cmp(&(a.multiplicity, a.l)));
    terms
}

/// The J levels |L-S|..=L+S of one LS term
fn split_levels(ls: &LsTerm, inverted: bool) -> Vec<Term> {
    let l = HalfInteger::from_integer(ls.l as i32);
    let j_min = (l - ls.s).abs();
    let j_max = l + ls.s;
    let multiplicity = ls.multiplicity();

    let levels = j_min.range_inclusive(j_max);
    let js: Vec<HalfInteger> = if inverted {
        levels.rev().collect()
    } else {
        levels.collect()
    };

    js.into_iter()
        .map(|j| Term::new(multiplicity, ls.l, j))
        .collect()
}

/// Ground level: the first entry of [`enumerate_terms`]
pub fn ground_term(n: u32, l: u32, electron_count: u32) -> Result<Term> {
    let terms = enumerate_terms(n, l, electron_count)?;
    // A valid configuration always yields at least one term
    Ok(terms[0])
}

/// Enumerate terms and optionally render them
///
/// With `options.formatted` unset this returns the raw triples, otherwise
/// one string per term in `options.style`.
pub fn spectroscopic_terms(
    n: u32,
    l: u32,
    electron_count: u32,
    options: &TermOptions,
) -> Result<TermOutput> {
    let terms = enumerate_terms(n, l, electron_count)?;
    if options.formatted {
        let strings = format_terms(&terms, options.style.is_latex())?;
        Ok(TermOutput::Formatted(strings))
    } else {
        Ok(TermOutput::Terms(terms))
    }
}
