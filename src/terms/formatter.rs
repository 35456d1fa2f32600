/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Rendering of term symbols in plain or LaTeX notation

use super::config::FormatStyle;
use super::errors::{Result, TermError};
use super::term::Term;
use crate::data::orbital_letter;

/// Render a single term
///
/// Half-integer J is written as a fraction over 2.
///
/// | J     | Plain     | Latex                         |
/// |-------|-----------|-------------------------------|
/// | 3/2   | `2P(3/2)` | `$^{2} P_{\frac{3}{2}}$`      |
/// | 2     | `3P2`     | `$^{3} P_{2}$`                |
pub fn format_term(term: &Term, style: FormatStyle) -> Result<String> {
    let letter = orbital_letter(term.l).ok_or(TermError::LookupFailure(term.l))?;
    let multiplicity = term.multiplicity;

    let rendered = if term.j.is_integer() {
        let j = term.j.doubled() / 2;
        match style {
            FormatStyle::Latex => format!("$^{{{}}} {}_{{{}}}$", multiplicity, letter, j),
            FormatStyle::Plain => format!("{}{}{}", multiplicity, letter, j),
        }
    } else {
        let j2 = term.j.doubled();
        match style {
            FormatStyle::Latex => format!(
                "$^{{{}}} {}_{{\\frac{{{}}}{{2}}}}$",
                multiplicity, letter, j2
            ),
            FormatStyle::Plain => format!("{}{}({}/2)", multiplicity, letter, j2),
        }
    };

    Ok(rendered)
}

/// Render each term in order, failing on the first unknown L
pub fn format_terms(terms: &[Term], use_latex: bool) -> Result<Vec<String>> {
    let style = FormatStyle::from_latex_flag(use_latex);
    terms.iter().map(|term| format_term(term, style)).collect()
}
