/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Output options for term enumeration

use serde::Serialize;

use super::term::Term;

/// Notation used when rendering terms as strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FormatStyle {
    /// e.g. `3P2`, `2P(3/2)`
    #[default]
    Plain,
    /// e.g. `$^{3} P_{2}$`, `$^{2} P_{\frac{3}{2}}$`
    Latex,
}

impl FormatStyle {
    pub fn from_latex_flag(use_latex: bool) -> Self {
        if use_latex {
            FormatStyle::Latex
        } else {
            FormatStyle::Plain
        }
    }

    pub fn is_latex(self) -> bool {
        self == FormatStyle::Latex
    }
}

/// Options for [`spectroscopic_terms`](crate::terms::spectroscopic_terms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermOptions {
    /// Return rendered strings instead of raw triples
    pub formatted: bool,
    /// Notation for rendered strings
    pub style: FormatStyle,
}

impl TermOptions {
    pub fn formatted(style: FormatStyle) -> Self {
        Self {
            formatted: true,
            style,
        }
    }
}

/// Ordered terms, either raw or rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TermOutput {
    Terms(Vec<Term>),
    Formatted(Vec<String>),
}

impl TermOutput {
    pub fn len(&self) -> usize {
        match self {
            TermOutput::Terms(terms) => terms.len(),
            TermOutput::Formatted(strings) => strings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
