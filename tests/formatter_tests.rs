/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use term_symbols::terms::{format_term, FormatStyle, HalfInteger, TermError, TermOptions, TermOutput};
use term_symbols::{enumerate_terms, format_terms, spectroscopic_terms, Term};

#[test]
fn test_s1_plain() {
    let terms = enumerate_terms(1, 0, 1).unwrap();
    assert_eq!(format_terms(&terms, false).unwrap(), vec!["2S(1/2)"]);
}

#[test]
fn test_p3_plain_and_latex() {
    let terms = enumerate_terms(2, 1, 3).unwrap();
    let plain = format_terms(&terms, false).unwrap();
    assert_eq!(
        plain,
        vec!["4S(3/2)", "2D(3/2)", "2D(5/2)", "2P(1/2)", "2P(3/2)"]
    );

    let latex = format_terms(&terms, true).unwrap();
    assert_eq!(latex[0], r"$^{4} S_{\frac{3}{2}}$");
    assert_eq!(latex.len(), terms.len());
}

#[test]
fn test_whole_number_latex() {
    let term = Term::new(3, 1, HalfInteger::from_integer(2));
    assert_eq!(format_term(&term, FormatStyle::Latex).unwrap(), r"$^{3} P_{2}$");
}

#[test]
fn test_formatting_preserves_order_and_count() {
    let terms = enumerate_terms(3, 2, 2).unwrap();
    let labels = format_terms(&terms, false).unwrap();
    assert_eq!(labels.len(), terms.len());
    for (term, label) in terms.iter().zip(&labels) {
        assert_eq!(&term.label(FormatStyle::Plain).unwrap(), label);
    }
}

#[test]
fn test_formatting_is_idempotent() {
    let terms = enumerate_terms(4, 3, 3).unwrap();
    let first = format_terms(&terms, true).unwrap();
    let second = format_terms(&terms, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    assert!(format_terms(&[], false).unwrap().is_empty());
}

#[test]
fn test_lookup_failure_for_large_l() {
    let terms = vec![
        Term::new(1, 0, HalfInteger::ZERO),
        Term::new(1, 25, HalfInteger::from_integer(25)),
    ];
    assert_eq!(format_terms(&terms, false), Err(TermError::LookupFailure(25)));
}

#[test]
fn test_formatted_convenience() {
    let options = TermOptions::formatted(FormatStyle::Latex);
    let output = spectroscopic_terms(1, 0, 2, &options).unwrap();
    assert_eq!(output, TermOutput::Formatted(vec![r"$^{1} S_{0}$".to_string()]));
    assert_eq!(output.len(), 1);
}

#[test]
fn test_j_float_view() {
    let terms = enumerate_terms(3, 2, 3).unwrap();
    let ground = terms[0];
    assert_eq!(ground.label(FormatStyle::Plain).unwrap(), "4F(3/2)");
    assert_relative_eq!(ground.j.as_f64(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(ground.spin().as_f64(), 1.5, epsilon = 1e-12);
}
