/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # term-symbols
//!
//! Russell-Saunders (LS coupling) term symbols for an open atomic subshell.
//!
//! Given n, l and the number of electrons in the subshell, the crate counts
//! every Pauli-allowed microstate, decomposes the (M_L, M_S) table into
//! terms, and orders the resulting (2S+1, L, J) levels by Hund's rules.
//!
//! ```
//! use term_symbols::{enumerate_terms, format_terms};
//!
//! let terms = enumerate_terms(2, 1, 2).unwrap();
//! let labels = format_terms(&terms, false).unwrap();
//! assert_eq!(labels, ["3P0", "3P1", "3P2", "1D2", "1S0"]);
//! ```

pub mod cli;
pub mod data;
pub mod terms;
pub mod utils;

pub use terms::{
    enumerate_terms, format_terms, ground_term, spectroscopic_terms, FormatStyle, HalfInteger,
    ShellConfig, Term, TermError, TermOptions, TermOutput,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
