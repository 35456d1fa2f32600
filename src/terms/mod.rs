/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Russell-Saunders term symbols
//!
//! Enumerates the LS-coupling terms of a single open subshell and renders
//! them in spectroscopic notation.

pub mod angular;
pub mod config;
pub mod enumerator;
pub mod errors;
pub mod formatter;
pub mod microstates;
pub mod reduction;
pub mod shell;
pub mod term;

pub use angular::HalfInteger;
pub use config::{FormatStyle, TermOptions, TermOutput};
pub use enumerator::{enumerate_shell_terms, enumerate_terms, ground_term, spectroscopic_terms};
pub use errors::{Result, TermError};
pub use formatter::{format_term, format_terms};
pub use microstates::{FrequencyTable, Signature};
pub use reduction::LsTerm;
pub use shell::{ElectronState, ShellConfig};
pub use term::Term;
