/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for term symbol calculations

use thiserror::Error;

/// Result type for term symbol operations
pub type Result<T> = std::result::Result<T, TermError>;

/// Error type for term enumeration and formatting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// Shell parameters violate a precondition
    #[error("Invalid configuration: {parameter} = {value} ({constraint})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: u32,
        constraint: String,
    },

    /// No orbital letter is tabulated for this L
    #[error("No orbital letter for L = {0}")]
    LookupFailure(u32),

    /// Subshell notation such as "2p3" could not be parsed
    #[error("Invalid subshell notation: {0}")]
    InvalidNotation(String),
}

impl TermError {
    pub(crate) fn invalid(parameter: &'static str, value: u32, constraint: impl Into<String>) -> Self {
        TermError::InvalidConfiguration {
            parameter,
            value,
            constraint: constraint.into(),
        }
    }
}
