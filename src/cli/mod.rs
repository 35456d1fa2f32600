/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! `term-symbols 2p2` prints the ordered terms of a subshell, one per line.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use crate::terms::{enumerate_shell_terms, format_terms, FormatStyle, ShellConfig, Term};

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "term-symbols", version, about = "Russell-Saunders term symbols of a subshell")]
pub struct Cli {
    /// Subshell in the form <n><letter><electrons>, e.g. 2p2, 3d5, 1s
    #[arg(value_name = "SUBSHELL")]
    pub subshell: String,

    /// Render terms in LaTeX notation
    #[arg(long)]
    pub latex: bool,

    /// Print raw (2S+1, L, J) triples instead of labels
    #[arg(long, conflicts_with = "latex")]
    pub raw: bool,

    /// Emit a JSON document with both triples and labels
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    subshell: String,
    microstates: u64,
    terms: &'a [Term],
    labels: Vec<String>,
}

/// Compute and render the terms requested by `args`
pub fn run(args: &Cli) -> anyhow::Result<String> {
    let shell: ShellConfig = args
        .subshell
        .parse()
        .with_context(|| format!("could not interpret subshell '{}'", args.subshell))?;
    let terms = enumerate_shell_terms(&shell);
    let style = FormatStyle::from_latex_flag(args.latex);

    if args.json {
        let labels = format_terms(&terms, style.is_latex())?;
        let report = Report {
            subshell: shell.to_string(),
            microstates: shell.microstate_count(),
            terms: &terms,
            labels,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let lines = if args.raw {
        terms
            .iter()
            .map(|t| format!("({}, {}, {})", t.multiplicity, t.l, t.j))
            .collect()
    } else {
        format_terms(&terms, style.is_latex())?
    };

    Ok(lines.join("\n"))
}
