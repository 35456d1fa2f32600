/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Decomposition of a frequency table into LS terms by box subtraction

use log::trace;
use ndarray::Axis;

use super::angular::HalfInteger;
use super::microstates::FrequencyTable;

/// One LS term (before J splitting) extracted from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsTerm {
    /// Total orbital angular momentum
    pub l: u32,
    /// Total spin
    pub s: HalfInteger,
}

impl LsTerm {
    /// Spin multiplicity 2S+1
    pub fn multiplicity(&self) -> u32 {
        (self.s.doubled() + 1) as u32
    }
}

/// Reduce `table` to zero, returning the LS terms in extraction order
///
/// Each pass takes the first nonzero row (lowest M_L). Its |M_L| is L and the
/// largest M_S among its nonzero columns is S. The rectangle of rows with
/// |M_L| <= L over those columns is then subtracted once.
pub fn reduce(mut table: FrequencyTable) -> Vec<LsTerm> {
    let mut terms = Vec::new();

    while let Some(row) = first_nonzero_row(&table) {
        let columns: Vec<bool> = table
            .counts()
            .row(row)
            .iter()
            .map(|&count| count > 0)
            .collect();

        let l = table.ml(row).unsigned_abs();
        let s = columns
            .iter()
            .enumerate()
            .filter(|(_, nonzero)| **nonzero)
            .map(|(col, _)| table.ms(col))
            .max()
            .unwrap_or(HalfInteger::ZERO);

        let ml_values: Vec<i32> = (0..table.counts().nrows()).map(|r| table.ml(r)).collect();
        for (mut cells, ml) in table
            .counts_mut()
            .axis_iter_mut(Axis(0))
            .zip(ml_values)
        {
            if ml.unsigned_abs() > l {
                continue;
            }
            for (cell, &selected) in cells.iter_mut().zip(&columns) {
                if selected {
                    *cell -= 1;
                }
            }
        }
        debug_assert!(
            table.counts().iter().all(|&count| count >= 0),
            "box subtraction left a negative count"
        );

        let term = LsTerm { l, s };
        trace!("extracted term 2S+1 = {}, L = {}", term.multiplicity(), l);
        terms.push(term);
    }

    terms
}

fn first_nonzero_row(table: &FrequencyTable) -> Option<usize> {
    table
        .counts()
        .axis_iter(Axis(0))
        .position(|row| row.iter().any(|&count| count > 0))
}
