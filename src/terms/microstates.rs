/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Microstate enumeration and the (M_L, M_S) frequency table

use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use ndarray::Array2;

use super::angular::HalfInteger;
use super::shell::ShellConfig;

/// Total projections (M_L, M_S) shared by one or more microstates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    pub ml: i32,
    pub ms: HalfInteger,
}

/// Dense grid of microstate counts
///
/// Rows run over M_L from `ml_min` upwards in unit steps, columns over M_S
/// from `ms_min` upwards in unit steps. Cells with no microstate hold 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    counts: Array2<i64>,
    ml_min: i32,
    ms_min: HalfInteger,
}

impl FrequencyTable {
    /// Count every Pauli-allowed microstate of `shell` by its signature
    pub fn from_shell(shell: &ShellConfig) -> Self {
        let states = shell.electron_states();
        let mut occurrences: HashMap<Signature, i64> = HashMap::new();

        for combination in states
            .iter()
            .combinations(shell.electron_count() as usize)
        {
            let signature = Signature {
                ml: combination.iter().map(|state| state.ml).sum(),
                ms: combination.iter().map(|state| state.ms).sum(),
            };
            *occurrences.entry(signature).or_insert(0) += 1;
        }

        let table = Self::from_occurrences(&occurrences);
        debug!(
            "{}: {} microstates over a {}x{} (M_L, M_S) grid",
            shell,
            table.total(),
            table.counts.nrows(),
            table.counts.ncols()
        );
        table
    }

    /// Materialise a sparse signature count as a dense grid
    ///
    /// An empty map yields an empty grid.
    pub fn from_occurrences(occurrences: &HashMap<Signature, i64>) -> Self {
        let (ml_min, ml_max) = min_max(occurrences.keys().map(|s| s.ml)).unwrap_or((0, -1));
        let (ms_min, ms_max) = min_max(occurrences.keys().map(|s| s.ms.doubled())).unwrap_or((0, -2));

        let rows = (ml_max - ml_min + 1) as usize;
        let cols = ((ms_max - ms_min) / 2 + 1) as usize;
        let mut counts = Array2::<i64>::zeros((rows, cols));

        let ms_min = HalfInteger::from_doubled(ms_min);
        for (signature, &count) in occurrences {
            let row = (signature.ml - ml_min) as usize;
            let col = ((signature.ms - ms_min).doubled() / 2) as usize;
            counts[[row, col]] += count;
        }

        Self {
            counts,
            ml_min,
            ms_min,
        }
    }

    /// Counts indexed by (row, column)
    pub fn counts(&self) -> &Array2<i64> {
        &self.counts
    }

    pub(crate) fn counts_mut(&mut self) -> &mut Array2<i64> {
        &mut self.counts
    }

    /// M_L value of a row
    pub fn ml(&self, row: usize) -> i32 {
        self.ml_min + row as i32
    }

    /// M_S value of a column
    pub fn ms(&self, col: usize) -> HalfInteger {
        self.ms_min + HalfInteger::from_integer(col as i32)
    }

    /// Count for a signature, 0 outside the grid
    pub fn get(&self, ml: i32, ms: HalfInteger) -> i64 {
        let row = ml - self.ml_min;
        let col = (ms - self.ms_min).doubled();
        if row < 0 || col < 0 || col % 2 != 0 {
            return 0;
        }
        self.counts
            .get([row as usize, (col / 2) as usize])
            .copied()
            .unwrap_or(0)
    }

    /// Sum over all cells
    pub fn total(&self) -> i64 {
        self.counts.sum()
    }

    /// Whether every cell has been reduced to zero
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

fn min_max(values: impl Iterator<Item = i32>) -> Option<(i32, i32)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
