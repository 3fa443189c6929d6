//! The Wagner–Fischer distance matrix.
//!
//! Cell `(i, j)` holds the minimal cost of transforming `a[..i]` into `b[..j]`.
//! The full matrix is kept, since the traceback needs all of it.

use std::cmp::min;
use std::ops::Index;

use serde::Serialize;

use crate::cost_model::{Cost, CostModel};
use crate::error::{Error, Result};

/// A cell `(i, j)` of the matrix: `i` indexes the source, `j` the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Pos(pub usize, pub usize);

/// The fully populated `(|a|+1) x (|b|+1)` cost matrix, stored row-major.
///
/// Immutable once built. It remembers the cost model and the sequence lengths
/// it was built for, so that a traceback can check it is given matching
/// inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    len_a: usize,
    len_b: usize,
    cm: CostModel,
    cells: Vec<Cost>,
}

/// Validate the costs and build the matrix for `a` and `b`.
pub fn build<T: Eq>(a: &[T], b: &[T], (ins, del, sub): (Cost, Cost, Cost)) -> Result<DistanceMatrix> {
    let cm = CostModel::new(ins, del, sub)?;
    DistanceMatrix::build(a, b, &cm)
}

/// An upper bound on every cell, and on every parent cost compared against
/// a cell, or `None` when it does not fit in a `Cost`.
///
/// Cell `(i, j)` is at most `i * del + j * ins`, and a parent adds at most
/// one more operation.
fn cost_bound(len_a: usize, len_b: usize, cm: &CostModel) -> Option<Cost> {
    let len_a = Cost::try_from(len_a).ok()?;
    let len_b = Cost::try_from(len_b).ok()?;
    let max_op = cm.ins().max(cm.del()).max(cm.sub());
    len_a
        .checked_mul(cm.del())?
        .checked_add(len_b.checked_mul(cm.ins())?)?
        .checked_add(max_op)
}

impl DistanceMatrix {
    /// Fill the matrix row by row.
    ///
    /// Each cell only depends on the cells above, left, and diagonally
    /// above-left of it.
    ///
    /// Returns `Error::CostOverflow` when the costs are too large for the
    /// sequence lengths.
    pub fn build<T: Eq>(a: &[T], b: &[T], cm: &CostModel) -> Result<DistanceMatrix> {
        if cost_bound(a.len(), b.len(), cm).is_none() {
            return Err(Error::CostOverflow {
                len_a: a.len(),
                len_b: b.len(),
            });
        }

        let cols = b.len() + 1;
        let mut cells = vec![0; (a.len() + 1) * cols];

        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j as Cost * cm.ins();
        }

        for (i, ca) in a.iter().enumerate() {
            // `prev` is row `i`, `cur` is row `i+1`.
            let (prev, cur) = cells[i * cols..(i + 2) * cols].split_at_mut(cols);
            cur[0] = prev[0] + cm.del();
            for (j, cb) in b.iter().enumerate() {
                cur[j + 1] = min(
                    min(prev[j + 1] + cm.del(), cur[j] + cm.ins()),
                    prev[j] + cm.diagonal(ca, cb),
                );
            }
        }

        log::debug!(
            "Built {}x{} distance matrix, distance {}",
            a.len() + 1,
            cols,
            cells[cells.len() - 1]
        );

        Ok(DistanceMatrix {
            len_a: a.len(),
            len_b: b.len(),
            cm: *cm,
            cells,
        })
    }

    /// The edit distance: the value of the bottom-right cell.
    pub fn distance(&self) -> Cost {
        self[Pos(self.len_a, self.len_b)]
    }

    /// Length of the source sequence.
    pub fn len_a(&self) -> usize {
        self.len_a
    }
    /// Length of the target sequence.
    pub fn len_b(&self) -> usize {
        self.len_b
    }
    pub fn rows(&self) -> usize {
        self.len_a + 1
    }
    pub fn cols(&self) -> usize {
        self.len_b + 1
    }
    pub fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    /// The cell at `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<Cost> {
        if i <= self.len_a && j <= self.len_b {
            Some(self.cells[i * self.cols() + j])
        } else {
            None
        }
    }

    /// Row `i` of the matrix, corresponding to the source prefix `a[..i]`.
    pub fn row(&self, i: usize) -> &[Cost] {
        let cols = self.cols();
        &self.cells[i * cols..(i + 1) * cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cost]> {
        self.cells.chunks(self.cols())
    }

    /// The largest value in the matrix.
    pub fn max_cost(&self) -> Cost {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl Index<Pos> for DistanceMatrix {
    type Output = Cost;

    fn index(&self, Pos(i, j): Pos) -> &Cost {
        assert!(
            i <= self.len_a && j <= self.len_b,
            "{:?} out of bounds for a {}x{} matrix",
            Pos(i, j),
            self.rows(),
            self.cols()
        );
        &self.cells[i * self.cols() + j]
    }
}
