//! Weighted Levenshtein distance with a deterministic traceback.
//!
//! ```
//! use levenshtein_aligner::{CostModel, Levenshtein};
//!
//! let cm = CostModel::new(2, 2, 1).unwrap();
//! let l = Levenshtein::new(b"hello", b"world", cm).unwrap();
//! assert_eq!(l.distance(), 4);
//! assert_eq!(l.edit_ops().to_cigar(), "3X1M1X");
//! ```

pub mod cli;
pub mod cost_model;
pub mod edit_script;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod print;

#[cfg(test)]
mod tests;

pub use cost_model::{Cost, CostModel};
pub use edit_script::{reconstruct, EditOp, EditOpKind, EditScript};
pub use error::{Error, Result};
pub use matrix::{build, DistanceMatrix, Pos};
pub use print::{MatrixTable, OpsTable};

/// Byte sequences, as used by the command line tool.
pub type Seq<'a> = &'a [u8];
pub type Sequence = Vec<u8>;

/// A distance computation between a fixed source and target.
///
/// The matrix is built once on construction and reused by `distance` and
/// `edit_ops`. Construction fails with `Error::CostOverflow` when the costs are
/// too large for the sequence lengths.
#[derive(Clone, Debug)]
pub struct Levenshtein<'s, T> {
    a: &'s [T],
    b: &'s [T],
    cm: CostModel,
    matrix: DistanceMatrix,
}

impl<'s, T: Eq> Levenshtein<'s, T> {
    pub fn new(a: &'s [T], b: &'s [T], cm: CostModel) -> Result<Self> {
        let matrix = DistanceMatrix::build(a, b, &cm)?;
        Ok(Levenshtein { a, b, cm, matrix })
    }

    /// Unit costs for all operations.
    pub fn unit(a: &'s [T], b: &'s [T]) -> Result<Self> {
        Self::new(a, b, CostModel::unit())
    }

    /// Costs given in the order `(insertion, deletion, substitution)`.
    pub fn with_costs(a: &'s [T], b: &'s [T], (ins, del, sub): (Cost, Cost, Cost)) -> Result<Self> {
        Self::new(a, b, CostModel::new(ins, del, sub)?)
    }

    pub fn distance(&self) -> Cost {
        self.matrix.distance()
    }

    /// The operations transforming the source into the target.
    pub fn edit_ops(&self) -> EditScript {
        // The matrix was built from exactly these inputs.
        reconstruct(&self.matrix, self.a, self.b, &self.cm)
            .unwrap_or_else(|err| unreachable!("{err}"))
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    pub fn source(&self) -> &'s [T] {
        self.a
    }

    pub fn target(&self) -> &'s [T] {
        self.b
    }
}

impl<'s, T: Eq + std::fmt::Display> Levenshtein<'s, T> {
    /// The matrix labelled by the symbols of both sequences.
    pub fn matrix_table(&self) -> MatrixTable<'_, T> {
        MatrixTable::new(&self.matrix, self.a, self.b)
    }
}
