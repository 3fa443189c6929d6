//! Plain-text tables for the distance matrix and the edit operations.

use std::fmt::{self, Display};

use crate::edit_script::EditScript;
use crate::matrix::DistanceMatrix;

/// Prints the matrix with the source down the side and the target along the
/// top. The empty prefixes are labelled `-`. All columns share the width of
/// the widest cost or label.
///
/// ```text
///  -  -  w  o  r  l  d
///  -  0  2  4  6  8 10
///  h  2  1  3  5  7  9
/// ```
pub struct MatrixTable<'a, T> {
    pub matrix: &'a DistanceMatrix,
    pub a: &'a [T],
    pub b: &'a [T],
}

impl<'a, T> MatrixTable<'a, T> {
    pub fn new(matrix: &'a DistanceMatrix, a: &'a [T], b: &'a [T]) -> Self {
        MatrixTable { matrix, a, b }
    }
}

impl<T: Display> Display for MatrixTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let la = self.a.iter().map(ToString::to_string).collect::<Vec<_>>();
        let lb = self.b.iter().map(ToString::to_string).collect::<Vec<_>>();
        let w = la
            .iter()
            .chain(&lb)
            .map(|l| l.chars().count())
            .chain([self.matrix.max_cost().to_string().len(), 2])
            .max()
            .unwrap_or(2);

        write!(f, "{:>w$} {:>w$} ", "-", "-")?;
        for l in &lb {
            write!(f, "{l:>w$} ")?;
        }
        writeln!(f)?;

        for (i, row) in self.matrix.iter_rows().enumerate() {
            match i {
                0 => write!(f, "{:>w$} ", "-")?,
                _ => write!(f, "{:>w$} ", la[i - 1])?,
            }
            for cost in row {
                write!(f, "{cost:>w$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Prints one operation per line below a `Type  i  j` header.
pub struct OpsTable<'a>(pub &'a EditScript);

impl Display for OpsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<13} {:>2} {:>2}", "Type", "i", "j")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for op in self.0 {
            writeln!(f, "{:<13} {:>2} {:>2}", op.kind, op.i, op.j)?;
        }
        Ok(())
    }
}
