//! Traceback through a `DistanceMatrix` into an `EditScript`.

use std::fmt;
use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::cost_model::{Cost, CostModel};
use crate::error::{Error, Result};
use crate::matrix::{DistanceMatrix, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOpKind {
    Match,
    Substitution,
    /// Consumes one symbol of the target only.
    Insertion,
    /// Consumes one symbol of the source only.
    Deletion,
}

impl EditOpKind {
    pub fn name(&self) -> &'static str {
        match self {
            EditOpKind::Match => "Match",
            EditOpKind::Substitution => "Substitution",
            EditOpKind::Insertion => "Insertion",
            EditOpKind::Deletion => "Deletion",
        }
    }

    /// The CIGAR character for this operation.
    pub fn to_char(&self) -> char {
        match self {
            EditOpKind::Match => 'M',
            EditOpKind::Substitution => 'X',
            EditOpKind::Insertion => 'I',
            EditOpKind::Deletion => 'D',
        }
    }

    /// The step this operation makes through the matrix.
    pub fn delta(&self) -> Pos {
        match self {
            EditOpKind::Match | EditOpKind::Substitution => Pos(1, 1),
            EditOpKind::Insertion => Pos(0, 1),
            EditOpKind::Deletion => Pos(1, 0),
        }
    }

    pub fn consumes_source(&self) -> bool {
        self.delta().0 == 1
    }
    pub fn consumes_target(&self) -> bool {
        self.delta().1 == 1
    }

    pub fn cost(&self, cm: &CostModel) -> Cost {
        match self {
            EditOpKind::Match => 0,
            EditOpKind::Substitution => cm.sub(),
            EditOpKind::Insertion => cm.ins(),
            EditOpKind::Deletion => cm.del(),
        }
    }
}

impl fmt::Display for EditOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single edit operation with zero-based indices into source (`i`) and
/// target (`j`).
///
/// - `Match`/`Substitution`: `a[i]` is aligned to `b[j]`.
/// - `Deletion`: `a[i]` is deleted; `j` is the target position just after it.
/// - `Insertion`: `b[j]` is inserted just before source position `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditOp {
    #[serde(rename = "type")]
    pub kind: EditOpKind,
    pub i: usize,
    pub j: usize,
}

impl EditOp {
    pub fn new(kind: EditOpKind, i: usize, j: usize) -> Self {
        EditOp { kind, i, j }
    }
}

/// The ordered list of operations transforming the source into the target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

/// Trace back from `(|a|, |b|)` to `(0, 0)`.
///
/// In each cell the first consistent parent is taken, in the fixed order
/// diagonal, up (deletion), left (insertion). This makes the returned script
/// unique for the given inputs.
///
/// Returns `Error::NotComputed` when `matrix` was not built for `a`, `b`
/// and `cm`. Lengths and costs are always checked. A matrix built from other
/// symbols is only detected when some cell on the traced path has no
/// consistent parent; otherwise a script is returned for the wrong matrix.
pub fn reconstruct<T: Eq>(
    matrix: &DistanceMatrix,
    a: &[T],
    b: &[T],
    cm: &CostModel,
) -> Result<EditScript> {
    let not_computed = Error::NotComputed {
        len_a: a.len(),
        len_b: b.len(),
    };
    if matrix.len_a() != a.len() || matrix.len_b() != b.len() || matrix.cost_model() != cm {
        return Err(not_computed);
    }

    let mut ops = Vec::with_capacity(a.len() + b.len());
    let Pos(mut i, mut j) = Pos(a.len(), b.len());
    while i > 0 || j > 0 {
        let cur = matrix[Pos(i, j)];
        if i > 0 && j > 0 && matrix[Pos(i - 1, j - 1)] + cm.diagonal(&a[i - 1], &b[j - 1]) == cur {
            let kind = if a[i - 1] == b[j - 1] {
                EditOpKind::Match
            } else {
                EditOpKind::Substitution
            };
            i -= 1;
            j -= 1;
            ops.push(EditOp::new(kind, i, j));
        } else if i > 0 && matrix[Pos(i - 1, j)] + cm.del() == cur {
            i -= 1;
            ops.push(EditOp::new(EditOpKind::Deletion, i, j));
        } else if j > 0 && matrix[Pos(i, j - 1)] + cm.ins() == cur {
            j -= 1;
            ops.push(EditOp::new(EditOpKind::Insertion, i, j));
        } else {
            // The matrix was built for different symbols.
            log::trace!("No parent consistent with {cur} at {:?}", Pos(i, j));
            return Err(not_computed);
        }
    }
    ops.reverse();
    log::trace!("Traced {} operations", ops.len());
    Ok(EditScript { ops })
}

impl EditScript {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }

    /// Total cost of the operations under `cm`.
    pub fn cost(&self, cm: &CostModel) -> Cost {
        self.ops.iter().map(|op| op.kind.cost(cm)).sum()
    }

    /// Number of operations of the given kind.
    pub fn count(&self, kind: EditOpKind) -> usize {
        self.ops.iter().filter(|op| op.kind == kind).count()
    }

    /// Run-length encoded operations, e.g. `3M1X2I`.
    pub fn to_cigar(&self) -> String {
        let mut cigar = String::new();
        let mut ops = self.ops.iter().map(|op| op.kind).peekable();
        while let Some(kind) = ops.next() {
            let mut cnt = 1;
            while ops.next_if_eq(&kind).is_some() {
                cnt += 1;
            }
            cigar.push_str(&format!("{cnt}{}", kind.to_char()));
        }
        cigar
    }

    /// The cells visited by the script, from `Pos(0, 0)` to `Pos(|a|, |b|)`.
    pub fn to_path(&self) -> Vec<Pos> {
        let mut pos = Pos(0, 0);
        let mut path = vec![pos];
        for op in &self.ops {
            let Pos(di, dj) = op.kind.delta();
            pos = Pos(pos.0 + di, pos.1 + dj);
            path.push(pos);
        }
        path
    }

    /// Check that the script is a valid alignment of `a` and `b` and return
    /// its cost.
    ///
    /// Panics when an operation has the wrong indices, a match aligns
    /// different symbols, a substitution aligns equal symbols, or the script
    /// does not consume both sequences exactly.
    pub fn verify<T: Eq + fmt::Debug>(&self, cm: &CostModel, a: &[T], b: &[T]) -> Cost {
        let mut pos = Pos(0, 0);
        for (idx, op) in self.ops.iter().enumerate() {
            assert_eq!(
                (op.i, op.j),
                (pos.0, pos.1),
                "Operation {idx} {op:?} does not continue from {pos:?}"
            );
            match op.kind {
                EditOpKind::Match => {
                    assert_eq!(a.get(op.i), b.get(op.j), "Operation {idx} {op:?}");
                    assert!(op.i < a.len(), "Operation {idx} {op:?} runs past the source");
                }
                EditOpKind::Substitution => {
                    assert!(op.i < a.len() && op.j < b.len(), "Operation {idx} {op:?} runs past the input");
                    assert_ne!(a[op.i], b[op.j], "Operation {idx} {op:?}");
                }
                EditOpKind::Insertion => {
                    assert!(op.j < b.len(), "Operation {idx} {op:?} runs past the target");
                }
                EditOpKind::Deletion => {
                    assert!(op.i < a.len(), "Operation {idx} {op:?} runs past the source");
                }
            }
            let Pos(di, dj) = op.kind.delta();
            pos = Pos(pos.0 + di, pos.1 + dj);
        }
        assert_eq!(pos, Pos(a.len(), b.len()), "Script does not end at the last cell");
        self.cost(cm)
    }

    /// Apply the script to `a`, taking inserted and substituted symbols from
    /// `b`.
    pub fn apply<T: Clone>(&self, a: &[T], b: &[T]) -> Vec<T> {
        self.ops
            .iter()
            .filter_map(|op| match op.kind {
                EditOpKind::Match => Some(a[op.i].clone()),
                EditOpKind::Substitution | EditOpKind::Insertion => Some(b[op.j].clone()),
                EditOpKind::Deletion => None,
            })
            .collect()
    }
}

impl Index<usize> for EditScript {
    type Output = EditOp;

    fn index(&self, index: usize) -> &EditOp {
        &self.ops[index]
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;

    type IntoIter = slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;

    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl FromIterator<EditOp> for EditScript {
    fn from_iter<I: IntoIterator<Item = EditOp>>(iter: I) -> Self {
        EditScript {
            ops: iter.into_iter().collect(),
        }
    }
}
