//! This module contains the linear `CostModel` with independent insertion,
//! deletion, and substitution costs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Type for storing costs.
///
/// Signed, so that negative inputs can be rejected instead of wrapping.
pub type Cost = i32;

/// Linear costs for the three edit operations.
///
/// A match always costs 0. All costs must be non-negative; zero costs are
/// allowed and give degenerate metrics.
// Fields are private so that every instance went through validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCostModel")]
pub struct CostModel {
    ins: Cost,
    del: Cost,
    sub: Cost,
}

impl CostModel {
    /// Costs in the order `(insertion, deletion, substitution)`.
    pub fn new(ins: Cost, del: Cost, sub: Cost) -> Result<CostModel> {
        for (op, cost) in [("insertion", ins), ("deletion", del), ("substitution", sub)] {
            if cost < 0 {
                return Err(Error::InvalidConfiguration { op, cost });
            }
        }
        Ok(CostModel { ins, del, sub })
    }

    /// Classical Levenshtein distance: every operation costs 1.
    pub fn unit() -> CostModel {
        CostModel {
            ins: 1,
            del: 1,
            sub: 1,
        }
    }

    /// Same cost for insertions and deletions.
    pub fn linear(sub: Cost, indel: Cost) -> Result<CostModel> {
        Self::new(indel, indel, sub)
    }

    pub fn ins(&self) -> Cost {
        self.ins
    }
    pub fn del(&self) -> Cost {
        self.del
    }
    pub fn sub(&self) -> Cost {
        self.sub
    }

    /// True when insertions and deletions cost the same, so that the distance
    /// is symmetric in its two arguments.
    pub fn is_symmetric(&self) -> bool {
        self.ins == self.del
    }

    /// The cost of aligning `x` with `y`: 0 for a match, `sub` otherwise.
    #[inline]
    pub fn diagonal<T: Eq>(&self, x: &T, y: &T) -> Cost {
        if x == y {
            0
        } else {
            self.sub
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

/// Unvalidated serde representation.
#[derive(Deserialize)]
struct RawCostModel {
    ins: Cost,
    del: Cost,
    sub: Cost,
}

impl TryFrom<RawCostModel> for CostModel {
    type Error = Error;

    fn try_from(RawCostModel { ins, del, sub }: RawCostModel) -> Result<Self> {
        CostModel::new(ins, del, sub)
    }
}
