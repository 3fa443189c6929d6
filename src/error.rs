use thiserror::Error;

use crate::cost_model::Cost;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the distance and traceback functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cost in the cost model is negative.
    #[error("invalid configuration: {op} cost is {cost}, but costs must be non-negative")]
    InvalidConfiguration { op: &'static str, cost: Cost },

    /// A traceback was requested without a distance matrix built for the
    /// given sequences and costs.
    #[error("no distance matrix was computed for sequences of length {len_a} and {len_b} with these costs")]
    NotComputed { len_a: usize, len_b: usize },

    /// Some cell of the matrix for these lengths and costs does not fit in a `Cost`.
    #[error("costs overflow for sequences of length {len_a} and {len_b}")]
    CostOverflow { len_a: usize, len_b: usize },
}
