use std::fmt;

use thiserror::Error;

/// Which of an individual's two posterior distributions degenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionField { Gene, Trait }

impl fmt::Display for DistributionField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Gene  => write!(f, "gene"),
            Self::Trait => write!(f, "trait"),
        }
    }
}

/// A posterior distribution summed to zero at normalization time.
///
/// Unreachable for any nonempty, well-formed pedigree: at least one hypothesis
/// always survives the evidence filter, and every hypothesis carries nonzero
/// mass under the default model. Treated as an internal invariant violation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("the {field} distribution of individual '{name}' has zero total mass and cannot be normalized")]
pub struct DegenerateDistributionError {
    pub name : String,
    pub field: DistributionField,
}
