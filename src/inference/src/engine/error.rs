use thiserror::Error;

use crate::results::DegenerateDistributionError;

#[derive(Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error("pedigree holds {count} individuals, exceeding the supported maximum of 63. The hypothesis space grows exponentially; bound the pedigree size")]
    PedigreeTooLarge { count: usize },

    #[error(transparent)]
    DegenerateDistribution(#[from] DegenerateDistributionError),
}
