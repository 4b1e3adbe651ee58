mod gene_count;
pub use gene_count::GeneCount;

pub mod model;
pub use model::{InheritanceModel, Transmission};

pub mod hypothesis;
pub use hypothesis::{Assignment, Hypotheses, Hypothesis};

pub mod results;
pub use results::{DegenerateDistributionError, ResultTable};

mod engine;
pub use engine::{InferenceEngine, InferenceError};
