use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParserError {
    #[error("--{arg} expects exactly three values (got {got})")]
    WrongArity { arg: &'static str, got: usize },

    #[error("--{arg} value {value} is not a probability. The provided value must lie between 0 and 1")]
    InvalidProbability { arg: &'static str, value: f64 },

    #[error("--gene-prior values sum to {sum}, but a founder prior must sum to 1")]
    InvalidPriorSum { sum: f64 },
}
