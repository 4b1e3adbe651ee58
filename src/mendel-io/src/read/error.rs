use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open pedigree definition file")]
    OpenPedigree(#[source] csv::Error),

    #[error("failed to parse line {line} of the pedigree definition file")]
    ParseRow { line: usize, #[source] source: csv::Error },

    #[error("individual '{name}' carries an invalid trait value '{code}'. Expected 1, 0, or an empty field")]
    InvalidTraitCode { name: String, code: String },
}
