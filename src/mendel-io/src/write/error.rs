use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("failed to create output file '{}'", path.display())]
    CreateFile { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to write results")]
    Write(#[source] std::io::Error),

    #[error("'{}' already exists. Use --overwrite to force", path.display())]
    OverwriteDisallowed { path: PathBuf },
}
