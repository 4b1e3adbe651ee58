use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

mod error;
pub use error::WriterError;

/// A generic result writer.
/// - `source`: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>,
}

impl<'a> GenericWriter<'a> {
    /// Instantiate a new writer, targeting either a file or the console.
    ///
    /// # Errors
    /// - `WriterError::CreateFile` if `path` cannot be created.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>, WriterError> {
        let source: Box<dyn Write> = match path {
            Some(path) => {
                debug!("Writing results to {}", path.as_ref().display());
                let file = File::create(&path).map_err(|source| WriterError::CreateFile {
                    path: path.as_ref().to_path_buf(),
                    source,
                })?;
                Box::new(file)
            }
            None => Box::new(std::io::stdout()),
        };
        Ok(GenericWriter { source: BufWriter::new(source) })
    }

    /// Render a displayable item into the target and flush.
    ///
    /// # Errors
    /// - `WriterError::Write` on any underlying I/O failure.
    pub fn write_display(&mut self, item: impl Display) -> Result<(), WriterError> {
        write!(self.source, "{item}").map_err(WriterError::Write)?;
        self.source.flush().map_err(WriterError::Write)
    }
}

/// Check whether a file may be written at `path`, refusing to clobber an
/// existing file unless the user explicitly allowed overwriting.
///
/// # Errors
/// - `WriterError::OverwriteDisallowed` if `path` exists and `overwrite` is unset.
pub fn can_write_file(overwrite: bool, path: &Path) -> Result<(), WriterError> {
    if !overwrite && path.exists() {
        return Err(WriterError::OverwriteDisallowed { path: path.to_path_buf() })
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file() -> Result<(), WriterError> {
        let tmpdir = tempfile::tempdir().expect("cannot create temporary directory");
        let path = tmpdir.path().join("results.txt");

        let mut writer = GenericWriter::new(Some(&path))?;
        writer.write_display("A:\n  Gene:\n")?;
        writer.write_display("    2: 0.01000000\n")?;

        let got = std::fs::read_to_string(&path).expect("cannot read back results");
        assert_eq!(got, "A:\n  Gene:\n    2: 0.01000000\n");
        Ok(())
    }

    #[test]
    fn can_write_file_honors_overwrite() -> Result<(), WriterError> {
        let tmpdir = tempfile::tempdir().expect("cannot create temporary directory");
        let path = tmpdir.path().join("results.txt");

        can_write_file(false, &path)?; // No overwrite, no file => ok
        can_write_file(true, &path)?;  // Overwrite, no file    => ok

        let _ = File::create(&path).expect("cannot create file");
        can_write_file(true, &path)?;  // Overwrite, file       => ok
        let got = can_write_file(false, &path);
        assert!(matches!(got, Err(WriterError::OverwriteDisallowed { .. })));
        Ok(())
    }
}
