use std::path::Path;

use log::{info, trace};
use serde::Deserialize;

use pedigree::IndividualRecord;

mod error;
pub use error::ReadError;

/// Raw, unvalidated row of a pedigree definition file.
/// Blank fields keep their empty-string form until `into_record`.
#[derive(Debug, Deserialize)]
struct PedigreeRow {
    name  : String,
    mother: String,
    father: String,
    #[serde(rename = "trait")]
    trait_code: String,
}

impl PedigreeRow {
    /// Decode the row into an `IndividualRecord`: blank parent fields become
    /// `None`; the trait column maps 1 -> true, 0 -> false, blank -> unknown.
    fn into_record(self) -> Result<IndividualRecord, ReadError> {
        let observed_trait = match self.trait_code.as_str() {
            "1" => Some(true),
            "0" => Some(false),
            ""  => None,
            other => {
                let code = other.to_string();
                return Err(ReadError::InvalidTraitCode { name: self.name, code })
            }
        };
        let blank_to_none = |field: String| (!field.is_empty()).then_some(field);
        Ok(IndividualRecord {
            name          : self.name,
            mother        : blank_to_none(self.mother),
            father        : blank_to_none(self.father),
            observed_trait,
        })
    }
}

/// Load pedigree records from a CSV definition file.
///
/// The file must carry a `name,mother,father,trait` header. Structural
/// validation (dangling parents, cycles, half-specified parentage) is not
/// performed here: records go through `Pedigree::from_records` downstream.
///
/// # Errors
/// - `ReadError::OpenPedigree`     if the file cannot be opened or read.
/// - `ReadError::ParseRow`         if a row does not match the expected columns.
/// - `ReadError::InvalidTraitCode` if a trait field holds anything but 1, 0 or blank.
pub fn read_pedigree(path: impl AsRef<Path>) -> Result<Vec<IndividualRecord>, ReadError> {
    let path = path.as_ref();
    info!("Parsing pedigree definition file: {}", path.display());

    let mut reader = csv::Reader::from_path(path).map_err(ReadError::OpenPedigree)?;
    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<PedigreeRow>().enumerate() {
        // Line numbering is 1-based and skips the header.
        let row = row.map_err(|source| ReadError::ParseRow { line: index + 2, source })?;
        let record = row.into_record()?;
        trace!("Parsed record: {record:?}");
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_pedigree_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmpdir = tempfile::tempdir().expect("cannot create temporary directory");
        let path = tmpdir.path().join("pedigree.csv");
        let mut file = std::fs::File::create(&path).expect("cannot create pedigree file");
        write!(file, "{contents}").expect("cannot write pedigree file");
        (tmpdir, path)
    }

    #[test]
    fn read_classic_trio() -> Result<(), ReadError> {
        let (_tmpdir, path) = write_pedigree_file(
            "name,mother,father,trait\n\
             Harry,Lily,James,\n\
             James,,,1\n\
             Lily,,,0\n",
        );
        let records = read_pedigree(&path)?;
        assert_eq!(records, vec![
            IndividualRecord::new("Harry", Some("Lily"), Some("James"), None),
            IndividualRecord::founder("James", Some(true)),
            IndividualRecord::founder("Lily", Some(false)),
        ]);
        Ok(())
    }

    #[test]
    fn blank_parent_fields_become_none() -> Result<(), ReadError> {
        let (_tmpdir, path) = write_pedigree_file("name,mother,father,trait\nA,,,\n");
        let records = read_pedigree(&path)?;
        assert_eq!(records, vec![IndividualRecord::founder("A", None)]);
        Ok(())
    }

    #[test]
    fn reject_invalid_trait_code() {
        let (_tmpdir, path) = write_pedigree_file("name,mother,father,trait\nA,,,yes\n");
        let got = read_pedigree(&path);
        assert!(matches!(got, Err(ReadError::InvalidTraitCode { name, code }) if name == "A" && code == "yes"));
    }

    #[test]
    fn reject_missing_file() {
        let tmpdir = tempfile::tempdir().expect("cannot create temporary directory");
        let got = read_pedigree(tmpdir.path().join("nonexistent.csv"));
        assert!(matches!(got, Err(ReadError::OpenPedigree(_))));
    }

    #[test]
    fn reject_missing_column() {
        let (_tmpdir, path) = write_pedigree_file("name,mother,father\nA,,\n");
        let got = read_pedigree(&path);
        assert!(matches!(got, Err(ReadError::ParseRow { line: 2, .. })));
    }

    #[test]
    fn empty_file_yields_no_records() -> Result<(), ReadError> {
        let (_tmpdir, path) = write_pedigree_file("name,mother,father,trait\n");
        assert!(read_pedigree(&path)?.is_empty());
        Ok(())
    }
}
