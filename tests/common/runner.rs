use std::{fs, path::PathBuf};

use clap::Parser;
use tempfile::TempDir;

/// Assembles a full `mendel-rs` run inside a temporary directory: the pedigree
/// definition file is written from the provided rows, and command line
/// arguments are built the way the binary would receive them.
pub struct MendelRunnerBuilder {
    rows      : Vec<String>,
    output    : Option<String>,
    overwrite : bool,
    extra_args: Vec<String>,
}

impl MendelRunnerBuilder {
    pub fn new() -> Self {
        Self {
            rows      : vec!["name,mother,father,trait".to_string()],
            output    : None,
            overwrite : false,
            extra_args: Vec::new(),
        }
    }

    /// Append one `name,mother,father,trait` row to the pedigree fixture.
    pub fn row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    /// Redirect results to the given file (relative to the temp directory).
    pub fn output(mut self, filename: &str) -> Self {
        self.output = Some(filename.to_string());
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Append a raw command line argument (e.g. model overrides).
    pub fn arg(mut self, arg: &str) -> Self {
        self.extra_args.push(arg.to_string());
        self
    }

    pub fn build(self) -> MendelRunner {
        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let pedigree = tempdir.path().join("pedigree.csv");
        fs::write(&pedigree, self.rows.join("\n") + "\n").expect("Failed to write pedigree fixture");

        let mut args = vec!["mendel-rs".to_string(), pedigree.display().to_string()];
        let output = self.output.map(|name| tempdir.path().join(name));
        if let Some(output) = &output {
            args.push("--output".to_string());
            args.push(output.display().to_string());
        }
        if self.overwrite {
            args.push("--overwrite".to_string());
        }
        args.extend(self.extra_args);

        MendelRunner { _tempdir: tempdir, args, output }
    }
}

/// A ready-to-run `mendel-rs` invocation, bound to its temporary workspace.
pub struct MendelRunner {
    _tempdir: TempDir,
    args    : Vec<String>,
    output  : Option<PathBuf>,
}

impl MendelRunner {
    /// Parse the assembled arguments and run the full library pipeline.
    pub fn run(&self) -> anyhow::Result<()> {
        let cli = parser::Cli::parse_from(&self.args);
        mendel_rs::run(&cli)
    }

    /// Path of the requested output file.
    ///
    /// # Panics
    /// - if the runner was built without an output file.
    pub fn output_path(&self) -> &PathBuf {
        self.output.as_ref().expect("No output file was requested")
    }
}
