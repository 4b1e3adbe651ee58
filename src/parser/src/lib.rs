use std::path::PathBuf;

use clap::Parser;
use log::debug;
use serde::{Deserialize, Serialize};

mod error;
pub use error::ParserError;

/// Tolerance when checking that a user-provided founder prior sums to 1.
const PRIOR_SUM_EPSILON: f64 = 1e-6;

/// Default founder gene-count prior, for 0, 1 and 2 copies.
const DEFAULT_GENE_PRIOR: [&str; 3] = ["0.96", "0.03", "0.01"];

/// Default probability of exhibiting the trait, with 0, 1 and 2 copies.
const DEFAULT_PENETRANCE: [&str; 3] = ["0.01", "0.56", "0.65"];

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="mendel-rs", author, version, about, long_about = None)]
/// mendel-rs: exact gene and trait posterior inference over family pedigrees
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use the --quiet/-q flag to disable them.
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Input pedigree file.
    ///
    /// CSV file with the header 'name,mother,father,trait'. The mother and father
    /// fields must either both be blank, or both name another individual of the file.
    /// The trait field should be 1 or 0 when the trait status of the individual is
    /// known, and blank otherwise.
    pub pedigree: PathBuf,

    /// Redirect the result table to an output file.
    ///
    /// By default, results are printed on the console.
    #[clap(short, long, required(false))]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files.
    #[clap(short='w', long)]
    pub overwrite: bool,

    /// Founder prior for carrying 0, 1 and 2 copies of the variant allele.
    ///
    /// The three provided values must sum to 1.
    #[clap(long, multiple_values(true), number_of_values(3), default_values(&DEFAULT_GENE_PRIOR))]
    pub gene_prior: Vec<f64>,

    /// Probability of exhibiting the trait when carrying 0, 1 and 2 copies.
    #[clap(long, multiple_values(true), number_of_values(3), default_values(&DEFAULT_PENETRANCE))]
    pub penetrance: Vec<f64>,

    /// Probability that a transmitted gene copy flips its state in transit.
    #[clap(short='m', long, default_value("0.01"))]
    pub mutation_rate: f64,
}

impl Cli {
    /// Log the fully-parsed command line arguments as a yaml document.
    pub fn serialize(&self) {
        match serde_yaml::to_string(&self) {
            Ok(serialized) => debug!("\n---- Command line args ----\n{serialized}\n---"),
            Err(e)         => debug!("Failed to serialize command line arguments: [{e}]"),
        }
    }

    /// Validate the model arguments of the command line.
    ///
    /// # Errors
    /// - `ParserError::WrongArity`         if --gene-prior or --penetrance does not carry three values.
    /// - `ParserError::InvalidProbability` if any model value lies outside [0, 1].
    /// - `ParserError::InvalidPriorSum`    if --gene-prior does not sum to 1.
    pub fn validate(&self) -> Result<(), ParserError> {
        for (arg, values) in [("gene-prior", &self.gene_prior), ("penetrance", &self.penetrance)] {
            if values.len() != 3 {
                return Err(ParserError::WrongArity { arg, got: values.len() })
            }
            for &value in values {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ParserError::InvalidProbability { arg, value })
                }
            }
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ParserError::InvalidProbability { arg: "mutation-rate", value: self.mutation_rate })
        }

        let sum: f64 = self.gene_prior.iter().sum();
        if (sum - 1.0).abs() > PRIOR_SUM_EPSILON {
            return Err(ParserError::InvalidPriorSum { sum })
        }
        Ok(())
    }

    /// Founder gene-count prior, as a fixed-size lookup table.
    /// Call `validate` beforehand: three values are assumed.
    pub fn gene_prior(&self) -> [f64; 3] {
        [self.gene_prior[0], self.gene_prior[1], self.gene_prior[2]]
    }

    /// Per-gene-count trait probability, as a fixed-size lookup table.
    /// Call `validate` beforehand: three values are assumed.
    pub fn trait_given_gene(&self) -> [f64; 3] {
        [self.penetrance[0], self.penetrance[1], self.penetrance[2]]
    }
}
