use anyhow::{Context, Result};

#[macro_use]
extern crate log;

use inference::{InferenceEngine, InheritanceModel};
use mendel_io::GenericWriter;
use parser::Cli;
use pedigree::Pedigree;

/// Run a full inference pass from parsed command line arguments:
/// load the pedigree definition file, build and validate the pedigree,
/// compute every individual's posterior distributions, and render the
/// result table to the console or the requested output file.
pub fn run(cli: &Cli) -> Result<()> {
    // ----------------------------- Validate model arguments and assemble the model.
    cli.validate().context("Invalid command line arguments")?;
    let model = InheritanceModel::new(cli.gene_prior(), cli.trait_given_gene(), cli.mutation_rate);
    debug!("Inheritance model: {model:?}");

    // ----------------------------- Refuse to clobber the output file up front.
    if let Some(output) = &cli.output {
        mendel_io::can_write_file(cli.overwrite, output)?;
    }

    // ----------------------------- Load records and build the pedigree.
    let records = mendel_io::read_pedigree(&cli.pedigree)
        .with_context(|| format!("While reading '{}'", cli.pedigree.display()))?;
    let pedigree = Pedigree::from_records(records).context("Invalid pedigree structure")?;
    info!("Loaded pedigree ({} individual(s))", pedigree.len());

    // ----------------------------- Run the exact inference pass.
    let engine = InferenceEngine::new(&pedigree, model)?;
    let results = engine.run()?;

    // ----------------------------- Print results.
    info!("Printing results...");
    let mut writer = GenericWriter::new(cli.output.as_ref())?;
    writer.write_display(&results)?;
    Ok(())
}
