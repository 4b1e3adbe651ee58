use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

/// Parse command line arguments and run `mendel_rs::run()`
fn main() {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = if cli.quiet { 0 } else { cli.verbose + 1 };
    logger::Logger::init(verbosity);

    // ----------------------------- Serialize command line arguments
    cli.serialize();

    // ----------------------------- Run the inference pipeline.
    if let Err(e) = mendel_rs::run(&cli) {
        error!("{:?}", e);
        process::exit(1);
    };
}
