mod runner;
pub use runner::MendelRunnerBuilder;
