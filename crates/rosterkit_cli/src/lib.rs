//! `rosterkit_cli`: the `classlist` command.
pub mod cli;
pub mod pipeline;

pub use cli::Cli;
pub use pipeline::{SpecPipelineOptions, SpecPipelineOutcome, run_pipeline};
