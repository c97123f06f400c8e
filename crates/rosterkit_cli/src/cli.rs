//! Command-line interface definition.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rosterkit_io_xlsx::{C_FILE_INTERMEDIATE_DEFAULT, C_FILE_OUTPUT_DEFAULT};
use rosterkit_roster::SpecRosterOptions;
use rosterkit_roster::conf::derive_default_roster_options;

use crate::pipeline::SpecPipelineOptions;

const C_PROMPT_INPUT: &str = "Enter the Questionnaire File Name: ";

/// Turn a questionnaire export into a per-class member list workbook.
#[derive(Parser, Debug)]
#[command(name = "classlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Questionnaire CSV export; prompted for on stdin when omitted
    pub input: Option<PathBuf>,

    /// Intermediate workbook (slot-index header + class index column)
    #[arg(long, default_value = C_FILE_INTERMEDIATE_DEFAULT)]
    pub intermediate: PathBuf,

    /// Final styled class list workbook
    #[arg(long, short = 'o', default_value = C_FILE_OUTPUT_DEFAULT)]
    pub output: PathBuf,

    /// Class slot column header; repeat to replace the default six
    #[arg(long = "class-header", value_name = "HEADER")]
    pub class_headers: Vec<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve pipeline options, prompting for the input path if needed.
    pub fn derive_pipeline_options(&self) -> Result<SpecPipelineOptions> {
        let input = match &self.input {
            Some(path) => path.clone(),
            None => prompt_input_path(&mut io::stdin().lock(), &mut io::stdout())?,
        };

        let mut roster = derive_default_roster_options();
        if !self.class_headers.is_empty() {
            roster = SpecRosterOptions {
                class_slot_headers: self.class_headers.clone(),
                ..roster
            };
        }

        Ok(SpecPipelineOptions {
            input,
            intermediate: self.intermediate.clone(),
            output: self.output.clone(),
            roster,
        })
    }
}

/// Ask for the questionnaire file name on `writer`, read it from `reader`.
pub fn prompt_input_path(reader: &mut impl BufRead, writer: &mut impl Write) -> Result<PathBuf> {
    write!(writer, "{C_PROMPT_INPUT}").context("failed to write prompt")?;
    writer.flush().context("failed to flush prompt")?;

    let mut c_line = String::new();
    reader
        .read_line(&mut c_line)
        .context("failed to read questionnaire file name")?;

    let c_path = c_line.trim();
    if c_path.is_empty() {
        bail!("no questionnaire file name given");
    }
    Ok(PathBuf::from(c_path))
}
