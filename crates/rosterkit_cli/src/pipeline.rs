//! Questionnaire -> class list pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rosterkit_io_xlsx::{
    SpecRestyleOptions, SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxWriter, restyle_class_list,
};
use rosterkit_roster::{
    ReportRoster, ReportRosterBuilder, SpecRosterOptions, build_class_roster, extract_respondents,
    read_questionnaire_csv, transpose_class_roster,
};
use tracing::info;

/// Resolved inputs of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecPipelineOptions {
    pub input: PathBuf,
    pub intermediate: PathBuf,
    pub output: PathBuf,
    pub roster: SpecRosterOptions,
}

/// Reports produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct SpecPipelineOutcome {
    pub report_roster: ReportRoster,
    pub report_xlsx: SpecXlsxReport,
}

/// Read the questionnaire, invert it, write the intermediate workbook and
/// restyle it into the final class list.
pub fn run_pipeline(options: &SpecPipelineOptions) -> Result<SpecPipelineOutcome> {
    let df = read_questionnaire_csv(&options.input)?;

    let mut report = ReportRosterBuilder::default();
    let respondents = extract_respondents(&df, &options.roster, &mut report)
        .with_context(|| format!("invalid questionnaire {}", options.input.display()))?;
    let roster = build_class_roster(&respondents, &mut report);
    let table = transpose_class_roster(&roster);
    let report_roster = report.build(roster.len());
    info!("{report_roster}");

    let mut writer = XlsxWriter::with_default_formats(options.intermediate.clone());
    let c_file_intermediate = writer.file_out();
    writer
        .write_class_table(&table, &SpecXlsxSheetWriteOptions::default())
        .with_context(|| format!("failed to write {c_file_intermediate}"))?;
    writer
        .close()
        .with_context(|| format!("failed to save {c_file_intermediate}"))?;

    let report_xlsx = restyle_class_list(
        &options.intermediate,
        &options.output,
        &SpecRestyleOptions::default(),
    )
    .with_context(|| format!("failed to restyle into {}", options.output.display()))?;

    Ok(SpecPipelineOutcome {
        report_roster,
        report_xlsx,
    })
}
