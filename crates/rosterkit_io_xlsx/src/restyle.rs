//! Re-open an intermediate class table workbook and emit the styled class list.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use rosterkit_roster::EnumCellValue;
use tracing::info;

use crate::conf::{EnumFmtKey, derive_default_xlsx_format};
use crate::spec::{SpecCellFormat, SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxIoError};
use crate::writer::XlsxWriter;

/// Options for [`restyle_class_list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRestyleOptions {
    /// Leading worksheet rows dropped before writing (the slot-index header).
    pub n_rows_drop: usize,
    /// Format applied to every cell of the first column.
    pub fmt_label: SpecCellFormat,
    /// Output sheet options; the source sheet name is kept when `None`.
    pub sheet_options: Option<SpecXlsxSheetWriteOptions>,
}

impl Default for SpecRestyleOptions {
    fn default() -> Self {
        Self {
            n_rows_drop: 1,
            fmt_label: derive_default_xlsx_format(EnumFmtKey::ClassLabel),
            sheet_options: None,
        }
    }
}

/// Read the first worksheet of `path_in`, drop its header row(s), style the
/// class-code column and save the result to `path_out`.
pub fn restyle_class_list(
    path_in: &Path,
    path_out: &Path,
    options: &SpecRestyleOptions,
) -> Result<SpecXlsxReport, XlsxIoError> {
    let (sheet_name, l_grid) = read_first_sheet_grid(path_in)?;
    info!(
        path = %path_in.display(),
        sheet = %sheet_name,
        rows = l_grid.len(),
        "intermediate workbook loaded"
    );

    let l_rows: Vec<Vec<EnumCellValue>> = l_grid.into_iter().skip(options.n_rows_drop).collect();

    let sheet_options = options
        .sheet_options
        .clone()
        .unwrap_or_else(|| SpecXlsxSheetWriteOptions {
            sheet_name,
            ..Default::default()
        });

    let mut writer = XlsxWriter::with_default_formats(path_out.to_path_buf());
    writer.write_labeled_rows(&l_rows, &options.fmt_label, &sheet_options)?;
    writer.close()?;

    Ok(writer.report().pop().unwrap_or_default())
}

/// Load the first worksheet as a dense grid anchored at `A1`.
pub fn read_first_sheet_grid(
    path: &Path,
) -> Result<(String, Vec<Vec<EnumCellValue>>), XlsxIoError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| XlsxIoError::NoWorksheet(PathBuf::from(path)))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let Some((n_row_start, n_col_start)) = range.start() else {
        return Ok((sheet_name, vec![]));
    };
    let (n_height, n_width) = range.get_size();
    let n_row_offset = n_row_start as usize;
    let n_col_offset = n_col_start as usize;

    let mut l_grid =
        vec![vec![EnumCellValue::None; n_col_offset + n_width]; n_row_offset + n_height];
    // `used_cells` coordinates are relative to `range.start()`.
    for (n_idx_row, n_idx_col, value) in range.used_cells() {
        l_grid[n_row_offset + n_idx_row][n_col_offset + n_idx_col] =
            derive_cell_value_from_data(value);
    }

    for l_row in &mut l_grid {
        while matches!(l_row.last(), Some(EnumCellValue::None)) {
            l_row.pop();
        }
    }

    Ok((sheet_name, l_grid))
}

fn derive_cell_value_from_data(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty | Data::Error(_) => EnumCellValue::None,
        Data::String(val) => EnumCellValue::String(val.clone()),
        Data::Float(val) => EnumCellValue::Number(*val),
        Data::Int(val) => EnumCellValue::Number(*val as f64),
        Data::Bool(val) => {
            EnumCellValue::String(if *val { "TRUE" } else { "FALSE" }.to_string())
        }
        Data::DateTime(val) => EnumCellValue::Number(val.as_f64()),
        Data::DateTimeIso(val) | Data::DurationIso(val) => EnumCellValue::String(val.clone()),
    }
}
