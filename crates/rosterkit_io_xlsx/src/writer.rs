//! XLSX writer kernel that renders class tables into workbook output.

use std::path::PathBuf;

use rosterkit_roster::{EnumCellValue, SpecClassTable};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use tracing::info;

use crate::conf::{EnumFmtKey, derive_default_xlsx_format};
use crate::spec::{SpecCellFormat, SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxIoError};
use crate::util::{
    cast_col_num, cast_row_num, estimate_width_len, plan_column_widths, sanitize_sheet_name,
    validate_excel_bounds, validate_policy_autofit,
};

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_header: SpecCellFormat,
    fmt_index: SpecCellFormat,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and format presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(
        path_file_out: PathBuf,
        fmt_text: SpecCellFormat,
        fmt_header: SpecCellFormat,
        fmt_index: SpecCellFormat,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text,
            fmt_header,
            fmt_index,
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Create writer with the default text/header/index presets.
    pub fn with_default_formats(path_file_out: PathBuf) -> Self {
        Self::new(
            path_file_out,
            derive_default_xlsx_format(EnumFmtKey::Text),
            derive_default_xlsx_format(EnumFmtKey::Header),
            derive_default_xlsx_format(EnumFmtKey::Index),
        )
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        info!(path = %self.path_file_out.display(), "workbook saved");
        Ok(())
    }

    /// Write a class table with a slot-index header row and a class-code index column.
    ///
    /// Layout: `A1` blank, `B1..` slot indices `0..width`, then one row per
    /// class with the code in column `A` and members to its right.
    pub fn write_class_table(
        &mut self,
        table: &SpecClassTable,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), XlsxIoError> {
        let mut l_header = Vec::with_capacity(table.width() + 1);
        l_header.push(EnumCellValue::None);
        l_header.extend((0..table.width()).map(|n_idx| EnumCellValue::Number(n_idx as f64)));

        let l_body: Vec<Vec<EnumCellValue>> = table
            .class_codes
            .iter()
            .zip(&table.rows)
            .map(|(code, members)| {
                let mut l_row = Vec::with_capacity(members.len() + 1);
                l_row.push(EnumCellValue::from(code.as_str()));
                l_row.extend(
                    members
                        .iter()
                        .map(|member| EnumCellValue::from(member.as_deref())),
                );
                l_row
            })
            .collect();

        let fmt_index = self.fmt_index.clone();
        self.write_sheet(Some(l_header.as_slice()), &l_body, &fmt_index, options)
    }

    /// Write header-less rows whose first column carries `fmt_label`.
    pub fn write_labeled_rows(
        &mut self,
        rows: &[Vec<EnumCellValue>],
        fmt_label: &SpecCellFormat,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), XlsxIoError> {
        self.write_sheet(None, rows, fmt_label, options)
    }

    fn write_sheet(
        &mut self,
        header: Option<&[EnumCellValue]>,
        body: &[Vec<EnumCellValue>],
        fmt_label: &SpecCellFormat,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::Closed);
        }
        validate_policy_autofit(&options.policy_autofit)?;

        let n_rows_header = usize::from(header.is_some());
        let n_width = body
            .iter()
            .map(Vec::len)
            .chain(header.map(<[EnumCellValue]>::len))
            .max()
            .unwrap_or(0);
        validate_excel_bounds(n_rows_header + body.len(), n_width)?;

        let mut report = SpecXlsxReport {
            cnt_rows: n_rows_header + body.len(),
            cnt_cols: n_width,
            ..Default::default()
        };

        let sheet_name_sanitized = sanitize_sheet_name(&options.sheet_name, "_");
        if sheet_name_sanitized != options.sheet_name {
            report.warn(format!(
                "Sheet name {:?} sanitized to {sheet_name_sanitized:?}.",
                options.sheet_name
            ));
        }

        let fmt_text = derive_rust_xlsx_format(&self.fmt_text);
        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_label = derive_rust_xlsx_format(fmt_label);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name_sanitized)?;

        let mut l_width_by_col_header = vec![0usize; n_width];
        let mut l_width_by_col_body = vec![0usize; n_width];

        if let Some(l_header) = header {
            for (n_idx_col, value) in l_header.iter().enumerate() {
                l_width_by_col_header[n_idx_col] = estimate_width_len(value);
                write_cell_with_format(worksheet, 0, n_idx_col, value, &fmt_header, true)?;
            }
        }

        for (n_idx_row, l_row) in body.iter().enumerate() {
            for (n_idx_col, value) in l_row.iter().enumerate() {
                l_width_by_col_body[n_idx_col] =
                    usize::max(l_width_by_col_body[n_idx_col], estimate_width_len(value));

                let (fmt_cell, if_write_blank) = if n_idx_col == 0 {
                    (&fmt_label, true)
                } else {
                    (&fmt_text, false)
                };
                write_cell_with_format(
                    worksheet,
                    n_rows_header + n_idx_row,
                    n_idx_col,
                    value,
                    fmt_cell,
                    if_write_blank,
                )?;
            }
        }

        let l_widths = plan_column_widths(
            &l_width_by_col_header,
            &l_width_by_col_body,
            &options.policy_autofit,
        );
        for (n_idx_col, n_width_final) in l_widths.into_iter().enumerate() {
            worksheet.set_column_width(cast_col_num(n_idx_col)?, n_width_final as f64)?;
        }

        info!(
            sheet = %sheet_name_sanitized,
            rows = report.cnt_rows,
            cols = report.cnt_cols,
            "sheet written"
        );
        report.sheet_name = sheet_name_sanitized;
        self.l_reports.push(report);
        Ok(())
    }
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
    if_write_blank: bool,
) -> Result<(), XlsxIoError> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;
    match value {
        EnumCellValue::None => {
            if if_write_blank {
                worksheet.write_blank(n_row, n_col, format)?;
            }
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(n_row, n_col, val, format)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(n_row, n_col, *val, format)?;
        }
    }
    Ok(())
}

/// Translate a [`SpecCellFormat`] into a `rust_xlsxwriter` [`Format`].
pub fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        0 => FormatBorder::None,
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}
