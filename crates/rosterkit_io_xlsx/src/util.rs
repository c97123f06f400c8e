//! Stateless helper utilities used by the XLSX writer kernel.

use rosterkit_roster::EnumCellValue;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{SpecAutofitCellsPolicy, XlsxIoError};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Reject grids that cannot fit on one worksheet.
pub fn validate_excel_bounds(n_rows: usize, n_cols: usize) -> Result<(), XlsxIoError> {
    if n_rows > N_NROWS_EXCEL_MAX || n_cols > N_NCOLS_EXCEL_MAX {
        return Err(XlsxIoError::ExcelLimit {
            rows: n_rows,
            cols: n_cols,
        });
    }
    Ok(())
}

pub fn cast_row_num(value: usize) -> Result<u32, XlsxIoError> {
    u32::try_from(value).map_err(|_| XlsxIoError::RowOverflow(value))
}

pub fn cast_col_num(value: usize) -> Result<u16, XlsxIoError> {
    u16::try_from(value).map_err(|_| XlsxIoError::ColOverflow(value))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Validate autofit bounds.
pub fn validate_policy_autofit(policy_autofit: &SpecAutofitCellsPolicy) -> Result<(), XlsxIoError> {
    if policy_autofit.width_cell_min == 0 {
        return Err(XlsxIoError::InvalidOptions(
            "policy_autofit.width_cell_min must be >= 1.".to_string(),
        ));
    }
    if policy_autofit.width_cell_max < policy_autofit.width_cell_min {
        return Err(XlsxIoError::InvalidOptions(
            "policy_autofit.width_cell_max must be >= policy_autofit.width_cell_min.".to_string(),
        ));
    }
    Ok(())
}

/// Estimate displayed width units for one cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => estimate_unicode_string_width(s),
        EnumCellValue::Number(n) => estimate_unicode_string_width(&n.to_string()),
    }
}

fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Resolve final per-column widths from recorded header/body widths.
pub fn plan_column_widths(
    widths_header: &[usize],
    widths_body: &[usize],
    policy_autofit: &SpecAutofitCellsPolicy,
) -> Vec<usize> {
    let n_min = usize::max(1, policy_autofit.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy_autofit.width_cell_max));
    let n_pad = policy_autofit.width_cell_padding;

    widths_header
        .iter()
        .zip(widths_body)
        .map(|(n_header, n_body)| {
            let n_width_recorded = usize::max(*n_header, *n_body);
            usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad))
        })
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
