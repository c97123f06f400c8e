//! `rosterkit_io_xlsx` v1:
//! Class list workbook writer and restyler.
//!
//! - `conf`    : constants and default presets
//! - `spec`    : formats/options/reports/errors
//! - `util`    : pure helper functions
//! - `writer`  : `rust_xlsxwriter` writer kernel
//! - `restyle` : re-open intermediate workbook (`calamine`) and style it
pub mod conf;
pub mod restyle;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_FILE_INTERMEDIATE_DEFAULT, C_FILE_OUTPUT_DEFAULT, C_SHEET_NAME_DEFAULT, EnumFmtKey,
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
    derive_default_xlsx_format, derive_default_xlsx_formats,
};
pub use restyle::{SpecRestyleOptions, read_first_sheet_grid, restyle_class_list};
pub use spec::{
    SpecAutofitCellsPolicy, SpecCellFormat, SpecXlsxReport, SpecXlsxSheetWriteOptions,
    XlsxIoError,
};
pub use writer::XlsxWriter;
