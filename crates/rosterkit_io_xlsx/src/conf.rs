//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Sheet name used for both class list workbooks.
pub const C_SHEET_NAME_DEFAULT: &str = "Sheet1";
/// Intermediate workbook written before restyling.
pub const C_FILE_INTERMEDIATE_DEFAULT: &str = "output.xlsx";
/// Final styled class list workbook.
pub const C_FILE_OUTPUT_DEFAULT: &str = "Class List.xlsx";

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Member name cells.
    Text,
    /// Slot index header row.
    Header,
    /// Class code index column of the intermediate workbook.
    Index,
    /// Class code column of the final class list.
    ClassLabel,
}

impl EnumFmtKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumFmtKey::Text => "text",
            EnumFmtKey::Header => "header",
            EnumFmtKey::Index => "index",
            EnumFmtKey::ClassLabel => "class_label",
        }
    }
}

/// Build default named format presets used by [`crate::writer::XlsxWriter`].
pub fn derive_default_xlsx_formats() -> BTreeMap<String, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        valign: Some("vcenter".to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(EnumFmtKey::Text.as_str().to_string(), cfg_base_fmt_spec.clone());
    dict_fmt.insert(
        EnumFmtKey::Header.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            border: Some(1),
            align: Some("center".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Index.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            border: Some(1),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::ClassLabel.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            font_size: Some(12),
            bg_color: Some("#FFD700".to_string()),
            align: Some("center".to_string()),
            border: Some(5),
            ..Default::default()
        }),
    );

    dict_fmt
}

/// Look up one default preset by key.
pub fn derive_default_xlsx_format(key: EnumFmtKey) -> SpecCellFormat {
    derive_default_xlsx_formats()
        .remove(key.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formats_cover_every_key() {
        let dict_fmt = derive_default_xlsx_formats();
        for key in [
            EnumFmtKey::Text,
            EnumFmtKey::Header,
            EnumFmtKey::Index,
            EnumFmtKey::ClassLabel,
        ] {
            assert!(dict_fmt.contains_key(key.as_str()), "{key:?}");
        }
    }

    #[test]
    fn test_class_label_format_is_thick_gold_and_centered() {
        let fmt = derive_default_xlsx_format(EnumFmtKey::ClassLabel);
        assert_eq!(fmt.bold, Some(true));
        assert_eq!(fmt.font_size, Some(12));
        assert_eq!(fmt.bg_color.as_deref(), Some("#FFD700"));
        assert_eq!(fmt.align.as_deref(), Some("center"));
        assert_eq!(fmt.valign.as_deref(), Some("vcenter"));
        assert_eq!(fmt.border, Some(5));
    }
}
