//! Questionnaire ingestion: CSV -> `DataFrame` -> respondent records.

use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, NullValues, PlSmallStr, SerReader};
use tracing::{debug, info};

use crate::conf::TUP_CSV_NULL_VALUES;
use crate::report::ReportRosterBuilder;
use crate::spec::{EnumCellValue, RosterError, SpecRespondent, SpecRosterOptions};

/// Read a questionnaire export with a header row.
///
/// Empty fields and the NA markers in [`TUP_CSV_NULL_VALUES`] load as nulls.
pub fn read_questionnaire_csv(path: &Path) -> Result<DataFrame, RosterError> {
    let l_null_values: Vec<PlSmallStr> = TUP_CSV_NULL_VALUES
        .iter()
        .map(|c_value| PlSmallStr::from_static(c_value))
        .collect();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|opts| {
            opts.with_null_values(Some(NullValues::AllColumns(l_null_values.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "questionnaire loaded"
    );
    Ok(df)
}

/// Index of the first header containing `pattern` (case-insensitive).
pub fn locate_name_column(columns: &[String], pattern: &str) -> Option<usize> {
    let c_pattern = pattern.to_lowercase();
    columns
        .iter()
        .position(|c_name| c_name.to_lowercase().contains(&c_pattern))
}

/// Indices of every header containing `pattern` (case-insensitive).
pub fn select_class_columns(columns: &[String], pattern: &str) -> Vec<usize> {
    let c_pattern = pattern.to_lowercase();
    columns
        .iter()
        .enumerate()
        .filter_map(|(n_idx, c_name)| c_name.to_lowercase().contains(&c_pattern).then_some(n_idx))
        .collect()
}

/// Extract respondent records (name + class slots) from a questionnaire table.
///
/// Rows with a blank name are skipped and reported as warnings. A name
/// column without any usable value is an error.
pub fn extract_respondents(
    df: &DataFrame,
    options: &SpecRosterOptions,
    report: &mut ReportRosterBuilder,
) -> Result<Vec<SpecRespondent>, RosterError> {
    let l_colnames: Vec<String> = df
        .get_column_names_str()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    let n_idx_name = locate_name_column(&l_colnames, &options.pattern_name_column).ok_or_else(
        || RosterError::MissingNameColumn {
            pattern: options.pattern_name_column.clone(),
        },
    )?;

    let l_cols_idx_slot = options
        .class_slot_headers
        .iter()
        .map(|c_header| {
            l_colnames
                .iter()
                .position(|c_name| c_name == c_header)
                .ok_or_else(|| RosterError::MissingClassColumn(c_header.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for n_idx in select_class_columns(&l_colnames, &options.pattern_class_column) {
        if n_idx != n_idx_name && !l_cols_idx_slot.contains(&n_idx) {
            report.add_warning(format!(
                "Ignoring column {:?}: not a configured class slot.",
                l_colnames[n_idx]
            ));
        }
    }

    debug!(
        name_column = %l_colnames[n_idx_name],
        slots = l_cols_idx_slot.len(),
        "questionnaire columns resolved"
    );

    let l_cols = df.get_columns();
    let mut l_respondents = Vec::with_capacity(df.height());
    for n_idx_row in 0..df.height() {
        let value_name = derive_cell_value_from_any_value(l_cols[n_idx_name].get(n_idx_row)?);
        let Some(name) = derive_name_from_cell_value(value_name) else {
            report.add_warning(format!(
                "Row {}: blank name, respondent skipped.",
                n_idx_row + 1
            ));
            continue;
        };

        let mut l_classes = Vec::with_capacity(l_cols_idx_slot.len());
        for n_idx_col in &l_cols_idx_slot {
            l_classes.push(derive_cell_value_from_any_value(
                l_cols[*n_idx_col].get(n_idx_row)?,
            ));
        }

        l_respondents.push(SpecRespondent {
            name,
            classes: l_classes,
        });
    }

    if l_respondents.is_empty() {
        return Err(RosterError::EmptyNameColumn {
            column: l_colnames[n_idx_name].clone(),
        });
    }

    Ok(l_respondents)
}

fn derive_name_from_cell_value(value: EnumCellValue) -> Option<String> {
    if value.is_missing() {
        return None;
    }
    match value {
        EnumCellValue::String(s) => Some(s),
        EnumCellValue::Number(n) => Some(n.to_string()),
        EnumCellValue::None => None,
    }
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float64(val) => EnumCellValue::Number(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(columns: &[&str]) -> Vec<String> {
        columns.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_locate_name_column_is_case_insensitive_and_first_wins() {
        let columns = to_strings(&["Timestamp", "Full NAME", "Nickname", "Class #1:"]);
        assert_eq!(locate_name_column(&columns, "name"), Some(1));
        assert_eq!(locate_name_column(&to_strings(&["Email", "Class #1:"]), "name"), None);
    }

    #[test]
    fn test_select_class_columns() {
        let columns = to_strings(&["Name", "Class #1:", "CLASS #2:", "Classroom pref", "Email"]);
        assert_eq!(select_class_columns(&columns, "class"), vec![1, 2, 3]);
    }

    #[test]
    fn test_derive_name_from_cell_value() {
        assert_eq!(
            derive_name_from_cell_value(EnumCellValue::from("Alice")),
            Some("Alice".to_string())
        );
        assert_eq!(derive_name_from_cell_value(EnumCellValue::from("  ")), None);
        assert_eq!(derive_name_from_cell_value(EnumCellValue::None), None);
        assert_eq!(
            derive_name_from_cell_value(EnumCellValue::Number(42.0)),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_derive_cell_value_from_any_value() {
        assert_eq!(
            derive_cell_value_from_any_value(AnyValue::Null),
            EnumCellValue::None
        );
        assert_eq!(
            derive_cell_value_from_any_value(AnyValue::String("cs101")),
            EnumCellValue::String("cs101".to_string())
        );
        assert_eq!(
            derive_cell_value_from_any_value(AnyValue::Int64(101)),
            EnumCellValue::Number(101.0)
        );
    }
}
