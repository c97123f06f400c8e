//! Stateless class-code validation and normalization helpers.

use crate::conf::TUP_CLASS_SUFFIX_LETTERS;
use crate::spec::{ClassCode, EnumCellValue};

////////////////////////////////////////////////////////////////////////////////
// #region Validation

/// Return whether a raw cell looks like a class code.
///
/// Missing cells, NaN (numeric or textual) and plain numbers are rejected.
/// Text must start with a letter and end with a digit or one of
/// [`TUP_CLASS_SUFFIX_LETTERS`] (case-insensitive) once trimmed.
pub fn validate_class_code(value: &EnumCellValue) -> bool {
    if value.is_missing() {
        return false;
    }
    match value {
        EnumCellValue::String(s) => validate_class_code_str(s),
        EnumCellValue::Number(_) | EnumCellValue::None => false,
    }
}

fn validate_class_code_str(raw: &str) -> bool {
    let c_trimmed = raw.trim();
    if c_trimmed.parse::<f64>().is_ok_and(f64::is_nan) {
        return false;
    }

    let (Some(chr_first), Some(chr_last)) = (c_trimmed.chars().next(), c_trimmed.chars().last())
    else {
        return false;
    };

    chr_first.is_alphabetic()
        && (chr_last.is_numeric()
            || TUP_CLASS_SUFFIX_LETTERS.contains(&chr_last.to_ascii_uppercase()))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Normalization

/// Canonicalize a class code string: `"cs101"` -> `"CS 101"`.
///
/// Codes that already contain a space are only uppercased. Returns `None`
/// when there is no alphabetic prefix followed by a non-alphabetic suffix.
pub fn normalize_class_code(raw: &str) -> Option<String> {
    let c_trimmed = raw.trim();
    if c_trimmed.is_empty() {
        return None;
    }
    if c_trimmed.contains(' ') {
        return Some(c_trimmed.to_uppercase());
    }

    let n_idx_split = c_trimmed
        .char_indices()
        .find(|(_, chr)| !chr.is_alphabetic())
        .map(|(n_idx, _)| n_idx)?;
    if n_idx_split == 0 {
        return None;
    }

    let (c_prefix, c_suffix) = c_trimmed.split_at(n_idx_split);
    Some(format!("{c_prefix} {c_suffix}").to_uppercase())
}

/// Validate and normalize one raw cell into a [`ClassCode`].
pub fn parse_class_code(value: &EnumCellValue) -> Option<ClassCode> {
    if !validate_class_code(value) {
        return None;
    }
    let EnumCellValue::String(raw) = value else {
        return None;
    };
    normalize_class_code(raw).map(ClassCode)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
