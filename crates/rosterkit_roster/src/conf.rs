//! Questionnaire schema constants and default preset factories.

use crate::spec::SpecRosterOptions;

/// Case-insensitive substring that marks the respondent name column.
pub const C_PATTERN_NAME_COLUMN: &str = "name";
/// Case-insensitive substring that marks class columns.
pub const C_PATTERN_CLASS_COLUMN: &str = "class";
/// Class slot headers of the questionnaire export, in slot order.
pub const TUP_CLASS_SLOT_HEADERS: [&str; 6] = [
    "Class #1:",
    "Class #2:",
    "Class #3:",
    "Class #4:",
    "Class #5:",
    "Class #6:",
];
/// Letters accepted as the trailing character of a class code
/// (lab, honors, B-track, accelerated).
pub const TUP_CLASS_SUFFIX_LETTERS: [char; 4] = ['L', 'H', 'B', 'A'];

/// Cell texts read as missing values, matching the usual spreadsheet/pandas
/// NA markers. Matched exactly, case-sensitive.
pub const TUP_CSV_NULL_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Build default roster extraction options.
pub fn derive_default_roster_options() -> SpecRosterOptions {
    SpecRosterOptions::default()
}
