//! `rosterkit_roster` v1:
//! Questionnaire -> class roster kernel.
//!
//! Architecture:
//! - `conf`   : schema constants and default presets
//! - `spec`   : cell/respondent/table models and errors
//! - `util`   : class-code validation and normalization
//! - `reader` : CSV ingestion into respondent records
//! - `roster` : class -> members inversion and table transpose
//! - `report` : run-time report model
pub mod conf;
pub mod reader;
pub mod report;
pub mod roster;
pub mod spec;
pub mod util;

pub use conf::{
    C_PATTERN_CLASS_COLUMN, C_PATTERN_NAME_COLUMN, TUP_CLASS_SLOT_HEADERS,
    TUP_CLASS_SUFFIX_LETTERS, TUP_CSV_NULL_VALUES,
};
pub use reader::{extract_respondents, read_questionnaire_csv};
pub use report::{ReportRoster, ReportRosterBuilder};
pub use roster::{ClassRoster, build_class_roster, seed_class_codes, transpose_class_roster};
pub use spec::{
    ClassCode, EnumCellValue, RosterError, SpecClassTable, SpecRespondent, SpecRosterOptions,
};
pub use util::{normalize_class_code, parse_class_code, validate_class_code};
