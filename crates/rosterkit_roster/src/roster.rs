//! Person -> classes to class -> people inversion and table transpose.

use std::collections::HashMap;

use tracing::debug;

use crate::report::ReportRosterBuilder;
use crate::spec::{ClassCode, SpecClassTable, SpecRespondent};
use crate::util::parse_class_code;

/// Insertion-ordered mapping from normalized class code to member names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRoster {
    l_class_codes: Vec<ClassCode>,
    l_members: Vec<Vec<String>>,
    dict_idx_by_code: HashMap<ClassCode, usize>,
}

impl ClassRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct class codes.
    pub fn len(&self) -> usize {
        self.l_class_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l_class_codes.is_empty()
    }

    /// Class codes in first-seen order.
    pub fn class_codes(&self) -> &[ClassCode] {
        &self.l_class_codes
    }

    /// Members of `code`, in processing order.
    pub fn members(&self, code: &str) -> Option<&[String]> {
        self.dict_idx_by_code
            .get(code)
            .map(|n_idx| self.l_members[*n_idx].as_slice())
    }

    /// Iterate `(code, members)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassCode, &[String])> {
        self.l_class_codes
            .iter()
            .zip(self.l_members.iter().map(Vec::as_slice))
    }

    /// Length of the longest member list.
    pub fn width_max(&self) -> usize {
        self.l_members.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Insert `code` with an empty member list if absent; return its row index.
    pub fn ensure_class(&mut self, code: ClassCode) -> usize {
        if let Some(n_idx) = self.dict_idx_by_code.get(&code) {
            return *n_idx;
        }
        let n_idx = self.l_class_codes.len();
        self.dict_idx_by_code.insert(code.clone(), n_idx);
        self.l_class_codes.push(code);
        self.l_members.push(Vec::new());
        n_idx
    }

    /// Append `name` to the member list of `code`, creating the class if needed.
    pub fn push_member(&mut self, code: ClassCode, name: &str) {
        let n_idx = self.ensure_class(code);
        self.l_members[n_idx].push(name.to_string());
    }
}

/// Collect every valid class code with an empty member list.
///
/// Key order matches [`build_class_roster`] on the same input.
pub fn seed_class_codes(respondents: &[SpecRespondent]) -> ClassRoster {
    let mut roster = ClassRoster::new();
    for respondent in respondents {
        for cell in &respondent.classes {
            if let Some(code) = parse_class_code(cell) {
                roster.ensure_class(code);
            }
        }
    }
    roster
}

/// Invert respondents' class slots into a class -> members roster.
///
/// Respondents are processed in order and slots in slot order. Malformed or
/// blank slots are skipped; a respondent listing the same class twice appears
/// twice in that class's member list.
pub fn build_class_roster(
    respondents: &[SpecRespondent],
    report: &mut ReportRosterBuilder,
) -> ClassRoster {
    let mut roster = ClassRoster::new();

    for respondent in respondents {
        report.add_respondent();
        for cell in &respondent.classes {
            report.add_scanned();
            match parse_class_code(cell) {
                Some(code) => {
                    debug!(name = %respondent.name, class = %code, "class accepted");
                    report.add_accepted();
                    roster.push_member(code, &respondent.name);
                }
                None => {
                    if !cell.is_missing() {
                        debug!(name = %respondent.name, cell = ?cell, "class rejected");
                        report.add_rejected();
                    }
                }
            }
        }
    }

    roster
}

/// Transpose the roster into a rectangular table padded with `None`.
pub fn transpose_class_roster(roster: &ClassRoster) -> SpecClassTable {
    let n_width = roster.width_max();

    let mut l_rows = Vec::with_capacity(roster.len());
    for (_, members) in roster.iter() {
        let mut l_row: Vec<Option<String>> = members.iter().cloned().map(Some).collect();
        l_row.resize(n_width, None);
        l_rows.push(l_row);
    }

    SpecClassTable {
        class_codes: roster.class_codes().to_vec(),
        rows: l_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::EnumCellValue;

    fn derive_sample_respondents() -> Vec<SpecRespondent> {
        vec![
            SpecRespondent::new("Alice", ["CS101", "", "", "", "", ""]),
            SpecRespondent::new("Bob", ["cs 101", "MATH2B", "", "", "", ""]),
        ]
    }

    #[test]
    fn test_build_class_roster_inverts_in_order() {
        let mut report = ReportRosterBuilder::default();
        let roster = build_class_roster(&derive_sample_respondents(), &mut report);

        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.members("CS 101"),
            Some(&["Alice".to_string(), "Bob".to_string()][..])
        );
        assert_eq!(roster.members("MATH 2B"), Some(&["Bob".to_string()][..]));
        assert_eq!(roster.members("CS101"), None);

        let report = report.build(roster.len());
        assert_eq!(report.cnt_respondents, 2);
        assert_eq!(report.cnt_slots_scanned, 12);
        assert_eq!(report.cnt_slots_accepted, 3);
        assert_eq!(report.cnt_slots_rejected, 0);
        assert_eq!(report.cnt_classes, 2);
    }

    #[test]
    fn test_build_class_roster_keeps_duplicates_and_drops_invalid() {
        let respondents = vec![
            SpecRespondent::new(
                "Carol",
                vec![
                    EnumCellValue::from("bio20h"),
                    EnumCellValue::from("BIO 20H"),
                    EnumCellValue::from("101"),
                    EnumCellValue::Number(f64::NAN),
                    EnumCellValue::None,
                    EnumCellValue::from("none"),
                ],
            ),
        ];
        let mut report = ReportRosterBuilder::default();
        let roster = build_class_roster(&respondents, &mut report);

        assert_eq!(
            roster.members("BIO 20H"),
            Some(&["Carol".to_string(), "Carol".to_string()][..])
        );
        assert_eq!(roster.len(), 1);
        assert_eq!(report.build(roster.len()).cnt_slots_rejected, 2);
    }

    #[test]
    fn test_keys_are_always_normalized() {
        let respondents = vec![SpecRespondent::new(
            "Dan",
            ["  phys7a", "Phys 7A", "econ1", "ECON 1"],
        )];
        let roster = build_class_roster(&respondents, &mut ReportRosterBuilder::default());

        let l_codes: Vec<&str> = roster.class_codes().iter().map(ClassCode::as_str).collect();
        assert_eq!(l_codes, vec!["PHYS 7A", "ECON 1"]);
        for code in roster.class_codes() {
            assert_eq!(code.as_str(), code.as_str().to_uppercase());
            assert!(code.as_str().contains(' '));
        }
    }

    #[test]
    fn test_seed_class_codes_matches_single_pass_keys() {
        let respondents = derive_sample_respondents();
        let roster_seeded = seed_class_codes(&respondents);
        let roster_built = build_class_roster(&respondents, &mut ReportRosterBuilder::default());

        assert_eq!(roster_seeded.class_codes(), roster_built.class_codes());
        assert!(roster_seeded.iter().all(|(_, members)| members.is_empty()));
    }

    #[test]
    fn test_transpose_class_roster_pads_rows() {
        let roster =
            build_class_roster(&derive_sample_respondents(), &mut ReportRosterBuilder::default());
        let table = transpose_class_roster(&roster);

        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(
            table.rows[0],
            vec![Some("Alice".to_string()), Some("Bob".to_string())]
        );
        assert_eq!(table.rows[1], vec![Some("Bob".to_string()), None]);
    }

    #[test]
    fn test_transpose_empty_roster() {
        let table = transpose_class_roster(&ClassRoster::new());
        assert_eq!(table.height(), 0);
        assert_eq!(table.width(), 0);
    }
}
