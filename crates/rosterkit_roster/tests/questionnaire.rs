use std::fs;
use std::path::PathBuf;

use rosterkit_roster::{
    ReportRosterBuilder, RosterError, SpecRosterOptions, build_class_roster, extract_respondents,
    read_questionnaire_csv, transpose_class_roster,
};
use tempfile::TempDir;

const C_HEADER: &str =
    "Timestamp,Full Name,Class #1:,Class #2:,Class #3:,Class #4:,Class #5:,Class #6:";

fn write_csv(dir: &TempDir, file_name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, body).expect("write csv");
    path
}

#[test]
fn questionnaire_csv_inverts_into_class_table() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "responses.csv",
        &format!(
            "{C_HEADER}\n\
             2024-01-01,Alice,CS101,,,,,\n\
             2024-01-02,Bob,cs 101,MATH2B,,,,\n\
             2024-01-03,Carol,math 2b,101,tbd,bio20h,,\n"
        ),
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let mut report = ReportRosterBuilder::default();
    let respondents =
        extract_respondents(&df, &SpecRosterOptions::default(), &mut report).expect("extract");
    assert_eq!(respondents.len(), 3);
    assert!(respondents.iter().all(|r| r.classes.len() == 6));

    let roster = build_class_roster(&respondents, &mut report);
    let l_codes: Vec<&str> = roster.class_codes().iter().map(|c| c.as_str()).collect();
    assert_eq!(l_codes, vec!["CS 101", "MATH 2B", "BIO 20H"]);
    assert_eq!(
        roster.members("MATH 2B"),
        Some(&["Bob".to_string(), "Carol".to_string()][..])
    );

    let table = transpose_class_roster(&roster);
    assert_eq!(table.height(), 3);
    assert_eq!(table.width(), 2);

    let report = report.build(roster.len());
    assert_eq!(report.cnt_respondents, 3);
    assert_eq!(report.cnt_slots_scanned, 18);
    assert_eq!(report.cnt_slots_accepted, 5);
    assert_eq!(report.cnt_slots_rejected, 2);
}

#[test]
fn numeric_only_slot_column_is_rejected_not_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "numeric.csv",
        &format!("{C_HEADER}\nt,Alice,CS101,101,,,,\nt,Bob,,202,,,,\n"),
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let mut report = ReportRosterBuilder::default();
    let respondents =
        extract_respondents(&df, &SpecRosterOptions::default(), &mut report).expect("extract");
    let roster = build_class_roster(&respondents, &mut report);

    assert_eq!(roster.len(), 1);
    assert_eq!(report.build(roster.len()).cnt_slots_rejected, 2);
}

#[test]
fn missing_name_column_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "no_name.csv",
        "Email,Class #1:,Class #2:,Class #3:,Class #4:,Class #5:,Class #6:\na@b.c,CS101,,,,,\n",
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let err = extract_respondents(
        &df,
        &SpecRosterOptions::default(),
        &mut ReportRosterBuilder::default(),
    )
    .expect_err("must fail");
    assert!(matches!(err, RosterError::MissingNameColumn { .. }));
}

#[test]
fn empty_questionnaire_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(&dir, "empty.csv", &format!("{C_HEADER}\n"));

    let df = read_questionnaire_csv(&path).expect("read csv");
    let err = extract_respondents(
        &df,
        &SpecRosterOptions::default(),
        &mut ReportRosterBuilder::default(),
    )
    .expect_err("must fail");
    assert!(matches!(err, RosterError::EmptyNameColumn { .. }));
}

#[test]
fn blank_name_column_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "blank_names.csv",
        &format!("{C_HEADER}
t,,CS101,,,,,
t,,MATH2B,,,,,
"),
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let mut report = ReportRosterBuilder::default();
    let err = extract_respondents(&df, &SpecRosterOptions::default(), &mut report)
        .expect_err("must fail");
    assert!(matches!(err, RosterError::EmptyNameColumn { ref column } if column == "Full Name"));
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn na_markers_are_missing_slots() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "na_markers.csv",
        &format!(
            "{C_HEADER}
             t,Alice,CS101,N/A,n/a,NA,,
             t,Bob,math2b,NULL,nan,None,#N/A,
"
        ),
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let mut report = ReportRosterBuilder::default();
    let respondents =
        extract_respondents(&df, &SpecRosterOptions::default(), &mut report).expect("extract");
    let roster = build_class_roster(&respondents, &mut report);

    let l_codes: Vec<&str> = roster.class_codes().iter().map(|c| c.as_str()).collect();
    assert_eq!(l_codes, vec!["CS 101", "MATH 2B"]);

    let report = report.build(roster.len());
    assert_eq!(report.cnt_slots_accepted, 2);
    assert_eq!(report.cnt_slots_rejected, 0);
}

#[test]
fn missing_slot_header_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "five_slots.csv",
        "Name,Class #1:,Class #2:,Class #3:,Class #4:,Class #5:\nAlice,CS101,,,,\n",
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let err = extract_respondents(
        &df,
        &SpecRosterOptions::default(),
        &mut ReportRosterBuilder::default(),
    )
    .expect_err("must fail");
    assert!(matches!(err, RosterError::MissingClassColumn(ref h) if h == "Class #6:"));
}

#[test]
fn blank_names_and_extra_class_columns_become_warnings() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_csv(
        &dir,
        "warnings.csv",
        &format!(
            "{C_HEADER},Favorite class?\n\
             t,Alice,CS101,,,,,,CS 101\n\
             t,,MATH2B,,,,,,\n"
        ),
    );

    let df = read_questionnaire_csv(&path).expect("read csv");
    let mut report = ReportRosterBuilder::default();
    let respondents =
        extract_respondents(&df, &SpecRosterOptions::default(), &mut report).expect("extract");

    assert_eq!(respondents.len(), 1);
    assert_eq!(respondents[0].name, "Alice");
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = read_questionnaire_csv(&dir.path().join("absent.csv")).expect_err("must fail");
    assert!(matches!(err, RosterError::Read { .. }));
}
