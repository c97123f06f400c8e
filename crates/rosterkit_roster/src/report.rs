//! Roster report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters and diagnostics for one questionnaire -> roster run.
#[derive(Debug, Default, Clone)]
pub struct ReportRoster {
    /// Respondent rows kept for inversion.
    pub cnt_respondents: u64,
    /// Class slot cells inspected.
    pub cnt_slots_scanned: u64,
    /// Slot cells that produced a normalized class code.
    pub cnt_slots_accepted: u64,
    /// Non-blank slot cells dropped as malformed.
    pub cnt_slots_rejected: u64,
    /// Distinct normalized class codes.
    pub cnt_classes: u64,
    /// Non-fatal warnings collected during extraction.
    pub warnings: Vec<String>,
}

impl ReportRoster {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_respondents".to_string(), self.cnt_respondents);
        dict_counts.insert("cnt_slots_scanned".to_string(), self.cnt_slots_scanned);
        dict_counts.insert("cnt_slots_accepted".to_string(), self.cnt_slots_accepted);
        dict_counts.insert("cnt_slots_rejected".to_string(), self.cnt_slots_rejected);
        dict_counts.insert("cnt_classes".to_string(), self.cnt_classes);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} respondents={} scanned={} accepted={} rejected={} classes={} warnings={}",
            dict_counts["cnt_respondents"],
            dict_counts["cnt_slots_scanned"],
            dict_counts["cnt_slots_accepted"],
            dict_counts["cnt_slots_rejected"],
            dict_counts["cnt_classes"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[ROSTER]"))
    }
}

/// Mutable accumulator for roster statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportRosterBuilder {
    /// See [`ReportRoster::cnt_respondents`].
    pub cnt_respondents: u64,
    /// See [`ReportRoster::cnt_slots_scanned`].
    pub cnt_slots_scanned: u64,
    /// See [`ReportRoster::cnt_slots_accepted`].
    pub cnt_slots_accepted: u64,
    /// See [`ReportRoster::cnt_slots_rejected`].
    pub cnt_slots_rejected: u64,
    /// See [`ReportRoster::warnings`].
    pub warnings: Vec<String>,
}

impl ReportRosterBuilder {
    /// Increment respondent count by one.
    pub fn add_respondent(&mut self) {
        self.cnt_respondents += 1;
    }

    /// Increment scanned slot count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_slots_scanned += 1;
    }

    /// Increment accepted slot count by one.
    pub fn add_accepted(&mut self) {
        self.cnt_slots_accepted += 1;
    }

    /// Increment rejected slot count by one.
    pub fn add_rejected(&mut self) {
        self.cnt_slots_rejected += 1;
    }

    /// Add warning message; also emitted through `tracing`.
    pub fn add_warning(&mut self, warning: String) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self, cnt_classes: usize) -> ReportRoster {
        ReportRoster {
            cnt_respondents: self.cnt_respondents,
            cnt_slots_scanned: self.cnt_slots_scanned,
            cnt_slots_accepted: self.cnt_slots_accepted,
            cnt_slots_rejected: self.cnt_slots_rejected,
            cnt_classes: cnt_classes as u64,
            warnings: self.warnings,
        }
    }
}
