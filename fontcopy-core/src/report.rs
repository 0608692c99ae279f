//! Copy reports and their rendering (made by FontLab https://www.fontlab.com/)

use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One font that landed (or, in a dry run, would land) in the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopiedFont {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// A font whose copy failed while the run kept going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: String,
}

/// How a run that got past validation turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    NoFonts,
    Completed,
    Partial,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    pub copied: Vec<CopiedFont>,
    pub failed: Vec<CopyFailure>,
    /// Entries that were not `.ttf` files.
    pub skipped: usize,
    pub dry_run: bool,
}

impl CopyReport {
    /// Whether any `.ttf` file made it across.
    pub fn found(&self) -> bool {
        !self.copied.is_empty()
    }

    pub fn outcome(&self) -> CopyOutcome {
        if !self.failed.is_empty() {
            CopyOutcome::Partial
        } else if self.found() {
            CopyOutcome::Completed
        } else {
            CopyOutcome::NoFonts
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.copied.iter().map(|c| c.bytes).sum()
    }

    /// The single status line printed at the end of a run.
    pub fn status_message(&self) -> String {
        match (self.outcome(), self.dry_run) {
            (CopyOutcome::NoFonts, _) => "No .ttf files found.".to_string(),
            (CopyOutcome::Completed, false) => "Copy completed.".to_string(),
            (CopyOutcome::Completed, true) => {
                format!("Dry run: {} .ttf file(s) would be copied.", self.copied.len())
            }
            (CopyOutcome::Partial, _) => {
                format!("Copy completed with {} failure(s).", self.failed.len())
            }
        }
    }
}

/// Write the report as prettified JSON.
pub fn write_json_pretty(report: &CopyReport, mut w: impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut w, report)?;
    w.write_all(b"\n").map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copied(name: &str, bytes: u64) -> CopiedFont {
        CopiedFont {
            source: PathBuf::from(format!("/fonts/{name}")),
            destination: PathBuf::from(format!("/font_volume/{name}")),
            bytes,
        }
    }

    #[test]
    fn empty_report_means_no_fonts() {
        let report = CopyReport::default();
        assert!(!report.found());
        assert_eq!(report.outcome(), CopyOutcome::NoFonts);
        assert_eq!(report.status_message(), "No .ttf files found.");
    }

    #[test]
    fn failures_win_over_successes() {
        let report = CopyReport {
            copied: vec![copied("A.ttf", 10)],
            failed: vec![CopyFailure {
                source: PathBuf::from("/fonts/B.ttf"),
                destination: PathBuf::from("/font_volume/B.ttf"),
                error: "permission denied".to_string(),
            }],
            ..CopyReport::default()
        };

        assert_eq!(report.outcome(), CopyOutcome::Partial);
        assert_eq!(report.status_message(), "Copy completed with 1 failure(s).");
    }

    #[test]
    fn dry_run_message_counts_planned_fonts() {
        let report = CopyReport {
            copied: vec![copied("A.ttf", 1), copied("C.ttf", 2)],
            dry_run: true,
            ..CopyReport::default()
        };

        assert_eq!(
            report.status_message(),
            "Dry run: 2 .ttf file(s) would be copied."
        );
        assert_eq!(report.total_bytes(), 3);
    }

    #[test]
    fn json_output_round_trips_outcome_fields() {
        let report = CopyReport {
            copied: vec![copied("A.ttf", 4)],
            skipped: 2,
            ..CopyReport::default()
        };
        let mut buf = Vec::new();

        write_json_pretty(&report, &mut buf).expect("write json");

        let parsed: CopyReport = serde_json::from_slice(&buf).expect("parse");
        assert_eq!(parsed, report);
        assert!(String::from_utf8(buf).expect("utf8").ends_with("}\n"));
    }
}
