//! End-to-end import tests.
//!
//! These run the importer against a shell script standing in for `pass`,
//! with real skip and success log files on disk.

#![cfg(unix)]

use keyring2pass_cli::{ImportOptions, Importer};
use keyring2pass_core::types::{sort_by_label, without_skipped};
use keyring2pass_core::{SecretEntry, SkipSet, SuccessLog};
use keyring2pass_integration_tests::{recording_pass, Answers};
use tempfile::TempDir;

fn keyring() -> Vec<SecretEntry> {
    let mut entries = vec![
        SecretEntry::new("site/b", "p2"),
        SecretEntry::new("mail", "m0"),
        SecretEntry::new("site/a", "p1"),
    ];
    sort_by_label(&mut entries);
    entries
}

#[tokio::test]
async fn test_import_then_resume_from_success_log() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("inserted");
    let log_path = dir.path().join("success.log");

    // First run: "mail" is declined, "site/a" is imported, then input ends.
    let sink = recording_pass(&record, &[]);
    let mut answers = Answers::new(&["n", "y", ""]);
    let mut out = Vec::new();
    let skip = SkipSet::load(&log_path).unwrap();
    let entries = without_skipped(keyring(), &skip);
    let result = Importer::new(&mut answers, &sink, &mut out, ImportOptions::default())
        .with_success_log(SuccessLog::open(&log_path).unwrap())
        .run(&entries)
        .await;
    assert!(result.is_err(), "running out of answers cancels the run");
    assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "site/a\n");

    // Second run with the success log as skip list: only mail and site/b remain.
    let skip = SkipSet::load(&log_path).unwrap();
    let entries = without_skipped(keyring(), &skip);
    let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["mail", "site/b"]);

    let mut answers = Answers::new(&["y", "email/personal", "y", ""]);
    let mut out = Vec::new();
    let summary = Importer::new(&mut answers, &sink, &mut out, ImportOptions::default())
        .with_success_log(SuccessLog::open(&log_path).unwrap())
        .run(&entries)
        .await
        .unwrap();
    assert_eq!(summary.imported, 2);

    assert_eq!(
        std::fs::read_to_string(&log_path).unwrap(),
        "site/a\nmail\nsite/b\n"
    );
    assert_eq!(
        std::fs::read_to_string(&record).unwrap(),
        "insert imported/site/a|p1|p1\n\
         insert email/personal|m0|m0\n\
         insert imported/site/b|p2|p2\n"
    );
}

#[tokio::test]
async fn test_rejected_insert_is_not_logged() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("inserted");
    let log_path = dir.path().join("success.log");

    let sink = recording_pass(&record, &["imported/mail"]);
    let mut answers = Answers::new(&["y", "y", "y"]);
    let mut out = Vec::new();
    let options = ImportOptions {
        overwrite: true,
        ask: false,
        ..Default::default()
    };

    let summary = Importer::new(&mut answers, &sink, &mut out, options)
        .with_success_log(SuccessLog::open(&log_path).unwrap())
        .run(&keyring())
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.imported, 2);
    assert!(answers.asked.iter().all(|p| !p.starts_with("Import path")));
    assert_eq!(
        std::fs::read_to_string(&log_path).unwrap(),
        "site/a\nsite/b\n"
    );
    assert_eq!(
        std::fs::read_to_string(&record).unwrap(),
        "insert -f imported/site/a|p1|p1\n\
         insert -f imported/site/b|p2|p2\n"
    );

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Something went wrong..."));
    assert!(out.contains("Error: refusing imported/mail"));
}
