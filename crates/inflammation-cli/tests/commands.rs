//! Integration tests for the CLI commands.

use std::fs;

use inflammation_cli::commands::{
    error_report, patients_from_table, run_analyse, run_normalise, run_patients_add,
    run_patients_from_csv, run_patients_show,
};
use inflammation_model::{Named, Observation};
use inflammation_stats::Table;
use tempfile::tempdir;

const CSV: &str = "0,1,2\n2,2,4\n1,3,1\n";

#[test]
fn analyse_reports_each_file() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    fs::write(&first, CSV).unwrap();
    fs::write(&second, "5,5\n").unwrap();

    let summaries = run_analyse(&[first.clone(), second]).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].source, first);
    assert_eq!(summaries[0].patients, 3);
    assert_eq!(summaries[0].mean, vec![1.0, 2.0, 7.0 / 3.0]);
    assert_eq!(summaries[0].max, vec![2.0, 3.0, 4.0]);
    assert_eq!(summaries[0].min, vec![0.0, 1.0, 1.0]);
    assert_eq!(summaries[1].mean, summaries[1].max);
}

#[test]
fn analyse_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    let err = run_analyse(&[dir.path().join("missing.csv")]).unwrap_err();
    assert!(format!("{err:#}").contains("CSV file not found"));
}

#[test]
fn normalise_scales_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, CSV).unwrap();

    let normalised = run_normalise(&path).unwrap();

    assert_eq!(normalised.row(0), &[0.0, 0.5, 1.0]);
    assert_eq!(normalised.row(1), &[0.5, 0.5, 1.0]);
}

#[test]
fn normalise_rejects_negative_readings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "1,-2\n").unwrap();

    let err = run_normalise(&path).unwrap_err();
    assert!(format!("{err:#}").contains("should not be negative"));
}

#[test]
fn patients_from_table_uses_rows_and_days() {
    let table = Table::from_rows([[0.0, 1.0], [2.0, 3.0]]).unwrap();
    let patients = patients_from_table(&table, "Subject");

    assert_eq!(patients.len(), 2);
    assert_eq!(patients[1].name(), "Subject 2");
    assert_eq!(
        patients[1].observations(),
        &[Observation::new(0, 2.0), Observation::new(1, 3.0)]
    );
}

#[test]
fn patients_round_trip_through_files() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("data.csv");
    let json = dir.path().join("patients.json");
    fs::write(&csv, CSV).unwrap();

    let created = run_patients_from_csv(&csv, &json, "Patient").unwrap();
    let shown = run_patients_show(&json).unwrap();

    assert_eq!(shown, created);
    assert_eq!(shown[2].last_observation().unwrap(), &Observation::new(2, 1.0));
}

#[test]
fn add_appends_to_existing_patient() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("data.csv");
    let json = dir.path().join("patients.json");
    fs::write(&csv, CSV).unwrap();
    run_patients_from_csv(&csv, &json, "Patient").unwrap();

    let added = run_patients_add(&json, "Patient 1", 9.0, None).unwrap();
    assert_eq!(added, Observation::new(3, 9.0));

    let patients = run_patients_show(&json).unwrap();
    assert_eq!(patients.len(), 3);
    assert_eq!(patients[0].len(), 4);
}

#[test]
fn add_creates_file_and_patient() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("new.json");

    assert_eq!(
        run_patients_add(&json, "Alice", 5.0, None).unwrap(),
        Observation::new(0, 5.0)
    );
    assert_eq!(
        run_patients_add(&json, "Alice", 3.0, None).unwrap(),
        Observation::new(1, 3.0)
    );
    assert_eq!(
        run_patients_add(&json, "Alice", 1.0, Some(10)).unwrap(),
        Observation::new(10, 1.0)
    );
    run_patients_add(&json, "Bob", 2.0, None).unwrap();

    let patients = run_patients_show(&json).unwrap();
    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].last_observation().unwrap().day, 10);
    assert_eq!(patients[1].name(), "Bob");
}

#[test]
fn add_rejects_nan_and_keeps_file() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("patients.json");
    run_patients_add(&json, "Alice", 1.0, None).unwrap();

    let err = run_patients_add(&json, "Alice", f64::NAN, None).unwrap_err();
    let report = error_report(&err);

    assert!(report.starts_with(&format!("save {}", json.display())));
    assert!(report.contains("patient 'Alice' is not a finite number"));
    assert!(report.contains("\nhint: Replace NaN"));
    assert_eq!(run_patients_show(&json).unwrap()[0].len(), 1);
}

#[test]
fn error_report_shows_storage_hint() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("patients.json");
    fs::write(&json, r#"[{"name": "Eve"}]"#).unwrap();

    let report = error_report(&run_patients_show(&json).unwrap_err());

    assert!(report.contains("Patient record 1 is invalid"));
    assert!(report.contains("hint: Each record needs 'name' and 'observations'"));
}

#[test]
fn error_report_falls_back_to_context_chain() {
    let dir = tempdir().unwrap();
    let err = run_normalise(&dir.path().join("missing.csv")).unwrap_err();

    let report = error_report(&err);

    assert!(report.starts_with("load "));
    assert!(report.contains("CSV file not found"));
    assert!(!report.contains("hint:"));
}
