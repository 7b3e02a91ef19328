//! Command implementations, independent of argument parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use inflammation_ingest::load_csv;
use inflammation_model::{Named, Observation, Patient};
use inflammation_persistence::{PatientJsonSerializer, PersistenceError, Serializer};
use inflammation_stats::{Table, daily_max, daily_mean, daily_min, patient_normalise};

use crate::logging::redact_value;

/// Per-day statistics of one CSV table.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub source: PathBuf,
    pub patients: usize,
    pub mean: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
}

pub fn run_analyse(files: &[PathBuf]) -> Result<Vec<DailySummary>> {
    files
        .iter()
        .map(|path| {
            let _span = info_span!("analyse", path = %path.display()).entered();
            let table = load_csv(path).with_context(|| format!("load {}", path.display()))?;
            debug!(
                patients = table.n_rows(),
                days = table.n_columns(),
                "Computing daily statistics"
            );
            Ok(DailySummary {
                source: path.clone(),
                patients: table.n_rows(),
                mean: daily_mean(&table),
                max: daily_max(&table),
                min: daily_min(&table),
            })
        })
        .collect()
}

pub fn run_normalise(file: &Path) -> Result<Table> {
    let table = load_csv(file).with_context(|| format!("load {}", file.display()))?;
    patient_normalise(&table).with_context(|| format!("normalise {}", file.display()))
}

/// Build one patient per table row and save them to `output`.
///
/// Row `i` becomes `"<prefix> <i + 1>"`, with one observation per day.
pub fn run_patients_from_csv(file: &Path, output: &Path, prefix: &str) -> Result<Vec<Patient>> {
    let table = load_csv(file).with_context(|| format!("load {}", file.display()))?;
    let patients = patients_from_table(&table, prefix);
    PatientJsonSerializer
        .save(&patients, output)
        .with_context(|| format!("save {}", output.display()))?;
    info!(
        patients = patients.len(),
        output = %output.display(),
        "Created patient records"
    );
    Ok(patients)
}

pub fn patients_from_table(table: &Table, prefix: &str) -> Vec<Patient> {
    table
        .rows()
        .enumerate()
        .map(|(index, row)| {
            let mut patient = Patient::new(format!("{prefix} {}", index + 1));
            for &value in row {
                patient.add_observation(value, None);
            }
            patient
        })
        .collect()
}

pub fn run_patients_show(file: &Path) -> Result<Vec<Patient>> {
    PatientJsonSerializer
        .load(file)
        .with_context(|| format!("load {}", file.display()))
}

/// Append an observation to the named patient in `file`.
///
/// A missing file starts an empty record set; a missing patient is created.
pub fn run_patients_add(
    file: &Path,
    name: &str,
    value: f64,
    day: Option<u32>,
) -> Result<Observation> {
    let mut patients = if file.exists() {
        PatientJsonSerializer
            .load(file)
            .with_context(|| format!("load {}", file.display()))?
    } else {
        debug!(path = %file.display(), "Record file not found, starting empty");
        Vec::new()
    };

    let index = match patients.iter().position(|p| p.name() == name) {
        Some(index) => index,
        None => {
            info!(patient = redact_value(name), "Adding new patient");
            patients.push(Patient::new(name));
            patients.len() - 1
        }
    };
    let observation = *patients[index].add_observation(value, day);

    PatientJsonSerializer
        .save(&patients, file)
        .with_context(|| format!("save {}", file.display()))?;
    info!(
        patient = redact_value(name),
        day = observation.day,
        "Recorded observation"
    );
    Ok(observation)
}

/// Render a command failure for the terminal.
///
/// Storage errors are shown with their user message and hint; anything else
/// falls back to the context chain.
pub fn error_report(error: &anyhow::Error) -> String {
    let persistence = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<PersistenceError>());
    match persistence {
        Some(cause) => {
            let mut report = format!("{error}: {}", cause.user_message());
            if let Some(hint) = cause.suggestion() {
                report.push_str("\nhint: ");
                report.push_str(&hint);
            }
            report
        }
        None => format!("{error:#}"),
    }
}
