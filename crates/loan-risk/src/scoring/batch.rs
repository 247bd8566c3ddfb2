//! Batch scoring over CSV exports of applicant records.
//!
//! Each row deserializes into the same [`ApplicantRecord`] the HTTP
//! endpoint accepts and runs through the identical pipeline, so batch and
//! interactive verdicts can never diverge.

use std::io::Read;
use std::path::Path;

use super::domain::{ApplicantRecord, PredictionResult};
use super::service::RiskScoringService;

/// One scored CSV row. `line` is 1-based and counts data rows, matching
/// how operators read the export in a spreadsheet minus its header.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredApplicant {
    pub line: usize,
    pub record: ApplicantRecord,
    pub result: PredictionResult,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchScoreError {
    #[error("failed to read applicant CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Score every record in a CSV file with a header row.
pub fn score_file(
    service: &RiskScoringService,
    path: &Path,
) -> Result<Vec<ScoredApplicant>, BatchScoreError> {
    let file = std::fs::File::open(path)?;
    score_reader(service, file)
}

/// Score every record read from CSV data with a header row.
pub fn score_reader<R: Read>(
    service: &RiskScoringService,
    reader: R,
) -> Result<Vec<ScoredApplicant>, BatchScoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scored = Vec::new();
    for (index, row) in csv_reader.deserialize::<ApplicantRecord>().enumerate() {
        let record = row?;
        let result = service.predict(&record);
        scored.push(ScoredApplicant {
            line: index + 1,
            record,
            result,
        });
    }

    Ok(scored)
}
