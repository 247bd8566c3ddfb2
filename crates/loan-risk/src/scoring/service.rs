use std::sync::Arc;

use tracing::debug;

use super::artifacts::ArtifactBundle;
use super::domain::{ApplicantRecord, PredictionResult, RiskLabel};
use super::features::FeatureRow;

/// The inference pipeline. Holds the immutable artifact bundle and turns
/// applicant records into predictions; per-request scoring cannot fail
/// once the bundle has loaded.
pub struct RiskScoringService {
    bundle: Arc<ArtifactBundle>,
}

impl RiskScoringService {
    pub fn new(bundle: ArtifactBundle) -> Self {
        Self {
            bundle: Arc::new(bundle),
        }
    }

    pub fn schema_width(&self) -> usize {
        self.bundle.columns.len()
    }

    /// Run one record through the full pipeline: expand, one-hot encode,
    /// reindex against the frozen schema, scale, classify.
    pub fn predict(&self, record: &ApplicantRecord) -> PredictionResult {
        let row = FeatureRow::from_record(record);
        let vector = row.reindex(&self.bundle.columns);
        let scaled = self.bundle.scaler.transform(&vector);

        let label = if self.bundle.classifier.decide(&scaled) {
            RiskLabel::Default
        } else {
            RiskLabel::NoDefault
        };
        let probability_of_default =
            self.bundle.classifier.probability_of_default(&scaled) * 100.0;

        debug!(
            label = label.label(),
            probability_of_default, "applicant scored"
        );

        PredictionResult {
            label,
            probability_of_default,
        }
    }
}
