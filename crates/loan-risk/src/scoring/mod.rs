//! Loan default scoring: domain types, frozen artifacts, the inference
//! pipeline, batch CSV scoring, and the prediction HTTP router.

pub mod artifacts;
pub mod batch;
pub mod domain;
pub mod features;
pub mod router;
pub mod service;

pub use artifacts::{
    ArtifactBundle, ArtifactError, ClassifierArtifact, ScalerArtifact, SchemaColumns,
};
pub use batch::{score_file, score_reader, BatchScoreError, ScoredApplicant};
pub use domain::{
    ApplicantRecord, HomeOwnership, PredictionResult, PreviousDefault, RiskBand, RiskLabel,
};
pub use features::FeatureRow;
pub use router::{prediction_router, PredictionResponse};
pub use service::RiskScoringService;
