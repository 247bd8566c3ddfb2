//! Frozen training artifacts: classifier, scaler, and schema columns.
//!
//! All three are opaque state produced by an offline training pipeline and
//! serialized as JSON. They are loaded once at startup and never mutated;
//! a load failure is fatal and prevents the service from serving.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

pub const CLASSIFIER_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const COLUMNS_FILE: &str = "columns.json";

/// Serialized logistic-regression state: one weight per schema column plus
/// an intercept. The crate executes this state, it does not fit it.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl ClassifierArtifact {
    fn decision_value(&self, scaled: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(scaled)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// The classifier's own decision rule: class 1 (default) when the
    /// decision function is positive.
    pub fn decide(&self, scaled: &[f64]) -> bool {
        self.decision_value(scaled) > 0.0
    }

    /// P(class=1) for the scaled vector, in [0, 1].
    pub fn probability_of_default(&self, scaled: &[f64]) -> f64 {
        let z = self.decision_value(scaled);
        1.0 / (1.0 + (-z).exp())
    }
}

/// Per-column standardization parameters fitted at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerArtifact {
    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect()
    }
}

/// The ordered feature space frozen at training time. Every vector handed
/// to the scaler and classifier must match this set and order exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaColumns(Vec<String>);

impl SchemaColumns {
    pub fn new(columns: Vec<String>) -> Self {
        Self(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|column| column == name)
    }
}

/// Immutable bundle of all three artifacts, shared by reference for the
/// lifetime of the process.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub columns: SchemaColumns,
    pub scaler: ScalerArtifact,
    pub classifier: ClassifierArtifact,
}

impl ArtifactBundle {
    /// Load and cross-validate the bundle from a directory containing
    /// `model.json`, `scaler.json`, and `columns.json`.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let columns: SchemaColumns = read_artifact(&dir.join(COLUMNS_FILE))?;
        let scaler: ScalerArtifact = read_artifact(&dir.join(SCALER_FILE))?;
        let classifier: ClassifierArtifact = read_artifact(&dir.join(CLASSIFIER_FILE))?;

        let bundle = Self::from_parts(columns, scaler, classifier)?;
        info!(
            dir = %dir.display(),
            columns = bundle.columns.len(),
            "scoring artifacts loaded"
        );
        Ok(bundle)
    }

    /// Assemble a bundle from already-deserialized parts, enforcing the
    /// dimensional contract between them.
    pub fn from_parts(
        columns: SchemaColumns,
        scaler: ScalerArtifact,
        classifier: ClassifierArtifact,
    ) -> Result<Self, ArtifactError> {
        if columns.is_empty() {
            return Err(ArtifactError::EmptySchema);
        }

        let expected = columns.len();
        if scaler.mean.len() != expected || scaler.scale.len() != expected {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "scaler",
                expected,
                found: scaler.mean.len().max(scaler.scale.len()),
            });
        }
        if classifier.weights.len() != expected {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "classifier",
                expected,
                found: classifier.weights.len(),
            });
        }

        if let Some(position) = scaler
            .scale
            .iter()
            .position(|value| !value.is_finite() || *value == 0.0)
        {
            return Err(ArtifactError::DegenerateScale {
                column: columns.0[position].clone(),
            });
        }

        Ok(Self {
            columns,
            scaler,
            classifier,
        })
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Fatal startup failure: an artifact is absent or incompatible.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact {path} could not be read: {source}")]
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("artifact {path} is not valid JSON for its contract: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("schema column list is empty")]
    EmptySchema,
    #[error("{artifact} artifact covers {found} columns, schema has {expected}")]
    DimensionMismatch {
        artifact: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("scaler has a zero or non-finite scale for column '{column}'")]
    DegenerateScale { column: String },
}
