//! Linear decision-function models loaded from JSON artifacts.
//!
//! An artifact stores the fitted weights of a linear SVM (`kind = "linear"`)
//! or a logistic regression (`kind = "logistic"`), optionally preceded by a
//! standard scaler:
//!
//! ```json
//! {
//!   "name": "diabetes-svm",
//!   "kind": "linear",
//!   "features": ["Pregnancies", "Glucose"],
//!   "weights": [0.21, 0.74],
//!   "bias": -0.9,
//!   "scaler": { "mean": [3.8, 120.9], "scale": [3.4, 32.0] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::Path;

use crate::classifier::Classifier;
use crate::error::{ClassifierError, ModelLoadError};

const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// class 1 when `w·x + b > 0`
    Linear,
    /// class 1 when `sigmoid(w·x + b) >= threshold`
    Logistic,
}

/// Per-feature standardization applied before the decision function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Serialized form of a fitted linear classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub name: String,
    pub kind: DecisionKind,
    /// Optional feature names, in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
}

impl ModelArtifact {
    fn check(&self) -> Result<(), String> {
        let n = self.weights.len();
        if n == 0 {
            return Err("weights must not be empty".into());
        }
        if !self.weights.iter().all(|w| w.is_finite()) || !self.bias.is_finite() {
            return Err("weights and bias must be finite".into());
        }
        if !self.features.is_empty() && self.features.len() != n {
            return Err(format!(
                "{} feature names for {n} weights",
                self.features.len()
            ));
        }
        if let Some(t) = self.threshold {
            if self.kind != DecisionKind::Logistic {
                return Err("threshold is only meaningful for logistic models".into());
            }
            if !(t > 0.0 && t < 1.0) {
                return Err(format!("threshold {t} outside (0, 1)"));
            }
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(format!(
                    "scaler has {}/{} entries for {n} weights",
                    scaler.mean.len(),
                    scaler.scale.len()
                ));
            }
            if !scaler.mean.iter().chain(&scaler.scale).all(|v| v.is_finite()) {
                return Err("scaler entries must be finite".into());
            }
        }
        Ok(())
    }
}

/// A [`Classifier`] evaluating a linear decision function
#[derive(Debug, Clone)]
pub struct LinearModel {
    artifact: ModelArtifact,
}

impl LinearModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelLoadError> {
        artifact.check().map_err(|reason| ModelLoadError::Invalid {
            name: artifact.name.clone(),
            reason,
        })?;
        Ok(Self { artifact })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        load_artifact(path).and_then(Self::from_artifact)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn features(&self) -> &[String] {
        &self.artifact.features
    }

    /// Raw decision value `w·x' + b`, where `x'` is the scaled input
    pub fn decision(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        let a = &self.artifact;
        if features.len() != a.weights.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "expected {} features, got {}",
                a.weights.len(),
                features.len()
            )));
        }
        let dot: f64 = features
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let x = match &a.scaler {
                    Some(s) => {
                        let scale = if s.scale[i] == 0.0 { 1.0 } else { s.scale[i] };
                        (x - s.mean[i]) / scale
                    }
                    None => *x,
                };
                x * a.weights[i]
            })
            .sum();
        Ok(dot + a.bias)
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError> {
        let z = self.decision(features)?;
        if z.is_nan() {
            return Err(ClassifierError::InferenceFailed(
                "decision value is NaN".into(),
            ));
        }
        let positive = match self.artifact.kind {
            DecisionKind::Linear => z > 0.0,
            DecisionKind::Logistic => {
                let p = 1.0 / (1.0 + (-z).exp());
                p >= self.artifact.threshold.unwrap_or(DEFAULT_THRESHOLD)
            }
        };
        Ok(i64::from(positive))
    }

    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn input_len(&self) -> Option<usize> {
        Some(self.artifact.weights.len())
    }
}

/// Read a JSON model artifact. A missing file is reported as `NotFound`.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, ModelLoadError> {
    let path = path.as_ref();
    let text = read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ModelLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModelLoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let mut artifact =
        serde_json::from_str::<ModelArtifact>(&text).map_err(|e| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    if artifact.name.is_empty() {
        artifact.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
    }
    Ok(artifact)
}
