//! Validation-and-inference wrapper for one condition

use std::sync::Arc;

use crate::classifier::Classifier;
use crate::condition::ConditionSpec;
use crate::error::PredictError;

/// Turns raw form fields into a label for one condition.
///
/// Stateless between calls; the classifier is only invoked once every field
/// is present and numeric.
#[derive(Clone)]
pub struct PredictionDispatcher {
    spec: ConditionSpec,
    classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for PredictionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionDispatcher")
            .field("condition", &self.spec.name)
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

impl PredictionDispatcher {
    pub fn new(spec: ConditionSpec, classifier: Arc<dyn Classifier>) -> Self {
        Self { spec, classifier }
    }

    pub fn spec(&self) -> &ConditionSpec {
        &self.spec
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Check completeness, then numeric parseability, in field order.
    ///
    /// Only the empty string counts as missing. Whitespace-only and
    /// non-finite values are invalid numbers.
    pub fn parse_fields<S: AsRef<str>>(&self, raw: &[S]) -> Result<Vec<f64>, PredictError> {
        if raw.len() != self.spec.arity() {
            return Err(PredictError::FieldCount {
                expected: self.spec.arity(),
                actual: raw.len(),
            });
        }

        if let Some((field, _)) = self
            .spec
            .fields
            .iter()
            .zip(raw)
            .find(|&(_, value)| value.as_ref().is_empty())
        {
            return Err(PredictError::IncompleteInput {
                field: field.key.clone(),
            });
        }

        self.spec
            .fields
            .iter()
            .zip(raw)
            .map(|(field, value)| {
                let value = value.as_ref();
                match value.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    _ => Err(PredictError::InvalidNumber {
                        field: field.key.clone(),
                        value: value.to_string(),
                    }),
                }
            })
            .collect()
    }

    /// Validate `raw`, run the classifier once and return the matching label
    pub fn predict<S: AsRef<str>>(&self, raw: &[S]) -> Result<String, PredictError> {
        let features = self.parse_fields(raw)?;
        let output = self.classifier.predict(&features)?;
        Ok(self.label_for(output).to_string())
    }

    /// `1` maps to the positive label, anything else to the negative one
    pub fn label_for(&self, output: i64) -> &str {
        if output == 1 {
            &self.spec.labels.positive
        } else {
            &self.spec.labels.negative
        }
    }
}
