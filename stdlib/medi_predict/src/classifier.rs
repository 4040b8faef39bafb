use crate::error::ClassifierError;

/// Opaque pre-fitted binary classifier.
///
/// Implementations receive one row of features in the condition's field
/// order and return the predicted class. Only `1` is treated as positive.
pub trait Classifier: Send + Sync {
    /// Predict the class of a single row
    fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError>;

    /// Get classifier name/identifier
    fn name(&self) -> &str;

    /// Number of features the classifier expects, if known
    fn input_len(&self) -> Option<usize> {
        None
    }
}
