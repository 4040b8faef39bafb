//! Prediction dispatch for the Health Assistant
//!
//! Each condition (diabetes, heart disease, Parkinson's) has a fixed, ordered
//! list of form fields. A [`PredictionDispatcher`] checks the raw text
//! fields for completeness and numeric parseability, hands the resulting
//! single-row feature vector to an injected [`Classifier`] and maps the
//! binary output to one of two labels.

pub mod backends;
pub mod classifier;
pub mod condition;
pub mod dispatcher;
pub mod error;
pub mod set;

pub use backends::linear::{load_artifact, DecisionKind, LinearModel, ModelArtifact, Scaler};
pub use classifier::Classifier;
pub use condition::{Condition, ConditionSpec, FieldSpec, LabelPair};
pub use dispatcher::PredictionDispatcher;
pub use error::{ClassifierError, ModelLoadError, PredictError};
pub use set::DispatcherSet;
