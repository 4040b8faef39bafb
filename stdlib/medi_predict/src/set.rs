//! Startup loading of one dispatcher per condition

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::backends::linear::LinearModel;
use crate::classifier::Classifier;
use crate::condition::Condition;
use crate::dispatcher::PredictionDispatcher;
use crate::error::ModelLoadError;

/// Independent dispatchers keyed by condition
#[derive(Debug, Default, Clone)]
pub struct DispatcherSet {
    dispatchers: BTreeMap<Condition, PredictionDispatcher>,
}

impl DispatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `<model_dir>/<condition model file>` for each condition.
    ///
    /// Any failure aborts the whole load.
    pub fn load(model_dir: &Path, conditions: &[Condition]) -> Result<Self, ModelLoadError> {
        let mut set = Self::new();
        for &condition in conditions {
            let path = model_dir.join(condition.model_file());
            let model = LinearModel::load(&path)?;
            log::info!(
                "loaded {} model '{}' from {}",
                condition,
                model.name(),
                path.display()
            );
            set.insert_checked(condition, Arc::new(model))?;
        }
        Ok(set)
    }

    /// Register a classifier after checking it against the condition's fields
    pub fn insert_checked(
        &mut self,
        condition: Condition,
        classifier: Arc<LinearModel>,
    ) -> Result<(), ModelLoadError> {
        let spec = condition.spec();
        let invalid = |reason: String| ModelLoadError::Invalid {
            name: classifier.name().to_string(),
            reason,
        };
        if let Some(n) = classifier.input_len() {
            if n != spec.arity() {
                return Err(invalid(format!(
                    "{condition} needs {} features, model has {n}",
                    spec.arity()
                )));
            }
        }
        let features = classifier.features();
        if !features.is_empty() && !features.iter().map(String::as_str).eq(spec.field_keys()) {
            return Err(invalid(format!(
                "feature order {features:?} does not match the {condition} form"
            )));
        }
        self.insert(condition, PredictionDispatcher::new(spec, classifier));
        Ok(())
    }

    pub fn insert(&mut self, condition: Condition, dispatcher: PredictionDispatcher) {
        self.dispatchers.insert(condition, dispatcher);
    }

    pub fn get(&self, condition: Condition) -> Option<&PredictionDispatcher> {
        self.dispatchers.get(&condition)
    }

    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        self.dispatchers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }
}
