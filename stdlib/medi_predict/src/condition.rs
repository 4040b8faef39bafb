//! Built-in conditions: field order, form prompts and result labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One form field: the model's feature name plus the prompt shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub prompt: String,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
        }
    }
}

/// Labels for classifier output `0` (negative) and `1` (positive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPair {
    pub negative: String,
    pub positive: String,
}

impl LabelPair {
    pub fn new(negative: impl Into<String>, positive: impl Into<String>) -> Self {
        Self {
            negative: negative.into(),
            positive: positive.into(),
        }
    }
}

/// Everything a dispatcher needs to know about a condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub labels: LabelPair,
}

impl ConditionSpec {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>, labels: LabelPair) -> Self {
        Self {
            name: name.into(),
            fields,
            labels,
        }
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

const DIABETES_FIELDS: [(&str, &str); 8] = [
    ("Pregnancies", "Number of Pregnancies"),
    ("Glucose", "Glucose Level in mg/dL (milligrams per deciliter)"),
    (
        "BloodPressure",
        "Blood Pressure value in mmHg (millimeters of mercury)",
    ),
    ("SkinThickness", "Skin Thickness value in mm (millimeters)"),
    (
        "Insulin",
        "Insulin Level in mIU/L (micro International Units per liter)",
    ),
    ("BMI", "BMI value in kg/m² (kilograms per square meter)"),
    ("DiabetesPedigreeFunction", "Diabetes Pedigree Function value"),
    ("Age", "Age of the Person in years"),
];

const HEART_DISEASE_FIELDS: [(&str, &str); 13] = [
    ("age", "Age in years"),
    ("sex", "Sex"),
    ("cp", "Chest Pain types"),
    (
        "trestbps",
        "Resting Blood Pressure in mmHg (millimeters of mercury)",
    ),
    ("chol", "Serum Cholestoral in mg/dl (milligrams per deciliter)"),
    (
        "fbs",
        "Fasting Blood Sugar > 120 mg/dl (milligrams per deciliter)",
    ),
    ("restecg", "Resting Electrocardiographic results"),
    (
        "thalach",
        "Maximum Heart Rate achieved in beats per minute (bpm)",
    ),
    ("exang", "Exercise Induced Angina"),
    (
        "oldpeak",
        "ST depression induced by exercise in mm (millimeters)",
    ),
    ("slope", "Slope of the peak exercise ST segment"),
    ("ca", "Major vessels colored by flourosopy"),
    (
        "thal",
        "thal: 0 = normal; 1 = fixed defect; 2 = reversable defect",
    ),
];

const PARKINSONS_FIELDS: [(&str, &str); 22] = [
    ("MDVP:Fo(Hz)", "MDVP:Fo(Hz) average vocal fundamental frequency"),
    ("MDVP:Fhi(Hz)", "MDVP:Fhi(Hz) maximum vocal fundamental frequency"),
    ("MDVP:Flo(Hz)", "MDVP:Flo(Hz) minimum vocal fundamental frequency"),
    ("MDVP:Jitter(%)", "MDVP:Jitter(%)"),
    ("MDVP:Jitter(Abs)", "MDVP:Jitter(Abs)"),
    ("MDVP:RAP", "MDVP:RAP"),
    ("MDVP:PPQ", "MDVP:PPQ"),
    ("Jitter:DDP", "Jitter:DDP"),
    ("MDVP:Shimmer", "MDVP:Shimmer"),
    ("MDVP:Shimmer(dB)", "MDVP:Shimmer(dB)"),
    ("Shimmer:APQ3", "Shimmer:APQ3"),
    ("Shimmer:APQ5", "Shimmer:APQ5"),
    ("MDVP:APQ", "MDVP:APQ"),
    ("Shimmer:DDA", "Shimmer:DDA"),
    ("NHR", "NHR noise-to-harmonics ratio"),
    ("HNR", "HNR harmonics-to-noise ratio"),
    ("RPDE", "RPDE recurrence period density entropy"),
    ("DFA", "DFA detrended fluctuation analysis"),
    ("spread1", "spread1"),
    ("spread2", "spread2"),
    ("D2", "D2 correlation dimension"),
    ("PPE", "PPE pitch period entropy"),
];

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::Diabetes,
        Condition::HeartDisease,
        Condition::Parkinsons,
    ];

    /// Config and menu key
    pub fn key(self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::HeartDisease => "heart_disease",
            Condition::Parkinsons => "parkinsons",
        }
    }

    /// Page title
    pub fn title(self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes Prediction",
            Condition::HeartDisease => "Heart Disease Prediction",
            Condition::Parkinsons => "Parkinson's Prediction",
        }
    }

    pub fn model_file(self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes_model.json",
            Condition::HeartDisease => "heart_disease_model.json",
            Condition::Parkinsons => "parkinsons_model.json",
        }
    }

    pub fn spec(self) -> ConditionSpec {
        let (fields, labels): (&[(&str, &str)], LabelPair) = match self {
            Condition::Diabetes => (
                &DIABETES_FIELDS,
                LabelPair::new("The person is not diabetic", "The person is diabetic"),
            ),
            Condition::HeartDisease => (
                &HEART_DISEASE_FIELDS,
                LabelPair::new(
                    "The person does not have any heart disease",
                    "The person is having heart disease",
                ),
            ),
            Condition::Parkinsons => (
                &PARKINSONS_FIELDS,
                LabelPair::new(
                    "The person does not have Parkinson's disease",
                    "The person has Parkinson's disease",
                ),
            ),
        };
        ConditionSpec::new(
            self.key(),
            fields
                .iter()
                .map(|(key, prompt)| FieldSpec::new(*key, *prompt))
                .collect(),
            labels,
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' ', '\''], "_");
        match norm.as_str() {
            "diabetes" => Ok(Condition::Diabetes),
            "heart" | "heart_disease" => Ok(Condition::HeartDisease),
            "parkinsons" | "parkinson" | "parkinson_s" => Ok(Condition::Parkinsons),
            _ => Err(format!("unknown condition: {s}")),
        }
    }
}
