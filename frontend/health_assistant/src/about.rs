pub const ABOUT_TITLE: &str = "About Us";

pub const ABOUT_TEXT: &str = "\
This system is a health assistant designed to estimate the likelihood of heart
disease, diabetes and, when enabled, Parkinson's disease from user-provided
health metrics. It aims to support early detection and encourage preventive
measures.

Heart Disease Prediction evaluates health metrics such as cholesterol levels,
blood pressure, age and exercise test results to estimate the risk of
cardiovascular conditions.

Diabetes Prediction focuses on indicators such as glucose levels, BMI, family
history and other health parameters to assess the risk of developing diabetes.

Parkinson's Prediction uses biomedical voice measurements to screen for
Parkinson's disease.

This tool is a supplement for health monitoring and risk assessment. It does
not replace a medical consultation.";

pub fn about_lines() -> Vec<String> {
    std::iter::once(ABOUT_TITLE.to_string())
        .chain(ABOUT_TEXT.lines().map(str::to_string))
        .collect()
}
