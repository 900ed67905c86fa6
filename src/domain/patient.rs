//! Patient parameter types for cardiovascular risk assessment.
//!
//! Based on the thirteen clinical attributes of the UCI heart-disease dataset.

use serde::{Deserialize, Serialize};

use super::codes::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};

/// Clinical parameters submitted for a single risk assessment.
///
/// Categorical fields keep their raw integer codes so that values outside
/// the documented domains can still be represented; the scorer simply does
/// not match them. Use [`PatientParameters::validate`] at trust boundaries.
///
/// The canonical wire names are camelCase; the dataset column codes
/// (`cp`, `trestbps`, `chol`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientParameters {
    /// Age in years (1-120 expected)
    pub age: i32,

    /// 0 = female, 1 = male
    pub sex: i32,

    /// 0 = typical angina, 1 = atypical, 2 = non-anginal, 3 = asymptomatic
    #[serde(alias = "cp")]
    pub chest_pain_type: i32,

    /// Resting blood pressure in mmHg
    #[serde(alias = "trestbps")]
    pub resting_blood_pressure: i32,

    /// Serum cholesterol in mg/dl
    #[serde(alias = "chol")]
    pub cholesterol: i32,

    /// 1 when fasting blood sugar > 120 mg/dl
    #[serde(alias = "fbs")]
    pub fasting_blood_sugar_high: i32,

    /// 0 = normal, 1 = ST-T abnormality, 2 = LV hypertrophy
    #[serde(rename = "restingECG", alias = "restecg")]
    pub resting_ecg: i32,

    /// Maximum heart rate achieved in bpm
    #[serde(alias = "thalach")]
    pub max_heart_rate: i32,

    /// 1 when angina is induced by exercise
    #[serde(alias = "exang")]
    pub exercise_induced_angina: i32,

    /// ST depression induced by exercise relative to rest
    #[serde(alias = "oldpeak")]
    pub st_depression: f64,

    /// Slope of the peak exercise ST segment (0-2)
    #[serde(alias = "slope")]
    pub st_slope: i32,

    /// Number of major vessels colored by fluoroscopy (0-4)
    #[serde(alias = "ca")]
    pub major_vessels_colored: i32,

    /// 1 = fixed defect, 2 = normal, 3 = reversible defect
    #[serde(alias = "thal")]
    pub thalassemia_status: i32,
}

impl PatientParameters {
    #[must_use]
    pub fn sex_code(&self) -> Option<Sex> {
        Sex::from_code(self.sex)
    }

    #[must_use]
    pub fn chest_pain(&self) -> Option<ChestPainType> {
        ChestPainType::from_code(self.chest_pain_type)
    }

    #[must_use]
    pub fn ecg(&self) -> Option<RestingEcg> {
        RestingEcg::from_code(self.resting_ecg)
    }

    #[must_use]
    pub fn slope(&self) -> Option<StSlope> {
        StSlope::from_code(self.st_slope)
    }

    #[must_use]
    pub fn thalassemia(&self) -> Option<Thalassemia> {
        Thalassemia::from_code(self.thalassemia_status)
    }

    /// Age-predicted maximum heart rate (220 - age).
    #[must_use]
    pub fn predicted_max_heart_rate(&self) -> f64 {
        220.0 - f64::from(self.age)
    }

    /// Validate that all parameters are within their documented domains.
    ///
    /// # Errors
    /// Returns every violation found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_range(&mut errors, "Age", self.age, 1, 120);
        check_flag(&mut errors, "Sex", self.sex);
        check_range(&mut errors, "Chest pain type", self.chest_pain_type, 0, 3);
        check_range(
            &mut errors,
            "Resting blood pressure",
            self.resting_blood_pressure,
            50,
            250,
        );
        check_range(&mut errors, "Cholesterol", self.cholesterol, 50, 700);
        check_flag(&mut errors, "Fasting blood sugar", self.fasting_blood_sugar_high);
        check_range(&mut errors, "Resting ECG", self.resting_ecg, 0, 2);
        check_range(&mut errors, "Max heart rate", self.max_heart_rate, 40, 250);
        check_flag(
            &mut errors,
            "Exercise induced angina",
            self.exercise_induced_angina,
        );
        if !self.st_depression.is_finite() || self.st_depression < 0.0 {
            errors.push(format!(
                "ST depression {} must be a non-negative number",
                self.st_depression
            ));
        }
        check_range(&mut errors, "ST slope", self.st_slope, 0, 2);
        check_range(
            &mut errors,
            "Major vessels",
            self.major_vessels_colored,
            0,
            4,
        );
        check_range(&mut errors, "Thalassemia", self.thalassemia_status, 1, 3);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_range(errors: &mut Vec<String>, label: &str, value: i32, min: i32, max: i32) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{label} {value} out of range [{min}, {max}]"));
    }
}

fn check_flag(errors: &mut Vec<String>, label: &str, value: i32) {
    if value != 0 && value != 1 {
        errors.push(format!("{label} {value} must be 0 or 1"));
    }
}

/// Wire names in canonical order.
pub const PARAMETER_NAMES: [&str; 13] = [
    "age",
    "sex",
    "chestPainType",
    "restingBloodPressure",
    "cholesterol",
    "fastingBloodSugarHigh",
    "restingECG",
    "maxHeartRate",
    "exerciseInducedAngina",
    "stDepression",
    "stSlope",
    "majorVesselsColored",
    "thalassemiaStatus",
];

#[cfg(test)]
pub(crate) fn sample_parameters() -> PatientParameters {
    PatientParameters {
        age: 58,
        sex: 1,
        chest_pain_type: 1,
        resting_blood_pressure: 130,
        cholesterol: 210,
        fasting_blood_sugar_high: 0,
        resting_ecg: 0,
        max_heart_rate: 130,
        exercise_induced_angina: 0,
        st_depression: 1.5,
        st_slope: 1,
        major_vessels_colored: 0,
        thalassemia_status: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_canonical_names() {
        let json = r#"{
            "age": 58, "sex": 1, "chestPainType": 1, "restingBloodPressure": 130,
            "cholesterol": 210, "fastingBloodSugarHigh": 0, "restingECG": 0,
            "maxHeartRate": 130, "exerciseInducedAngina": 0, "stDepression": 1.5,
            "stSlope": 1, "majorVesselsColored": 0, "thalassemiaStatus": 1
        }"#;
        let params: PatientParameters = serde_json::from_str(json).expect("Should parse");
        assert_eq!(params, sample_parameters());
    }

    #[test]
    fn test_deserialize_dataset_aliases() {
        let json = r#"{
            "age": 58, "sex": 1, "cp": 1, "trestbps": 130, "chol": 210, "fbs": 0,
            "restecg": 0, "thalach": 130, "exang": 0, "oldpeak": 1.5, "slope": 1,
            "ca": 0, "thal": 1
        }"#;
        let params: PatientParameters = serde_json::from_str(json).expect("Should parse");
        assert_eq!(params, sample_parameters());
    }

    #[test]
    fn test_serialize_uses_canonical_names() {
        let value = serde_json::to_value(sample_parameters()).expect("Should serialize");
        let obj = value.as_object().expect("Should be an object");
        for name in PARAMETER_NAMES {
            assert!(obj.contains_key(name), "missing {name}");
        }
        assert_eq!(obj.len(), PARAMETER_NAMES.len());
    }

    #[test]
    fn test_validation() {
        assert!(sample_parameters().validate().is_ok());

        let invalid = PatientParameters {
            age: 0,
            sex: 2,
            st_depression: -1.0,
            thalassemia_status: 0,
            ..sample_parameters()
        };
        let errors = invalid.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("Age 0"));
    }

    #[test]
    fn test_validation_rejects_nan_st_depression() {
        let invalid = PatientParameters {
            st_depression: f64::NAN,
            ..sample_parameters()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_code_accessors() {
        let params = sample_parameters();
        assert_eq!(params.sex_code(), Some(Sex::Male));
        assert_eq!(params.chest_pain(), Some(ChestPainType::AtypicalAngina));
        assert_eq!(params.thalassemia(), Some(Thalassemia::FixedDefect));
        assert!((params.predicted_max_heart_rate() - 162.0).abs() < f64::EPSILON);
    }
}
