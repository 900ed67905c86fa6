//! Closed-form health calculators.
//!
//! These are rough self-check estimates shown next to the risk assessment,
//! not clinical measurements.

use serde::{Deserialize, Serialize};

use super::codes::Sex;

/// Errors for calculator inputs that have no meaningful result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("{0} must be a positive number")]
    NonPositive(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Body mass index from weight in kilograms and height in meters.
///
/// # Errors
/// Returns `CalculatorError::NonPositive` for zero, negative or NaN inputs.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<BmiResult, CalculatorError> {
    ensure_positive("Weight", weight_kg)?;
    ensure_positive("Height", height_m)?;

    let value = weight_kg / (height_m * height_m);
    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::NormalWeight
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Ok(BmiResult {
        bmi: round_half_up(value * 10.0) / 10.0,
        category,
    })
}

/// Basal metabolic rate in kcal/day (revised Harris-Benedict), rounded.
///
/// # Errors
/// Returns `CalculatorError::NonPositive` for non-positive weight or height.
pub fn bmr(weight_kg: f64, height_cm: f64, age: f64, sex: Sex) -> Result<f64, CalculatorError> {
    ensure_positive("Weight", weight_kg)?;
    ensure_positive("Height", height_cm)?;

    let value = match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.33 * age,
    };
    Ok(round_half_up(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodPressureCategory {
    Normal,
    Elevated,
    #[serde(rename = "High Blood Pressure Stage 1")]
    Stage1,
    #[serde(rename = "High Blood Pressure Stage 2")]
    Stage2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureEstimate {
    pub systolic: i64,
    pub diastolic: i64,
    pub category: BloodPressureCategory,
}

/// Estimate resting blood pressure from age and resting heart rate.
#[must_use]
pub fn estimate_blood_pressure(age: f64, heart_rate: f64) -> BloodPressureEstimate {
    let base_systolic = 120.0 + (age - 30.0) * 0.5;
    let base_diastolic = 80.0 + (age - 30.0) * 0.3;
    let hr_adjustment = (heart_rate - 70.0) * 0.2;

    let systolic = round_half_up(base_systolic + hr_adjustment) as i64;
    let diastolic = round_half_up(base_diastolic + hr_adjustment * 0.5) as i64;

    let category = if systolic < 120 && diastolic < 80 {
        BloodPressureCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BloodPressureCategory::Elevated
    } else if systolic < 140 || diastolic < 90 {
        BloodPressureCategory::Stage1
    } else {
        BloodPressureCategory::Stage2
    };

    BloodPressureEstimate {
        systolic,
        diastolic,
        category,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CholesterolCategory {
    Desirable,
    #[serde(rename = "Borderline High")]
    BorderlineHigh,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CholesterolEstimate {
    /// Estimated total cholesterol in mg/dl
    pub total: i64,
    pub category: CholesterolCategory,
}

/// Estimate total cholesterol from age and sex.
#[must_use]
pub fn estimate_cholesterol(age: f64, sex: Sex) -> CholesterolEstimate {
    let per_year = match sex {
        Sex::Male => 0.8,
        Sex::Female => 0.6,
    };
    let total = round_half_up(180.0 + age * per_year) as i64;

    let category = if total < 200 {
        CholesterolCategory::Desirable
    } else if total < 240 {
        CholesterolCategory::BorderlineHigh
    } else {
        CholesterolCategory::High
    };

    CholesterolEstimate { total, category }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), CalculatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::NonPositive(name))
    }
}

// Rounds .5 toward positive infinity, unlike f64::round.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
