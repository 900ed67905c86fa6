//! Fallback heuristic risk scorer.
//!
//! Used when the primary prediction model cannot be reached. The score is a
//! plain additive sum of threshold rules with no interaction terms, so a more
//! severe input never lowers the result. Each rule looks at one or two fields
//! and contributes a fixed number of points plus one explanatory line.

use super::patient::PatientParameters;
use super::risk::RiskReport;

/// Points and explanation contributed by a single fired rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub points: u32,
    pub factor: String,
}

impl Contribution {
    fn new(points: u32, factor: impl Into<String>) -> Self {
        Self {
            points,
            factor: factor.into(),
        }
    }
}

type Rule = fn(&PatientParameters) -> Option<Contribution>;

/// Rules in evaluation order. Factor order in the report follows this table.
const RULES: [Rule; 11] = [
    age_rule,
    sex_age_rule,
    chest_pain_rule,
    cholesterol_rule,
    blood_pressure_rule,
    exercise_angina_rule,
    max_heart_rate_rule,
    fasting_blood_sugar_rule,
    st_depression_rule,
    major_vessels_rule,
    thalassemia_rule,
];

/// Evaluate every rule and return the ones that fired, in order.
#[must_use]
pub fn contributions(params: &PatientParameters) -> Vec<Contribution> {
    RULES.iter().filter_map(|rule| rule(params)).collect()
}

/// Unclamped sum of all contributions.
#[must_use]
pub fn raw_score(params: &PatientParameters) -> u32 {
    total_points(&contributions(params))
}

fn total_points(fired: &[Contribution]) -> u32 {
    fired.iter().fold(0u32, |acc, c| acc.saturating_add(c.points))
}

/// Score patient parameters with the fallback heuristic.
///
/// Total over every input: out-of-domain codes match no rule and add nothing.
#[must_use]
pub fn score(params: &PatientParameters) -> RiskReport {
    let fired = contributions(params);
    let total = total_points(&fired);
    let factors = fired.into_iter().map(|c| c.factor).collect();

    RiskReport::from_probability(f64::from(total.min(100)), factors)
}

fn age_rule(p: &PatientParameters) -> Option<Contribution> {
    if p.age > 65 {
        Some(Contribution::new(
            30,
            format!("Age over 65 ({} years) - High risk factor", p.age),
        ))
    } else if p.age > 55 {
        Some(Contribution::new(
            20,
            format!("Age over 55 ({} years) - Moderate risk factor", p.age),
        ))
    } else if p.age > 45 {
        Some(Contribution::new(
            10,
            format!("Age over 45 ({} years) - Mild risk factor", p.age),
        ))
    } else {
        None
    }
}

fn sex_age_rule(p: &PatientParameters) -> Option<Contribution> {
    if p.sex == 1 && p.age > 45 {
        Some(Contribution::new(5, "Male gender with age over 45"))
    } else if p.sex == 0 && p.age > 55 {
        Some(Contribution::new(5, "Female gender with age over 55"))
    } else {
        None
    }
}

fn chest_pain_rule(p: &PatientParameters) -> Option<Contribution> {
    match p.chest_pain_type {
        0 => Some(Contribution::new(25, "Typical angina chest pain - High risk")),
        1 => Some(Contribution::new(
            15,
            "Atypical angina chest pain - Moderate risk",
        )),
        2 => Some(Contribution::new(8, "Non-anginal chest pain - Low risk")),
        _ => None,
    }
}

fn cholesterol_rule(p: &PatientParameters) -> Option<Contribution> {
    if p.cholesterol > 240 {
        Some(Contribution::new(
            25,
            format!("High cholesterol ({} mg/dl) - High risk", p.cholesterol),
        ))
    } else if p.cholesterol > 200 {
        Some(Contribution::new(
            15,
            format!(
                "Borderline high cholesterol ({} mg/dl) - Moderate risk",
                p.cholesterol
            ),
        ))
    } else {
        None
    }
}

fn blood_pressure_rule(p: &PatientParameters) -> Option<Contribution> {
    let bp = p.resting_blood_pressure;
    if bp > 140 {
        Some(Contribution::new(
            20,
            format!("High blood pressure ({bp} mmHg) - High risk"),
        ))
    } else if bp > 120 {
        Some(Contribution::new(
            10,
            format!("Elevated blood pressure ({bp} mmHg) - Moderate risk"),
        ))
    } else {
        None
    }
}

fn exercise_angina_rule(p: &PatientParameters) -> Option<Contribution> {
    (p.exercise_induced_angina == 1)
        .then(|| Contribution::new(15, "Exercise-induced angina - High risk factor"))
}

fn max_heart_rate_rule(p: &PatientParameters) -> Option<Contribution> {
    (f64::from(p.max_heart_rate) < p.predicted_max_heart_rate() * 0.7).then(|| {
        Contribution::new(
            10,
            format!(
                "Low maximum heart rate ({}) - Risk factor",
                p.max_heart_rate
            ),
        )
    })
}

fn fasting_blood_sugar_rule(p: &PatientParameters) -> Option<Contribution> {
    (p.fasting_blood_sugar_high == 1)
        .then(|| Contribution::new(10, "Elevated fasting blood sugar - Risk factor"))
}

fn st_depression_rule(p: &PatientParameters) -> Option<Contribution> {
    let st = p.st_depression;
    if st > 2.0 {
        Some(Contribution::new(
            15,
            format!("Significant ST depression ({st}) - High risk"),
        ))
    } else if st > 1.0 {
        Some(Contribution::new(
            8,
            format!("Moderate ST depression ({st}) - Moderate risk"),
        ))
    } else {
        None
    }
}

fn major_vessels_rule(p: &PatientParameters) -> Option<Contribution> {
    let vessels = u32::try_from(p.major_vessels_colored).ok().filter(|&v| v > 0)?;
    Some(Contribution::new(
        vessels.saturating_mul(12),
        format!("{vessels} major vessel(s) with significant narrowing - High risk"),
    ))
}

fn thalassemia_rule(p: &PatientParameters) -> Option<Contribution> {
    match p.thalassemia_status {
        3 => Some(Contribution::new(
            15,
            "Reversible thalassemia defect - Risk factor",
        )),
        1 => Some(Contribution::new(
            8,
            "Fixed thalassemia defect - Moderate risk factor",
        )),
        _ => None,
    }
}
