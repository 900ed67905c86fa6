//! Clinical code tables for the categorical patient parameters.
//!
//! The numeric encodings follow the UCI heart-disease dataset. Some labels
//! in circulation disagree with each other (notably chest pain type 0 and the
//! thalassemia codes); this module is the single canonical mapping and it is
//! the one the fallback scorer's rules assume.

use serde::{Deserialize, Serialize};

/// Biological sex as encoded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Female),
            1 => Some(Self::Male),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// Chest pain type (`cp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl ChestPainType {
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::TypicalAngina),
            1 => Some(Self::AtypicalAngina),
            2 => Some(Self::NonAnginalPain),
            3 => Some(Self::Asymptomatic),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TypicalAngina => "Typical Angina",
            Self::AtypicalAngina => "Atypical Angina",
            Self::NonAnginalPain => "Non-Anginal Pain",
            Self::Asymptomatic => "Asymptomatic",
        }
    }
}

/// Resting electrocardiographic result (`restecg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    Normal,
    StTAbnormality,
    LeftVentricularHypertrophy,
}

impl RestingEcg {
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Normal),
            1 => Some(Self::StTAbnormality),
            2 => Some(Self::LeftVentricularHypertrophy),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::StTAbnormality => "ST-T Wave Abnormality",
            Self::LeftVentricularHypertrophy => "Left Ventricular Hypertrophy",
        }
    }
}

/// Slope of the peak exercise ST segment (`slope`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    Downsloping,
    Flat,
    Upsloping,
}

impl StSlope {
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Downsloping),
            1 => Some(Self::Flat),
            2 => Some(Self::Upsloping),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Downsloping => "Downsloping",
            Self::Flat => "Flat",
            Self::Upsloping => "Upsloping",
        }
    }
}

/// Thalassemia test result (`thal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thalassemia {
    FixedDefect,
    Normal,
    ReversibleDefect,
}

impl Thalassemia {
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::FixedDefect),
            2 => Some(Self::Normal),
            3 => Some(Self::ReversibleDefect),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FixedDefect => "Fixed Defect",
            Self::Normal => "Normal",
            Self::ReversibleDefect => "Reversible Defect",
        }
    }
}

/// Label for a yes/no flag field.
#[must_use]
pub fn yes_no(code: i32) -> &'static str {
    match code {
        1 => "Yes",
        0 => "No",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chest_pain_mapping() {
        assert_eq!(
            ChestPainType::from_code(0).map(ChestPainType::label),
            Some("Typical Angina")
        );
        assert_eq!(
            ChestPainType::from_code(3).map(ChestPainType::label),
            Some("Asymptomatic")
        );
        assert!(ChestPainType::from_code(4).is_none());
    }

    #[test]
    fn test_thalassemia_has_no_zero_code() {
        assert!(Thalassemia::from_code(0).is_none());
        assert_eq!(Thalassemia::from_code(2), Some(Thalassemia::Normal));
        assert_eq!(
            Thalassemia::from_code(3).map(Thalassemia::label),
            Some("Reversible Defect")
        );
    }

    #[test]
    fn test_sex_codes() {
        assert_eq!(Sex::from_code(0).map(Sex::label), Some("Female"));
        assert_eq!(Sex::from_code(1).map(Sex::label), Some("Male"));
        assert!(Sex::from_code(2).is_none());
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(1), "Yes");
        assert_eq!(yes_no(0), "No");
        assert_eq!(yes_no(7), "Unknown");
    }
}
