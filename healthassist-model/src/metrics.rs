use std::fmt;

use strum::{Display, EnumIter, EnumString};

/// Body fat percentage estimation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BfpMethod {
    #[strum(to_string = "Bmi", serialize = "bmi")]
    Bmi,
    #[strum(to_string = "USNavy", serialize = "USArmy", serialize = "usnavy")]
    UsNavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyFatCategory {
    Low,
    Normal,
    High,
    #[strum(to_string = "Very High")]
    VeryHigh,
}

impl BodyFatCategory {
    /// Classifies `value` against ascending Low/Normal/High upper bounds. A value equal
    /// to a bound falls into the next category.
    pub fn classify(value: f64, [low, normal, high]: [f64; 3]) -> Self {
        if value < low {
            BodyFatCategory::Low
        } else if value < normal {
            BodyFatCategory::Normal
        } else if value < high {
            BodyFatCategory::High
        } else {
            BodyFatCategory::VeryHigh
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyFat {
    pub method: BfpMethod,
    /// Truncated toward zero.
    pub percent: i32,
    /// Unset when the record cannot be classified.
    pub category: Option<BodyFatCategory>,
}

impl BodyFat {
    /// Method-prefixed category, e.g. "Bmi: Normal". Empty when unclassified.
    pub fn label(&self) -> String {
        self.category
            .map(|category| format!("{}: {}", self.method, category))
            .unwrap_or_default()
    }

    pub fn is_normal(&self) -> bool {
        self.category == Some(BodyFatCategory::Normal)
    }
}

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroBreakdown {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Non-fatal outcome of a computation, reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AgeOutsideClassification { age: i32 },
    UnsupportedGender(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AgeOutsideClassification { age } => write!(
                f,
                "The body fat category cannot be determined because age {} is outside of the permitted age range",
                age
            ),
            Notice::UnsupportedGender(gender) => {
                write!(f, "Gender \"{}\" is not supported", gender)
            }
        }
    }
}
