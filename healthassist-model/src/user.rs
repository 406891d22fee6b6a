use std::fmt;

use strum::EnumString;

use crate::metrics::{BodyFat, MacroBreakdown};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[strum(default)]
    Other(String),
}

impl Gender {
    /// Parses free-form operator input, ignoring case and surrounding whitespace.
    pub fn from_input(input: &str) -> Self {
        Self::from(input.trim().to_lowercase())
    }

    pub fn is_female(&self) -> bool {
        matches!(self, Gender::Female)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Gender::Other(_))
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Gender::Other(s))
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
#[strum(serialize_all = "lowercase")]
pub enum Lifestyle {
    Sedentary,
    Moderate,
    Active,
    #[strum(default)]
    Other(String),
}

impl Lifestyle {
    /// Parses free-form operator input. "moderately" is accepted as moderate.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        if input == "moderately" {
            Lifestyle::Moderate
        } else {
            Lifestyle::from(input)
        }
    }
}

impl From<String> for Lifestyle {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Lifestyle::Other(s))
    }
}

impl From<Lifestyle> for String {
    fn from(lifestyle: Lifestyle) -> Self {
        lifestyle.to_string()
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifestyle::Sedentary => write!(f, "sedentary"),
            Lifestyle::Moderate => write!(f, "moderate"),
            Lifestyle::Active => write!(f, "active"),
            Lifestyle::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Body measurements in kilograms and centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    pub weight: f64,
    pub height: f64,
    pub waist: f64,
    pub neck: f64,
    pub hip: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRecord {
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub waist: f64,
    pub neck: f64,
    pub hip: f64,
    pub lifestyle: Lifestyle,
    pub body_fat: Option<BodyFat>,
    pub daily_calories: u32,
    pub macros: Option<MacroBreakdown>,
}

impl UserRecord {
    /// Creates a record with raw attributes only. The name is normalized and the hip
    /// measurement is dropped for anyone but females.
    pub fn new(
        name: &str,
        gender: Gender,
        age: i32,
        measurements: Measurements,
        lifestyle: Lifestyle,
    ) -> Self {
        let hip = if gender.is_female() {
            measurements.hip
        } else {
            0.0
        };
        Self {
            name: normalize_name(name),
            gender,
            age,
            weight: measurements.weight,
            height: measurements.height,
            waist: measurements.waist,
            neck: measurements.neck,
            hip,
            lifestyle,
            body_fat: None,
            daily_calories: 0,
            macros: None,
        }
    }

    pub fn category_label(&self) -> String {
        self.body_fat
            .as_ref()
            .map(BodyFat::label)
            .unwrap_or_default()
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_normalizes_name() {
        let record = UserRecord::new(
            "  John ",
            Gender::Male,
            30,
            Measurements::default(),
            Lifestyle::Active,
        );
        assert_eq!(record.name, "john");
        assert_eq!(record.body_fat, None);
        assert_eq!(record.daily_calories, 0);
        assert_eq!(record.macros, None);
    }

    #[test]
    fn new_record_drops_hip_for_males() {
        let measurements = Measurements {
            hip: 95.0,
            ..Default::default()
        };
        let male = UserRecord::new("a", Gender::Male, 30, measurements, Lifestyle::Active);
        let female = UserRecord::new("b", Gender::Female, 30, measurements, Lifestyle::Active);
        assert_eq!(male.hip, 0.0);
        assert_eq!(female.hip, 95.0);
    }

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let test_data = [
            ("male", Gender::Male),
            ("female", Gender::Female),
            ("Male", Gender::Other("Male".to_owned())),
            ("other", Gender::Other("other".to_owned())),
        ];

        for (i, (input, expected)) in test_data.into_iter().enumerate() {
            let gender = Gender::from(input.to_owned());
            assert_eq!(gender, expected, "Test case #{}", i);
            assert_eq!(gender.to_string(), input, "Test case #{}", i);
        }
    }

    #[test]
    fn operator_input_is_normalized() {
        assert_eq!(Gender::from_input(" FEMALE "), Gender::Female);
        assert_eq!(Lifestyle::from_input("Moderately"), Lifestyle::Moderate);
        assert_eq!(Lifestyle::from_input(" active"), Lifestyle::Active);
        assert_eq!(
            Lifestyle::from_input("lazy"),
            Lifestyle::Other("lazy".to_owned())
        );
    }
}
