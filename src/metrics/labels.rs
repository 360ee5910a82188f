//! Gender and activity level inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender used by the Mifflin-St Jeor formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Identifier used on the command line and in prompt answers.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Numeric code as submitted by the form (1 = male, 2 = female).
    pub fn code(&self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Look up a gender by form code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Constant added to the BMR.
    pub(crate) fn bmr_offset(&self) -> f64 {
        match self {
            Self::Male => 5.0,
            Self::Female => -161.0,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown gender: {}", s))
    }
}

/// Label for a form gender code; unknown codes read "Unknown".
pub fn gender_label(code: u8) -> &'static str {
    Gender::from_code(code).map_or("Unknown", |g| g.label())
}

/// Physical activity level and its calorie multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Heavy,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::Athlete,
    ];

    /// Identifier used on the command line and in prompt answers.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::Athlete => "athlete",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Heavy => 1.725,
            Self::Athlete => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Light => "Light Exercise",
            Self::Moderate => "Moderate Exercise",
            Self::Heavy => "Heavy Exercise",
            Self::Athlete => "Athlete",
        }
    }

    /// Look up a level by its exact multiplier.
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.factor() == factor)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown activity level: {}", s))
    }
}

/// Label for an activity multiplier; unknown multipliers read "Unknown".
pub fn activity_label(factor: f64) -> &'static str {
    ActivityLevel::from_factor(factor).map_or("Unknown", |a| a.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes() {
        assert_eq!(gender_label(1), "Male");
        assert_eq!(gender_label(2), "Female");
        assert_eq!(gender_label(0), "Unknown");
        assert_eq!(Gender::Female.code(), 2);
    }

    #[test]
    fn activity_labels_by_factor() {
        assert_eq!(activity_label(1.2), "Sedentary");
        assert_eq!(activity_label(1.375), "Light Exercise");
        assert_eq!(activity_label(1.55), "Moderate Exercise");
        assert_eq!(activity_label(1.725), "Heavy Exercise");
        assert_eq!(activity_label(1.9), "Athlete");
        assert_eq!(activity_label(1.3), "Unknown");
    }

    #[test]
    fn activity_factor_round_trips() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_factor(level.factor()), Some(level));
        }
    }

    #[test]
    fn ids_parse_back() {
        for gender in Gender::ALL {
            assert_eq!(gender.id().parse::<Gender>(), Ok(gender));
        }
        for level in ActivityLevel::ALL {
            assert_eq!(level.id().parse::<ActivityLevel>(), Ok(level));
        }
        assert_eq!("Female ".parse::<Gender>(), Ok(Gender::Female));
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&ActivityLevel::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
    }
}
