//! Form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the three required inputs of the body-metrics form.
///
/// Declaration order is the fixed check order used when listing
/// missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Age,
    Weight,
    Height,
}

impl FieldId {
    /// All fields in check order.
    pub const ALL: [FieldId; 3] = [FieldId::Age, FieldId::Weight, FieldId::Height];

    /// Identifier the field is addressed by (`age`, `weight`, `height`).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }

    /// Name shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Weight => "Weight",
            Self::Height => "Height",
        }
    }

    /// Question asked when prompting for this field.
    pub fn question(&self) -> &'static str {
        match self {
            Self::Age => "Age (years)",
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (cm)",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(Self::Age),
            "weight" => Ok(Self::Weight),
            "height" => Ok(Self::Height),
            _ => Err(format!("unknown field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_check_order() {
        let names: Vec<_> = FieldId::ALL.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["Age", "Weight", "Height"]);
    }

    #[test]
    fn id_round_trips_through_from_str() {
        for field in FieldId::ALL {
            assert_eq!(field.id().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("Age".parse::<FieldId>().is_err());
        assert!("bodyfat".parse::<FieldId>().is_err());
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(FieldId::Weight.to_string(), "Weight");
    }
}
