//! Current values of the form's fields.

use std::collections::HashMap;

use super::FieldId;

/// Text currently entered in each required field.
///
/// Values are supplied by the caller at validation time rather than looked
/// up from any global registry. A field that was never supplied reads as
/// the empty string, exactly like a field left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    age: String,
    weight: String,
    height: String,
}

impl FormValues {
    /// Create values for all three fields.
    pub fn new(
        age: impl Into<String>,
        weight: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            weight: weight.into(),
            height: height.into(),
        }
    }

    /// Build values from `(id, value)` pairs.
    ///
    /// Unknown identifiers are ignored; fields not present stay empty. When
    /// an identifier appears more than once the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = Self::default();
        for (key, value) in pairs {
            match key.as_ref().parse::<FieldId>() {
                Ok(field) => values.set(field, value),
                Err(_) => tracing::debug!("Ignoring unknown form field '{}'", key.as_ref()),
            }
        }
        values
    }

    /// Build values from a map keyed by field identifier.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self::from_pairs(map.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }

    /// Build values from optional inputs, treating `None` as empty.
    pub fn from_options(age: Option<&str>, weight: Option<&str>, height: Option<&str>) -> Self {
        Self::new(
            age.unwrap_or_default(),
            weight.unwrap_or_default(),
            height.unwrap_or_default(),
        )
    }

    /// Current text of a field.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Age => &self.age,
            FieldId::Weight => &self.weight,
            FieldId::Height => &self.height,
        }
    }

    /// Replace the text of a field.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Age => &mut self.age,
            FieldId::Weight => &mut self.weight,
            FieldId::Height => &mut self.height,
        };
        *slot = value.into();
    }

    /// Whether a field is empty. Only the exact empty string counts.
    pub fn is_empty(&self, field: FieldId) -> bool {
        self.get(field).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_each_field() {
        let values = FormValues::new("30", "70", "180");
        assert_eq!(values.get(FieldId::Age), "30");
        assert_eq!(values.get(FieldId::Weight), "70");
        assert_eq!(values.get(FieldId::Height), "180");
    }

    #[test]
    fn from_pairs_leaves_missing_fields_empty() {
        let values = FormValues::from_pairs([("weight", "70")]);
        assert!(values.is_empty(FieldId::Age));
        assert!(!values.is_empty(FieldId::Weight));
        assert!(values.is_empty(FieldId::Height));
    }

    #[test]
    fn from_pairs_ignores_unknown_keys() {
        let values = FormValues::from_pairs([("bodyfat", "20"), ("age", "40")]);
        assert_eq!(values, FormValues::new("40", "", ""));
    }

    #[test]
    fn from_pairs_last_value_wins() {
        let values = FormValues::from_pairs([("age", "40"), ("age", "")]);
        assert!(values.is_empty(FieldId::Age));
    }

    #[test]
    fn from_map_reads_by_identifier() {
        let mut map = HashMap::new();
        map.insert("height".to_string(), "165".to_string());
        let values = FormValues::from_map(&map);
        assert_eq!(values.get(FieldId::Height), "165");
        assert!(values.is_empty(FieldId::Age));
    }

    #[test]
    fn from_options_treats_none_as_empty() {
        let values = FormValues::from_options(Some("30"), None, Some(""));
        assert_eq!(values, FormValues::new("30", "", ""));
    }

    #[test]
    fn whitespace_is_not_empty() {
        let values = FormValues::new(" ", "\t", "0");
        for field in FieldId::ALL {
            assert!(!values.is_empty(field));
        }
    }

    #[test]
    fn set_replaces_value() {
        let mut values = FormValues::default();
        values.set(FieldId::Weight, "82.5");
        assert_eq!(values.get(FieldId::Weight), "82.5");
    }
}
