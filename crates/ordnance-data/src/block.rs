//! The attributed data block and its typed field accessors.
//!
//! A block maps field names to an ordered list of values of one type.
//! Presence and type are separate questions: [`AttributedBlock::exists`]
//! answers the first, and each typed accessor reports a
//! [`FieldError::TypeMismatch`] instead of guessing when asked for the wrong
//! type. Real accessors widen integer fields.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

// ===========================================================================
// Values
// ===========================================================================

/// Declared value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Integer,
    Real,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Real => "real",
        })
    }
}

/// The values of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValues {
    Strings(Vec<String>),
    Ints(Vec<i64>),
    Reals(Vec<f64>),
}

impl FieldValues {
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldValues::Strings(_) => ValueType::String,
            FieldValues::Ints(_) => ValueType::Integer,
            FieldValues::Reals(_) => ValueType::Real,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FieldValues::Strings(v) => v.len(),
            FieldValues::Ints(v) => v.len(),
            FieldValues::Reals(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// On-disk shape of a field: a scalar or a list. Integers are tried before
/// reals so `[1, 2]` stays integral; an empty list is a presence-only flag.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValues {
    Int(i64),
    Real(f64),
    Str(String),
    Ints(Vec<i64>),
    Reals(Vec<f64>),
    Strs(Vec<String>),
}

impl From<RawValues> for FieldValues {
    fn from(raw: RawValues) -> Self {
        match raw {
            RawValues::Int(v) => FieldValues::Ints(vec![v]),
            RawValues::Real(v) => FieldValues::Reals(vec![v]),
            RawValues::Str(v) => FieldValues::Strings(vec![v]),
            RawValues::Ints(v) => FieldValues::Ints(v),
            RawValues::Reals(v) => FieldValues::Reals(v),
            RawValues::Strs(v) => FieldValues::Strings(v),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawValues::deserialize(deserializer).map(Into::into)
    }
}

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("field '{field}' not found")]
    Missing { field: String },

    #[error("field '{field}' holds {found} values, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: ValueType,
        found: ValueType,
    },
}

// ===========================================================================
// Block
// ===========================================================================

/// A read-only field store produced by a file parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributedBlock {
    fields: BTreeMap<String, FieldValues>,
}

impl AttributedBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, values: FieldValues) {
        self.fields.insert(name.into(), values);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValues> {
        self.fields.remove(name)
    }

    pub fn with_strings<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.insert(name, FieldValues::Strings(values));
        self
    }

    pub fn with_ints(mut self, name: &str, values: impl IntoIterator<Item = i64>) -> Self {
        self.insert(name, FieldValues::Ints(values.into_iter().collect()));
        self
    }

    pub fn with_reals(mut self, name: &str, values: impl IntoIterator<Item = f64>) -> Self {
        self.insert(name, FieldValues::Reals(values.into_iter().collect()));
        self
    }

    /// Add a presence-only field.
    pub fn with_flag(mut self, name: &str) -> Self {
        self.insert(name, FieldValues::Ints(Vec::new()));
        self
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn get(&self, name: &str) -> Result<&FieldValues, FieldError> {
        self.fields.get(name).ok_or_else(|| FieldError::Missing {
            field: name.to_string(),
        })
    }

    fn mismatch(name: &str, expected: ValueType, found: &FieldValues) -> FieldError {
        FieldError::TypeMismatch {
            field: name.to_string(),
            expected,
            found: found.value_type(),
        }
    }

    pub fn string_values(&self, name: &str) -> Result<&[String], FieldError> {
        match self.get(name)? {
            FieldValues::Strings(v) => Ok(v),
            other => Err(Self::mismatch(name, ValueType::String, other)),
        }
    }

    pub fn int_values(&self, name: &str) -> Result<&[i64], FieldError> {
        match self.get(name)? {
            FieldValues::Ints(v) => Ok(v),
            other => Err(Self::mismatch(name, ValueType::Integer, other)),
        }
    }

    /// Real values of a field; integer fields are widened.
    pub fn real_values(&self, name: &str) -> Result<Cow<'_, [f64]>, FieldError> {
        match self.get(name)? {
            FieldValues::Reals(v) => Ok(Cow::Borrowed(v)),
            FieldValues::Ints(v) => Ok(Cow::Owned(v.iter().map(|&i| i as f64).collect())),
            other => Err(Self::mismatch(name, ValueType::Real, other)),
        }
    }

    /// First string value, `None` if the field is absent or empty.
    pub fn first_string(&self, name: &str) -> Result<Option<&str>, FieldError> {
        if !self.exists(name) {
            return Ok(None);
        }
        Ok(self.string_values(name)?.first().map(String::as_str))
    }

    /// First integer value, `None` if the field is absent or empty.
    pub fn first_int(&self, name: &str) -> Result<Option<i64>, FieldError> {
        if !self.exists(name) {
            return Ok(None);
        }
        Ok(self.int_values(name)?.first().copied())
    }

    /// First real value, `None` if the field is absent or empty.
    pub fn first_real(&self, name: &str) -> Result<Option<f64>, FieldError> {
        if !self.exists(name) {
            return Ok(None);
        }
        Ok(self.real_values(name)?.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> AttributedBlock {
        AttributedBlock::new()
            .with_strings("Name", ["Karnov UR Transport"])
            .with_ints("armor", [20, 15, 15, 15, 15])
            .with_reals("tonnage", [30.0])
            .with_flag("omni")
    }

    #[test]
    fn exists_checks_presence_only() {
        let b = block();
        assert!(b.exists("Name"));
        assert!(b.exists("omni"));
        assert!(!b.exists("Model"));
    }

    #[test]
    fn typed_accessors() {
        let b = block();
        assert_eq!(b.string_values("Name").unwrap(), ["Karnov UR Transport"]);
        assert_eq!(b.int_values("armor").unwrap(), [20, 15, 15, 15, 15]);
        assert_eq!(b.real_values("tonnage").unwrap().as_ref(), [30.0]);
    }

    #[test]
    fn reals_widen_integers() {
        let b = AttributedBlock::new().with_ints("tonnage", [50]);
        assert_eq!(b.real_values("tonnage").unwrap().as_ref(), [50.0]);
        assert_eq!(b.first_real("tonnage").unwrap(), Some(50.0));
    }

    #[test]
    fn integers_do_not_narrow_reals() {
        let b = block();
        assert_eq!(
            b.int_values("tonnage"),
            Err(FieldError::TypeMismatch {
                field: "tonnage".to_string(),
                expected: ValueType::Integer,
                found: ValueType::Real,
            })
        );
    }

    #[test]
    fn missing_field_error() {
        let b = block();
        assert!(matches!(
            b.string_values("Model"),
            Err(FieldError::Missing { ref field }) if field == "Model"
        ));
    }

    #[test]
    fn first_helpers_treat_absent_and_empty_alike() {
        let b = block().with_strings("Model", Vec::<String>::new());
        assert_eq!(b.first_string("Model").unwrap(), None);
        assert_eq!(b.first_string("source").unwrap(), None);
        assert_eq!(b.first_int("omni").unwrap(), None);
        assert_eq!(b.first_int("armor").unwrap(), Some(20));
    }

    #[test]
    fn deserialize_json_scalars_and_lists() {
        let json = r#"{
            "Name": "Karnov UR Transport",
            "tonnage": 30,
            "fuel": 1.5,
            "armor": [20, 15, 15, 15, 15],
            "history": ["line one", "line two"],
            "omni": []
        }"#;
        let b: AttributedBlock = serde_json::from_str(json).unwrap();
        assert_eq!(b.first_string("Name").unwrap(), Some("Karnov UR Transport"));
        assert_eq!(b.int_values("tonnage").unwrap(), [30]);
        assert_eq!(b.first_real("fuel").unwrap(), Some(1.5));
        assert_eq!(b.int_values("armor").unwrap().len(), 5);
        assert_eq!(b.string_values("history").unwrap().len(), 2);
        assert!(b.exists("omni"));
    }

    #[test]
    fn deserialize_mixed_numeric_list_as_reals() {
        let b: AttributedBlock = serde_json::from_str(r#"{"x": [1, 2.5]}"#).unwrap();
        assert_eq!(b.real_values("x").unwrap().as_ref(), [1.0, 2.5]);
    }

    #[test]
    fn deserialize_toml() {
        let text = r#"
Name = "Karnov UR Transport"
tonnage = 30.0
armor = [20, 15, 15, 15, 15]
"Front Equipment" = ["Machine Gun"]
"#;
        let b: AttributedBlock = toml::from_str(text).unwrap();
        assert_eq!(b.first_real("tonnage").unwrap(), Some(30.0));
        assert_eq!(b.string_values("Front Equipment").unwrap(), ["Machine Gun"]);
    }

    #[test]
    fn deserialize_rejects_nested_tables() {
        let result: Result<AttributedBlock, _> = serde_json::from_str(r#"{"x": {"y": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_round_trip_keeps_types() {
        let b = block();
        let json = serde_json::to_string(&b).unwrap();
        let back: AttributedBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back.int_values("armor").unwrap(), b.int_values("armor").unwrap());
        assert!(back.exists("omni"));
    }
}
