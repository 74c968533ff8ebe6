use crate::error::ReadinessError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a dietary category, e.g. `vegan` or `gluten_free`.
///
/// Diets are compared by identifier. The identifier is kept verbatim; callers
/// that want case-insensitive matching should normalize before constructing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Diet(String);

impl Diet {
    /// Creates a diet from its identifier. Blank identifiers are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, ReadinessError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ReadinessError::EmptyDiet);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Diet {
    type Error = ReadinessError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<&str> for Diet {
    type Error = ReadinessError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Diet> for String {
    fn from(diet: Diet) -> Self {
        diet.0
    }
}

/// Reads a diet *argument* from untyped JSON.
///
/// The argument form is `{"diet": "<id>"}`. A bare string is a raw identifier,
/// not a diet, and fails with [`ReadinessError::InvalidDietType`].
impl TryFrom<&Value> for Diet {
    type Error = ReadinessError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => match fields.get("diet") {
                Some(Value::String(id)) => Self::new(id.as_str()),
                Some(other) => Err(ReadinessError::InvalidDietType {
                    found: format!("an object whose `diet` field is {}", json_kind(other)),
                }),
                None => Err(ReadinessError::InvalidDietType {
                    found: "an object without a `diet` field".to_string(),
                }),
            },
            other => Err(ReadinessError::InvalidDietType {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_diet_equality_is_by_identifier() {
        assert_eq!(Diet::new("vegan").unwrap(), Diet::new("vegan").unwrap());
        assert_ne!(Diet::new("vegan").unwrap(), Diet::new("Vegan").unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_diet_is_rejected(#[case] id: &str) {
        assert!(matches!(Diet::new(id), Err(ReadinessError::EmptyDiet)));
    }

    #[test]
    fn test_diet_argument_from_json_object() {
        let diet = Diet::try_from(&json!({ "diet": "diet1" })).unwrap();
        assert_eq!(diet.as_str(), "diet1");
    }

    #[rstest]
    #[case(json!("invalid_diet"), "a string")]
    #[case(json!(42), "a number")]
    #[case(json!(null), "null")]
    #[case(json!(["diet1"]), "an array")]
    #[case(json!({ "name": "diet1" }), "without a `diet` field")]
    #[case(json!({ "diet": 1 }), "`diet` field is a number")]
    fn test_wrong_diet_argument_type(#[case] value: Value, #[case] expected: &str) {
        match Diet::try_from(&value) {
            Err(ReadinessError::InvalidDietType { found }) => assert!(
                found.contains(expected),
                "expected '{}' in '{}'",
                expected,
                found
            ),
            other => panic!("expected InvalidDietType, got {:?}", other),
        }
    }

    #[test]
    fn test_diet_deserialization_rejects_blank_identifier() {
        let parsed: Result<Diet, _> = serde_json::from_value(json!(""));
        assert!(parsed.is_err());
    }
}
