//! Helpers over loosely typed JSON values.
//!
//! Template data arrives as `serde_json::Value`, so any argument can hold any
//! type. These wrappers check the type first (returning a `Type` error when it
//! is wrong) and then delegate to the typed helpers in [`crate::utils`].

use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value};
use tracing::trace;

use crate::config::FormatConfig;
use crate::error::{HelperError, Result};
use crate::path::PropertyPath;
use crate::utils;

/// Primitive type tag of a JSON value.
///
/// Structural values are not told apart: arrays, maps and `null` are all
/// tagged `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
}

impl ValueType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueType::String,
            Value::Number(_) => ValueType::Number,
            Value::Bool(_) => ValueType::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => ValueType::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(ValueType::String),
            "number" => Ok(ValueType::Number),
            "boolean" => Ok(ValueType::Boolean),
            "object" => Ok(ValueType::Object),
            other => Err(HelperError::UnknownTypeTag(other.to_string())),
        }
    }
}

/// [`utils::slice_string`] for a value that must be a string
pub fn slice_string(value: &Value, max_length: usize) -> Result<String> {
    match value {
        Value::String(text) => Ok(utils::slice_string(text, max_length)),
        other => Err(HelperError::NotAString(other.to_string())),
    }
}

/// Check every element has the `expected` type tag, reporting the first that does not
pub fn check_all_are_type(values: &[Value], expected: ValueType) -> Result<()> {
    match values.iter().position(|v| ValueType::of(v) != expected) {
        Some(index) => Err(HelperError::MixedTypes { index, expected }),
        None => Ok(()),
    }
}

/// [`utils::capital_case`] applied to the string form of any value
pub fn capital_case(value: &Value) -> Result<String> {
    Ok(utils::capital_case(&to_display_string(value)?))
}

/// [`utils::format_number_with`] for a value that must be a number.
/// `decimal_places` falls back to the configured default.
pub fn format_number(
    value: &Value,
    decimal_places: Option<usize>,
    config: &FormatConfig,
) -> Result<String> {
    let number = value
        .as_f64()
        .ok_or_else(|| HelperError::NotANumberType(value.to_string()))?;
    let decimal_places = decimal_places.unwrap_or(config.decimal_places);
    Ok(utils::format_number_with(number, decimal_places, &config.locale))
}

/// Pass-through check that a value is a usable number
pub fn check_for_valid_number(value: &Value) -> Result<f64> {
    match value.as_f64() {
        Some(number) => utils::check_for_valid_number(number),
        None => Err(HelperError::InvalidNumber(value.to_string())),
    }
}

/// Sum the numbers found at `path` in each record.
///
/// A record without a value at `path` fails with `MissingValue`; one holding
/// anything other than a number fails with `InvalidNumber`. The first failure
/// aborts the sum.
pub fn get_total(records: &[Value], path: &str) -> Result<f64> {
    let path = PropertyPath::parse(path);
    let total = records
        .iter()
        .enumerate()
        .try_fold(0.0, |acc, (index, record)| {
            let value = path
                .resolve(record)
                .ok_or(HelperError::MissingValue { index })?;
            Ok::<f64, HelperError>(acc + check_for_valid_number(value)?)
        })?;
    trace!(records = records.len(), path = %path, total, "Computed total");
    Ok(total)
}

/// String form of a value, as a template would print it.
///
/// Integral floats drop their fraction (`2.0` prints as `2`), arrays join
/// their elements with commas and maps print as `[object Object]`. `null`
/// has no string form.
pub fn to_display_string(value: &Value) -> Result<String> {
    match value {
        Value::Null => Err(HelperError::NoStringRepresentation(value.to_string())),
        other => Ok(display_nested(other)),
    }
}

fn display_nested(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::Array(items) => items
            .iter()
            .map(display_nested)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &Number) -> String {
    match n.as_f64() {
        // Covers -0.0, which prints without a sign
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberLocale;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_value_type_of() {
        assert_eq!(ValueType::of(&json!("x")), ValueType::String);
        assert_eq!(ValueType::of(&json!(1.5)), ValueType::Number);
        assert_eq!(ValueType::of(&json!(false)), ValueType::Boolean);
        assert_eq!(ValueType::of(&json!(null)), ValueType::Object);
        assert_eq!(ValueType::of(&json!([1])), ValueType::Object);
        assert_eq!(ValueType::of(&json!({"a": 1})), ValueType::Object);
    }

    #[test]
    fn test_value_type_from_str() {
        assert_eq!("number".parse::<ValueType>(), Ok(ValueType::Number));
        let err = "integer".parse::<ValueType>().unwrap_err();
        assert_eq!(err, HelperError::UnknownTypeTag("integer".to_string()));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_slice_string_value() {
        assert_eq!(slice_string(&json!("Hello World"), 5).unwrap(), "Hello...");
        let err = slice_string(&json!(42), 5).unwrap_err();
        assert_eq!(err, HelperError::NotAString("42".to_string()));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_check_all_are_type() {
        let names = vec![json!("a"), json!("b"), json!("c")];
        assert!(check_all_are_type(&names, ValueType::String).is_ok());
        assert!(check_all_are_type(&[], ValueType::Number).is_ok());

        let mixed = vec![json!(1), json!(2), json!("3"), json!(true)];
        assert_eq!(
            check_all_are_type(&mixed, ValueType::Number).unwrap_err(),
            HelperError::MixedTypes { index: 2, expected: ValueType::Number }
        );
    }

    #[test]
    fn test_check_all_are_type_structural() {
        let structural = vec![json!(null), json!([1, 2]), json!({"k": "v"})];
        assert!(check_all_are_type(&structural, ValueType::Object).is_ok());
    }

    #[test]
    fn test_capital_case_value() {
        assert_eq!(capital_case(&json!("hello_world")).unwrap(), "Hello World");
        assert_eq!(capital_case(&json!(12)).unwrap(), "12");
        assert_eq!(capital_case(&json!(true)).unwrap(), "True");
        assert_eq!(capital_case(&json!(["a_b", "c"])).unwrap(), "A B,c");
        assert_eq!(
            capital_case(&json!(null)).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_to_display_string() {
        assert_eq!(to_display_string(&json!(2.0)).unwrap(), "2");
        assert_eq!(to_display_string(&json!(2.5)).unwrap(), "2.5");
        assert_eq!(to_display_string(&json!(-7)).unwrap(), "-7");
        assert_eq!(to_display_string(&json!(-0.0)).unwrap(), "0");
        assert_eq!(capital_case(&json!(-0.0)).unwrap(), "0");
        assert_eq!(to_display_string(&json!([1, null, [2, 3]])).unwrap(), "1,,2,3");
        assert_eq!(to_display_string(&json!({"a": 1})).unwrap(), "[object Object]");
    }

    #[test]
    fn test_format_number_value() {
        let config = FormatConfig::default();
        assert_eq!(format_number(&json!(1234.567), Some(2), &config).unwrap(), "1,234.57");
        assert_eq!(format_number(&json!(1234.567), None, &config).unwrap(), "1,234.6");
        assert_eq!(format_number(&json!(1234), Some(0), &config).unwrap(), "1,234");

        let err = format_number(&json!("1234"), None, &config).unwrap_err();
        assert_eq!(err, HelperError::NotANumberType("\"1234\"".to_string()));
    }

    #[test]
    fn test_format_number_value_uses_config() {
        let config = FormatConfig {
            decimal_places: 2,
            locale: NumberLocale::for_tag("de-DE").unwrap(),
        };
        assert_eq!(format_number(&json!(9876.5), None, &config).unwrap(), "9.876,50");
    }

    #[test]
    fn test_check_for_valid_number_value() {
        assert_eq!(check_for_valid_number(&json!(5)), Ok(5.0));
        for bad in [json!("5"), json!(null), json!([5])] {
            assert_eq!(check_for_valid_number(&bad).unwrap_err().kind(), ErrorKind::Value);
        }
    }

    #[test]
    fn test_get_total() {
        let records = vec![json!({"a": {"b": 1}}), json!({"a": {"b": 2}})];
        assert_eq!(get_total(&records, "a.b").unwrap(), 3.0);
        assert_eq!(get_total(&[], "a.b").unwrap(), 0.0);
    }

    #[test]
    fn test_get_total_bracketed_path() {
        let records = vec![
            json!({"scores": [{"value": 1.5}]}),
            json!({"scores": [{"value": 2.25}, {"value": 100}]}),
        ];
        assert_eq!(get_total(&records, "scores[0].value").unwrap(), 3.75);
    }

    #[test]
    fn test_get_total_aborts_on_missing() {
        let records = vec![json!({"a": {"b": 1}}), json!({"a": {}}), json!({"a": {"b": "x"}})];
        assert_eq!(
            get_total(&records, "a.b").unwrap_err(),
            HelperError::MissingValue { index: 1 }
        );
    }

    #[test]
    fn test_get_total_aborts_on_non_number() {
        let records = vec![json!({"a": {"b": 1}}), json!({"a": {"b": "2"}})];
        let err = get_total(&records, "a.b").unwrap_err();
        assert_eq!(err, HelperError::InvalidNumber("\"2\"".to_string()));
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
