//! Forgiving serde helpers for text, dates and flags
//!
//! Month data may have been typed into form fields by hand, so these never
//! reject a value: wrong types fall back to an empty string, no date, an
//! empty list, or the field default.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Date format used in stored records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, `None` for anything else
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Text field: strings pass through, numbers and booleans are stringified,
/// everything else is empty.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Boolean flag that also accepts `"true"` / `"false"` strings; anything
/// else is `true`.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => !s.trim().eq_ignore_ascii_case("false"),
        _ => true,
    })
}

/// Keep the elements of a JSON array that read as `T`; `null` items and
/// items of the wrong shape are dropped.
pub fn items<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

/// List field: anything that is not an array reads as an empty list
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => items(values),
        _ => Vec::new(),
    })
}

/// Optional calendar date stored as `"YYYY-MM-DD"`, or `""` when unset
pub mod optional_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => parse_date(&s),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "text")]
        name: String,
        #[serde(default = "yes", deserialize_with = "flag")]
        recurring: bool,
        #[serde(default, with = "optional_date")]
        due: Option<NaiveDate>,
    }

    fn yes() -> bool {
        true
    }

    #[test]
    fn test_text_coercion() {
        let p: Form = serde_json::from_str(r#"{"name": 42}"#).unwrap();
        assert_eq!(p.name, "42");
        let p: Form = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(p.name, "");
    }

    #[test]
    fn test_flag_coercion() {
        let p: Form = serde_json::from_str(r#"{"recurring": "false"}"#).unwrap();
        assert!(!p.recurring);
        let p: Form = serde_json::from_str(r#"{"recurring": false}"#).unwrap();
        assert!(!p.recurring);
        let p: Form = serde_json::from_str(r#"{}"#).unwrap();
        assert!(p.recurring);
    }

    #[test]
    fn test_list_coercion() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "list")]
            forms: Vec<Form>,
        }

        let h: Holder = serde_json::from_str(r#"{"forms": null}"#).unwrap();
        assert!(h.forms.is_empty());

        let h: Holder = serde_json::from_str(r#"{"forms": "oops"}"#).unwrap();
        assert!(h.forms.is_empty());

        let h: Holder =
            serde_json::from_str(r#"{"forms": [null, {"name": "kept"}, 3, {"name": true}]}"#)
                .unwrap();
        let names: Vec<&str> = h.forms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["kept", "true"]);
    }

    #[test]
    fn test_optional_date() {
        let p: Form = serde_json::from_str(r#"{"due": "2025-10-15"}"#).unwrap();
        assert_eq!(p.due, NaiveDate::from_ymd_opt(2025, 10, 15));

        let p: Form = serde_json::from_str(r#"{"due": ""}"#).unwrap();
        assert!(p.due.is_none());

        let p: Form = serde_json::from_str(r#"{"due": "next friday"}"#).unwrap();
        assert!(p.due.is_none());

        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""due":"""#));
    }
}
