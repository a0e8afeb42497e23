//! Flat input records

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use tracing::debug;

/// A JSON field that can be missing, explicitly `null`, or carry a value.
///
/// Use with `#[serde(default)]` so that a missing key becomes `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse absent and null into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; missing keys use Default.
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

/// Like the plain `Nullable` decoding, but a value of the wrong JSON type
/// becomes `Null` instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    match serde_json::from_value::<Option<T>>(raw) {
        Ok(value) => Ok(Nullable::from(value)),
        Err(e) => {
            debug!("field ignored: {}", e);
            Ok(Nullable::Null)
        }
    }
}

/// One entry of the flat `divisions` list.
///
/// A complete record looks like:
///
/// ```json
/// {
///   "department": "Community Services",
///   "division": "Branch reports direct to CS DM",
///   "branch": "Finance, Systems and Administration",
///   "unit": "Finance and Space Planning",
///   "order": 30,
///   "mailcode": "C3",
///   "newmailcode": null
/// }
/// ```
///
/// Only `department` is strict: a record whose department has the wrong type
/// fails to decode. Any other mistyped field is read as `null`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DivisionRecord {
    #[serde(default)]
    pub department: Nullable<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub division: Nullable<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub branch: Nullable<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Nullable<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub order: Nullable<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub mailcode: Nullable<String>,
}

impl DivisionRecord {
    /// Department name, if set and non-empty.
    pub fn department_name(&self) -> Option<&str> {
        self.department
            .value()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}
