//! Field-mapped record type.
//!
//! A [`Record`] is an immutable mapping from field name to string value,
//! representing one entity (one student, one employee). Records compare by
//! field-wise value equality, independent of the order the fields were
//! given in.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// An immutable mapping from field name to string value.
///
/// Constructed once from pairs, a `name=value` literal, or a flat JSON
/// object; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Build a record from name/value pairs.
    ///
    /// A record is a mapping, not a multimap: an empty field name or a
    /// repeated field name is rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Record, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            if name.is_empty() {
                return Err(RecordError::EmptyFieldName);
            }
            if fields.contains_key(&name) {
                return Err(RecordError::DuplicateField { name });
            }
            fields.insert(name, value.into());
        }
        Ok(Record { fields })
    }

    /// Parse a record literal of comma-separated `name=value` pairs.
    ///
    /// ```
    /// use record_utils::Record;
    ///
    /// let r = Record::parse("first=Han, last=Solo, age=35")?;
    /// assert_eq!(r.field("last"), "Solo");
    /// # Ok::<(), record_utils::RecordError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Record, RecordError> {
        let mut pairs = Vec::new();
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let Some((name, value)) = token.split_once('=') else {
                return Err(RecordError::MissingSeparator {
                    token: token.to_string(),
                });
            };
            pairs.push((name.trim().to_string(), value.trim().to_string()));
        }
        Record::from_pairs(pairs)
    }

    /// Parse a record from a flat JSON object of string values.
    pub fn from_json(text: &str) -> Result<Record, RecordError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(object) = value else {
            return Err(RecordError::NotAnObject);
        };
        let mut pairs = Vec::with_capacity(object.len());
        for (name, value) in object {
            let serde_json::Value::String(value) = value else {
                return Err(RecordError::NonStringValue { name });
            };
            pairs.push((name, value));
        }
        Record::from_pairs(pairs)
    }

    /// Render the record as a JSON object.
    pub fn to_json(&self) -> String {
        // A map of strings always serializes
        serde_json::to_string(&self.fields).unwrap_or_default()
    }

    /// Look up a field value, `None` if the field is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Look up a field value, empty string if the field is absent.
    ///
    /// Total accessor for use in extractors and predicates; use [`get`]
    /// where absence must be detected.
    ///
    /// [`get`]: Record::get
    pub fn field(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Iterate over `(name, value)` pairs in field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    /// Renders the `name=value, ...` literal form accepted by [`Record::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.fields {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}
