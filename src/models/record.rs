//! Raw and normalized CSV record types.
//!
//! A [`RawRecord`] is what the CSV tokenizer hands over: original column
//! names (any casing, stray whitespace) mapped to scalar values. A
//! [`NormalizedRecord`] is the canonical form every comparison and
//! computation works on.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

/// A scalar cell value as produced by CSV parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A textual cell.
    Text(String),
    /// A cell that is already numeric.
    Number(Decimal),
    /// A cell absent from a short row.
    Missing,
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(text) => f.write_str(text),
            RawValue::Number(number) => write!(f, "{}", number),
            RawValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Number(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// A parsed CSV row keyed by the original column headers.
///
/// Field order follows the header order of the source file.
///
/// # Example
///
/// ```
/// use timesheet_audit::models::RawRecord;
///
/// let record = RawRecord::from_pairs([(" Employee ", "Alice"), ("Tips", "$5.00")]);
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, RawValue)>,
}

impl RawRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Appends a field.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Iterates fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record with lower-cased, trimmed field names and trimmed string values.
///
/// Lookups go through [`NormalizedRecord::get`], which folds the requested
/// name the same way, so callers may ask for `"Employee"` or `"employee"`.
/// Absent fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: HashMap<String, String>,
}

impl NormalizedRecord {
    pub(crate) fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Returns the value of a field, or `""` when the field is absent.
    pub fn get(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or("")
    }

    /// Returns true if the record carries a column with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Iterates the field names (already normalized).
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts back into a raw record with text values.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord::from_pairs(self.fields.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(value) => Some(value.as_str()),
            None => self
                .fields
                .get(&name.trim().to_lowercase())
                .map(String::as_str),
        }
    }
}
