use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Scalar value of a single record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Text form used by filters, group keys and CSV cells.
    /// Integral numbers are rendered without a fractional part (`2020`, not `2020.0`).
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_plain_number(*n),
        }
    }

    /// Numeric form used by sums. Text is coerced leniently, see [`coerce_number`].
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) if n.is_finite() => *n,
            FieldValue::Number(_) => 0.0,
            FieldValue::Text(s) => coerce_number(s),
        }
    }

    /// Numbers compare numerically, text compares case-sensitively.
    /// Mixed pairs compare by their text form.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (a, b) => a.as_text().cmp(&b.as_text()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

/// Kind of a declared field, drives sorting and key sanitisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Number,
}

/// One column of a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Stable key, also the CSV header and the serde name
    pub key: &'static str,
    /// Human readable column title
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
        }
    }
}

/// Header band spanning `span` consecutive schema columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGroup {
    pub label: &'static str,
    pub span: usize,
}

impl ColumnGroup {
    pub const fn new(label: &'static str, span: usize) -> Self {
        Self { label, span }
    }
}

/// A typed dashboard row with a declared schema.
///
/// The pipeline never inspects concrete record types: filters, aggregations,
/// sorting and export all go through [`Record::value`].
pub trait Record {
    /// Ordered, declared schema of the record type
    fn schema() -> &'static [FieldDef];

    /// Value of the field `key`, `None` when the field is missing or unknown
    fn value(&self, key: &str) -> Option<FieldValue>;

    /// Schema entry for `key`
    fn field_def(key: &str) -> Option<&'static FieldDef> {
        Self::schema().iter().find(|def| def.key == key)
    }
}

impl<R: Record> Record for &R {
    fn schema() -> &'static [FieldDef] {
        R::schema()
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        (**self).value(key)
    }
}

/// Wraps an optional text column: empty strings count as missing
pub fn opt_text(value: &Option<String>) -> Option<FieldValue> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(FieldValue::from)
}

/// Lenient numeric parsing for noisy figures such as `"12,500 units"`.
///
/// Everything except digits, `.` and a leading `-` is stripped before parsing.
/// Unparseable input yields `0.0`.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if negative {
                -n
            } else {
                n
            }
        }
        _ => 0.0,
    }
}

fn format_plain_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text_renders_integral_numbers_without_fraction() {
        assert_eq!(FieldValue::Number(2020.0).as_text(), "2020");
        assert_eq!(FieldValue::Number(-3.0).as_text(), "-3");
        assert_eq!(FieldValue::Number(2.5).as_text(), "2.5");
        assert_eq!(FieldValue::text("Asia").as_text(), "Asia");
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("12,500 units"), 12500.0);
        assert_eq!(coerce_number("  42 "), 42.0);
        assert_eq!(coerce_number("$1,234.50"), 1234.5);
        assert_eq!(coerce_number("-7"), -7.0);
        assert_eq!(coerce_number("n/a"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("1.2.3"), 0.0);
    }

    #[test]
    fn test_compare_mixed_values() {
        let a = FieldValue::Number(10.0);
        let b = FieldValue::Number(9.0);
        assert_eq!(a.compare(&b), Ordering::Greater);

        // Case-sensitive: uppercase sorts before lowercase
        let upper = FieldValue::text("Zeta");
        let lower = FieldValue::text("alpha");
        assert_eq!(upper.compare(&lower), Ordering::Less);
    }

    #[test]
    fn test_opt_text_treats_empty_as_missing() {
        assert_eq!(opt_text(&None), None);
        assert_eq!(opt_text(&Some(String::new())), None);
        assert_eq!(opt_text(&Some("x".into())), Some(FieldValue::text("x")));
    }
}
