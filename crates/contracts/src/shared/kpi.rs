//! KPI card values and number formatting.
//!
//! KPI helpers never fail and never produce NaN: empty inputs degrade to
//! `N/A` or zero.

use super::pipeline::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown when a KPI has no data
pub const NOT_AVAILABLE: &str = "N/A";

/// Share KPI of an empty selection
pub const EMPTY_SHARE: &str = "0%";

/// Headline value of a KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum KpiValue {
    NotAvailable,
    Number(f64),
    Percent(f64),
    Text(String),
}

impl KpiValue {
    /// Text KPI, `N/A` when `value` is `None`
    pub fn text_or_na(value: Option<String>) -> Self {
        value.map(KpiValue::Text).unwrap_or(KpiValue::NotAvailable)
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, KpiValue::NotAvailable)
    }
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiValue::NotAvailable => f.write_str(NOT_AVAILABLE),
            KpiValue::Number(n) => f.write_str(&format_number(*n)),
            KpiValue::Percent(p) => write!(f, "{:.1}%", p),
            KpiValue::Text(s) => f.write_str(s),
        }
    }
}

/// Labelled KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: KpiValue,
}

impl Kpi {
    pub fn new(label: &str, value: KpiValue) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Sum of `field` over `records`; missing values count as 0
pub fn sum_field<R: Record>(records: &[R], field: &str) -> f64 {
    records
        .iter()
        .filter_map(|r| r.value(field))
        .map(|v| v.as_number())
        .sum()
}

/// Total KPI: `N/A` for an empty selection
pub fn total<R: Record>(records: &[R], field: &str) -> KpiValue {
    if records.is_empty() {
        KpiValue::NotAvailable
    } else {
        KpiValue::Number(sum_field(records, field))
    }
}

/// `sum / count`, 0 when `count` is 0
pub fn average(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `part / whole` as a percentage, 0 when `whole` is 0
pub fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Share KPI of `part` within `whole`: one decimal, or [`EMPTY_SHARE`]
/// when there is nothing to share
pub fn share_kpi(part: usize, whole: usize) -> KpiValue {
    if whole == 0 {
        KpiValue::Text(EMPTY_SHARE.to_string())
    } else {
        KpiValue::Percent(share(part, whole))
    }
}

/// Thousands-separated number; fractional values keep two decimals.
///
/// ```
/// use contracts::shared::kpi::format_number;
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(1234.567), "1,234.57");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let formatted = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.2}", rounded)
    };

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(1234.567), "1,234.57");
        assert_eq!(format_number(-1234.5), "-1,234.50");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_kpi_display() {
        assert_eq!(KpiValue::NotAvailable.to_string(), "N/A");
        assert_eq!(KpiValue::Number(15.0).to_string(), "15");
        assert_eq!(KpiValue::Percent(0.0).to_string(), "0.0%");
        assert_eq!(KpiValue::Percent(42.46).to_string(), "42.5%");
        assert_eq!(KpiValue::Text("Flu".into()).to_string(), "Flu");
        assert_eq!(KpiValue::text_or_na(None).to_string(), "N/A");
    }

    #[test]
    fn test_share_kpi() {
        assert_eq!(share_kpi(0, 0).to_string(), "0%");
        assert_eq!(share_kpi(0, 3).to_string(), "0.0%");
        assert_eq!(share_kpi(1, 3).to_string(), "33.3%");
    }

    #[test]
    fn test_guards_against_division_by_zero() {
        assert_eq!(average(10.0, 0), 0.0);
        assert_eq!(average(10.0, 4), 2.5);
        assert_eq!(share(0, 0), 0.0);
        assert_eq!(share(1, 4), 25.0);
    }
}
