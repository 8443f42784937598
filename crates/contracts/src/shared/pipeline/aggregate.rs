//! Grouping of filtered records into chart- and KPI-ready buckets.
//!
//! Buckets are always keyed by the full, sanitised group value. Label
//! truncation happens only when a bucket is turned into a chart point, so two
//! long labels sharing a prefix never collapse into one bucket.

use super::record::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Placeholder that noisy upstream data uses for "no value"
const UNDEFINED_PLACEHOLDER: &str = "undefined";

/// Marker appended to truncated chart labels
pub const ELLIPSIS: &str = "...";

/// Label width used by dashboards with dense category axes
pub const COMPACT_LABEL_LEN: usize = 37;

/// Canonical lead potential labels in display order
pub const LEAD_POTENTIAL_LABELS: &[&str] = &["Hot", "Warm", "Cold"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateOp {
    Count,
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketOrder {
    /// Largest value first, ties by key
    ValueDesc,
    /// Ascending key; numeric keys (years) compare numerically
    KeyAsc,
    /// First-seen order
    Unordered,
}

/// How a raw group value is turned into a bucket key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyRule {
    /// Trimmed text; empty, `"undefined"` and purely numeric values are invalid
    Categorical,
    /// Trimmed numeric value such as a year
    Chronological,
    /// Collapses free text into `Hot` / `Warm` / `Cold`
    LeadPotential,
}

impl KeyRule {
    /// Sanitised key, or `None` when the record must be left out of the aggregation
    pub fn normalize(&self, value: &FieldValue) -> Option<String> {
        match self {
            KeyRule::Categorical => normalize_category(&value.as_text()),
            KeyRule::Chronological => {
                let text = value.as_text();
                let trimmed = text.trim();
                trimmed.parse::<f64>().ok().map(|_| trimmed.to_string())
            }
            KeyRule::LeadPotential => {
                normalize_lead_potential(&value.as_text()).map(str::to_string)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupKey {
    pub field: String,
    pub rule: KeyRule,
}

impl GroupKey {
    pub fn categorical(field: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: KeyRule::Categorical,
        }
    }

    pub fn chronological(field: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: KeyRule::Chronological,
        }
    }

    pub fn lead_potential(field: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: KeyRule::LeadPotential,
        }
    }

    fn key_of<R: Record>(&self, record: &R) -> Option<String> {
        record
            .value(&self.field)
            .and_then(|value| self.rule.normalize(&value))
    }
}

/// Description of one aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSpec {
    pub group_by: Vec<GroupKey>,
    pub value_field: Option<String>,
    pub operation: AggregateOp,
    pub order: BucketOrder,
}

impl AggregateSpec {
    /// Count records per value of `group`, largest first
    pub fn count(group: GroupKey) -> Self {
        Self {
            group_by: vec![group],
            value_field: None,
            operation: AggregateOp::Count,
            order: BucketOrder::ValueDesc,
        }
    }

    /// Sum `value_field` per value of `group`, largest first
    pub fn sum(group: GroupKey, value_field: &str) -> Self {
        Self {
            group_by: vec![group],
            value_field: Some(value_field.to_string()),
            operation: AggregateOp::Sum,
            order: BucketOrder::ValueDesc,
        }
    }

    /// Add another grouping level (composite key)
    pub fn then_by(mut self, group: GroupKey) -> Self {
        self.group_by.push(group);
        self
    }

    pub fn ordered(mut self, order: BucketOrder) -> Self {
        self.order = order;
        self
    }
}

/// One aggregate bucket; `key` holds one sanitised value per group field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: Vec<String>,
    pub value: f64,
}

impl Bucket {
    /// Full composite key joined for display
    pub fn key_text(&self) -> String {
        self.key.join(" / ")
    }

    /// Display label, truncated to `max_len` characters
    pub fn label(&self, max_len: usize) -> String {
        truncate_label(&self.key_text(), max_len)
    }
}

/// Chart-ready point: truncated label plus the full key for tooltips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub key: String,
    pub value: f64,
}

pub fn to_chart_points(buckets: &[Bucket], max_len: usize) -> Vec<ChartPoint> {
    buckets
        .iter()
        .map(|b| ChartPoint {
            label: b.label(max_len),
            key: b.key_text(),
            value: b.value,
        })
        .collect()
}

/// Row of a multi-series aggregation (one value per series)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub key: String,
    pub values: Vec<f64>,
}

/// Group and accumulate `records` as described by `spec`
pub fn aggregate<R: Record>(records: &[R], spec: &AggregateSpec) -> Vec<Bucket> {
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    'records: for record in records {
        let mut key = Vec::with_capacity(spec.group_by.len());
        for group in &spec.group_by {
            match group.key_of(record) {
                Some(k) => key.push(k),
                None => continue 'records,
            }
        }

        let amount = match spec.operation {
            AggregateOp::Count => 1.0,
            AggregateOp::Sum => spec
                .value_field
                .as_deref()
                .and_then(|field| record.value(field))
                .map(|v| v.as_number())
                .unwrap_or(0.0),
        };

        match index.get(&key) {
            Some(&i) => buckets[i].value += amount,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket { key, value: amount });
            }
        }
    }

    order_buckets(&mut buckets, spec.order);
    buckets
}

/// Sum several value fields per group key, e.g. yearly prevalence and incidence
pub fn aggregate_series<R: Record>(
    records: &[R],
    group: &GroupKey,
    value_fields: &[&str],
    order: BucketOrder,
) -> Vec<SeriesRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<SeriesRow> = Vec::new();

    for record in records {
        let Some(key) = group.key_of(record) else {
            continue;
        };
        let i = *index.entry(key.clone()).or_insert_with(|| {
            rows.push(SeriesRow {
                key,
                values: vec![0.0; value_fields.len()],
            });
            rows.len() - 1
        });
        for (slot, field) in rows[i].values.iter_mut().zip(value_fields) {
            *slot += record.value(field).map(|v| v.as_number()).unwrap_or(0.0);
        }
    }

    match order {
        BucketOrder::KeyAsc => rows.sort_by(|a, b| compare_keys(&a.key, &b.key)),
        BucketOrder::ValueDesc => rows.sort_by(|a, b| {
            let total_a: f64 = a.values.iter().sum();
            let total_b: f64 = b.values.iter().sum();
            total_b
                .total_cmp(&total_a)
                .then_with(|| compare_keys(&a.key, &b.key))
        }),
        BucketOrder::Unordered => {}
    }
    rows
}

/// Stacked series: rows keyed by `row_key` (ascending), one sum per declared column.
///
/// Records whose column value is not one of `columns` are ignored.
pub fn stack<R: Record>(
    records: &[R],
    row_key: &GroupKey,
    column_field: &str,
    value_field: &str,
    columns: &[&str],
) -> Vec<SeriesRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<SeriesRow> = Vec::new();

    for record in records {
        let column = record.value(column_field).map(|v| v.as_text());
        let Some(slot) = column
            .as_deref()
            .and_then(|c| columns.iter().position(|declared| *declared == c.trim()))
        else {
            continue;
        };
        let Some(key) = row_key.key_of(record) else {
            continue;
        };
        let i = *index.entry(key.clone()).or_insert_with(|| {
            rows.push(SeriesRow {
                key,
                values: vec![0.0; columns.len()],
            });
            rows.len() - 1
        });
        rows[i].values[slot] += record.value(value_field).map(|v| v.as_number()).unwrap_or(0.0);
    }

    rows.sort_by(|a, b| compare_keys(&a.key, &b.key));
    rows
}

/// Key of the largest bucket of a [`BucketOrder::ValueDesc`] aggregation
pub fn top_key(buckets: &[Bucket]) -> Option<String> {
    buckets.first().map(Bucket::key_text)
}

/// Value of the bucket keyed `key`, 0 when absent
pub fn bucket_value(buckets: &[Bucket], key: &str) -> f64 {
    buckets
        .iter()
        .find(|b| b.key_text() == key)
        .map_or(0.0, |b| b.value)
}

/// Buckets whose key is one of `labels`, in that order; other buckets are dropped
pub fn in_label_order(buckets: &[Bucket], labels: &[&str]) -> Vec<Bucket> {
    labels
        .iter()
        .filter_map(|label| buckets.iter().find(|b| b.key_text() == *label))
        .cloned()
        .collect()
}

/// Truncate a label to `max_len` characters plus [`ELLIPSIS`]
pub fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(max_len).collect();
        format!("{}{}", truncated.trim_end(), ELLIPSIS)
    }
}

fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == UNDEFINED_PLACEHOLDER || is_purely_numeric(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

/// `"12345"`, `"-3.5"`; words that parse as floats (`"inf"`, `"NaN"`) stay categorical
fn is_purely_numeric(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit()) && s.parse::<f64>().is_ok()
}

/// Canonical lead potential label; substring match, case-insensitive
pub fn normalize_lead_potential(raw: &str) -> Option<&'static str> {
    let lower = raw.trim().to_lowercase();
    if lower.contains("hot") {
        Some("Hot")
    } else if lower.contains("warm") {
        Some("Warm")
    } else if lower.contains("cold") {
        Some("Cold")
    } else {
        None
    }
}

fn order_buckets(buckets: &mut [Bucket], order: BucketOrder) {
    match order {
        BucketOrder::ValueDesc => buckets.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| compare_composite(&a.key, &b.key))
        }),
        BucketOrder::KeyAsc => buckets.sort_by(|a, b| compare_composite(&a.key, &b.key)),
        BucketOrder::Unordered => {}
    }
}

fn compare_composite(a: &[String], b: &[String]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_keys(x, y))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::record::FieldDef;

    #[derive(Debug, Clone)]
    struct Row {
        year: i32,
        label: &'static str,
        kind: &'static str,
        qty: f64,
    }

    const SCHEMA: &[FieldDef] = &[
        FieldDef::number("year", "Year"),
        FieldDef::text("label", "Label"),
        FieldDef::text("kind", "Kind"),
        FieldDef::number("qty", "Qty"),
    ];

    impl Record for Row {
        fn schema() -> &'static [FieldDef] {
            SCHEMA
        }

        fn value(&self, key: &str) -> Option<FieldValue> {
            match key {
                "year" => Some(self.year.into()),
                "label" => Some(self.label.into()),
                "kind" => Some(self.kind.into()),
                "qty" => Some(self.qty.into()),
                _ => None,
            }
        }
    }

    fn row(year: i32, label: &'static str, kind: &'static str, qty: f64) -> Row {
        Row { year, label, kind, qty }
    }

    #[test]
    fn test_count_skips_invalid_categorical_keys() {
        let data = vec![
            row(2020, " Retail ", "Public", 1.0),
            row(2020, "Retail", "Public", 1.0),
            row(2020, "", "Public", 1.0),
            row(2020, "undefined", "Public", 1.0),
            row(2020, "12345", "Public", 1.0),
            row(2020, "Health", "Public", 1.0),
            row(2020, "NaN", "Public", 1.0),
        ];
        let buckets = aggregate(&data, &AggregateSpec::count(GroupKey::categorical("label")));
        assert_eq!(
            buckets,
            vec![
                Bucket { key: vec!["Retail".into()], value: 2.0 },
                Bucket { key: vec!["Health".into()], value: 1.0 },
                Bucket { key: vec!["NaN".into()], value: 1.0 },
            ]
        );
    }

    #[test]
    fn test_sum_orders_descending_with_key_tiebreak() {
        let data = vec![
            row(2020, "B", "Public", 5.0),
            row(2021, "A", "Public", 5.0),
            row(2021, "C", "Public", 9.0),
        ];
        let buckets = aggregate(&data, &AggregateSpec::sum(GroupKey::categorical("label"), "qty"));
        let keys: Vec<String> = buckets.iter().map(Bucket::key_text).collect();
        assert_eq!(keys, vec!["C", "A", "B"]);
        assert_eq!(top_key(&buckets).as_deref(), Some("C"));
    }

    #[test]
    fn test_chronological_order_is_numeric() {
        let data = vec![
            row(2021, "A", "Public", 1.0),
            row(999, "A", "Public", 1.0),
            row(2020, "A", "Public", 1.0),
        ];
        let spec = AggregateSpec::count(GroupKey::chronological("year")).ordered(BucketOrder::KeyAsc);
        let keys: Vec<String> = aggregate(&data, &spec).iter().map(Bucket::key_text).collect();
        assert_eq!(keys, vec!["999", "2020", "2021"]);
    }

    #[test]
    fn test_composite_keys() {
        let data = vec![
            row(2020, "A", "Public", 2.0),
            row(2020, "A", "Private", 3.0),
            row(2020, "A", "Public", 4.0),
        ];
        let spec = AggregateSpec::sum(GroupKey::categorical("label"), "qty")
            .then_by(GroupKey::categorical("kind"));
        let buckets = aggregate(&data, &spec);
        assert_eq!(buckets[0].key, vec!["A".to_string(), "Public".to_string()]);
        assert_eq!(buckets[0].value, 6.0);
        assert_eq!(buckets[1].key_text(), "A / Private");
    }

    #[test]
    fn test_truncation_happens_after_bucketing() {
        let long_a = "Enterprise Resource Planning and Supply Chain Systems";
        let long_b = "Enterprise Resource Planning and Supply Chain Services";
        let data = vec![row(2020, long_a, "Public", 1.0), row(2020, long_b, "Public", 1.0)];
        let buckets = aggregate(&data, &AggregateSpec::count(GroupKey::categorical("label")));
        assert_eq!(buckets.len(), 2);

        let points = to_chart_points(&buckets, COMPACT_LABEL_LEN);
        assert_eq!(points[0].label, points[1].label);
        assert!(points[0].label.ends_with(ELLIPSIS));
        assert_ne!(points[0].key, points[1].key);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 47), "short");
        let long = "x".repeat(50);
        let out = truncate_label(&long, 47);
        assert_eq!(out.chars().count(), 50);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_lead_potential_normalization() {
        assert_eq!(normalize_lead_potential("SuperHot"), Some("Hot"));
        assert_eq!(normalize_lead_potential("warm lead"), Some("Warm"));
        assert_eq!(normalize_lead_potential("COLD"), Some("Cold"));
        assert_eq!(normalize_lead_potential("unknown"), None);
    }

    #[test]
    fn test_aggregate_series_and_stack() {
        let data = vec![
            row(2021, "A", "Public", 1.0),
            row(2020, "A", "Private", 2.0),
            row(2020, "B", "Public", 3.0),
            row(2020, "B", "Other", 100.0),
        ];

        let series = aggregate_series(
            &data,
            &GroupKey::chronological("year"),
            &["qty", "year"],
            BucketOrder::KeyAsc,
        );
        assert_eq!(series[0].key, "2020");
        assert_eq!(series[0].values, vec![105.0, 6060.0]);

        let kinds = aggregate(&data, &AggregateSpec::count(GroupKey::categorical("kind")));
        let ordered: Vec<String> = in_label_order(&kinds, &["Private", "Public", "Missing"])
            .iter()
            .map(Bucket::key_text)
            .collect();
        assert_eq!(ordered, vec!["Private", "Public"]);
        assert_eq!(bucket_value(&kinds, "Public"), 2.0);
        assert_eq!(bucket_value(&kinds, "Missing"), 0.0);

        let stacked = stack(&data, &GroupKey::chronological("year"), "kind", "qty", &["Public", "Private"]);
        assert_eq!(
            stacked,
            vec![
                SeriesRow { key: "2020".into(), values: vec![3.0, 2.0] },
                SeriesRow { key: "2021".into(), values: vec![1.0, 0.0] },
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let data: Vec<Row> = Vec::new();
        assert!(aggregate(&data, &AggregateSpec::count(GroupKey::categorical("label"))).is_empty());
        assert!(top_key(&[]).is_none());
    }
}
