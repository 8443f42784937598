use super::record::{FieldKind, FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Multi-select filter state: field key -> accepted values.
///
/// An empty (or absent) value set means "no restriction on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    fields: BTreeMap<String, BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterCriteria::set`]
    pub fn with<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(field, values);
        self
    }

    /// Replace the accepted values of `field`
    pub fn set<I, S>(&mut self, field: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.fields.remove(field);
        } else {
            self.fields.insert(field.to_string(), values);
        }
    }

    /// Add `value` to the selection of `field`, or remove it if already selected
    pub fn toggle(&mut self, field: &str, value: &str) {
        let set = self.fields.entry(field.to_string()).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.fields.remove(field);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.fields.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.fields.clear();
    }

    /// Selected values of `field` (empty when unrestricted)
    pub fn selected(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        self.fields
            .get(field)
            .map(|set| set.contains(value))
            .unwrap_or(false)
    }

    /// Number of fields with an active restriction
    pub fn active_count(&self) -> usize {
        self.fields.values().filter(|set| !set.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Active restrictions in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.fields
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(field, set)| (field.as_str(), set))
    }

    /// Whether `record` satisfies every active restriction.
    ///
    /// AND across fields, OR within a field. A missing value never matches an
    /// active restriction.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.iter().all(|(field, accepted)| {
            record
                .value(field)
                .map(|value| accepted.contains(&value.as_text()))
                .unwrap_or(false)
        })
    }
}

/// Stable filter: keeps the relative order of matching records
pub fn filter_records<'a, R: Record>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| criteria.matches(*record))
        .collect()
}

/// Sorted unique option list for a filter dropdown.
///
/// Number fields sort numerically, text fields lexicographically.
/// Missing and blank values are skipped.
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<String> {
    let numeric = R::field_def(field)
        .map(|def| def.kind == FieldKind::Number)
        .unwrap_or(false);

    let mut values: Vec<FieldValue> = Vec::new();
    let mut seen = BTreeSet::new();
    for value in records.iter().filter_map(|r| r.value(field)) {
        let text = value.as_text();
        if text.trim().is_empty() {
            continue;
        }
        if seen.insert(text) {
            values.push(value);
        }
    }

    if numeric {
        values.sort_by(|a, b| a.as_number().total_cmp(&b.as_number()));
    } else {
        values.sort_by(|a, b| a.as_text().cmp(&b.as_text()));
    }
    values.iter().map(FieldValue::as_text).collect()
}
