use super::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Active table sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    /// Header click: same field flips the direction, a new field starts ascending
    pub fn toggle(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(state) if state.field == field => SortState {
                field: state.field.clone(),
                direction: state.direction.flipped(),
            },
            _ => SortState::ascending(field),
        }
    }
}

/// Stable in-place sort of a filtered view.
///
/// Missing values go after present ones when ascending, first when descending.
pub fn sort_records<R: Record>(rows: &mut [&R], sort: &SortState) {
    rows.sort_by(|a, b| {
        let ordering = match (a.value(&sort.field), b.value(&sort.field)) {
            (Some(x), Some(y)) => x.compare(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if sort.direction.is_ascending() {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::record::{FieldDef, FieldValue};

    #[derive(Debug, PartialEq)]
    struct Row {
        name: Option<&'static str>,
        score: f64,
    }

    const SCHEMA: &[FieldDef] = &[FieldDef::text("name", "Name"), FieldDef::number("score", "Score")];

    impl Record for Row {
        fn schema() -> &'static [FieldDef] {
            SCHEMA
        }

        fn value(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => self.name.map(FieldValue::from),
                "score" => Some(self.score.into()),
                _ => None,
            }
        }
    }

    fn names(rows: &[&Row]) -> Vec<Option<&'static str>> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_toggle_semantics() {
        let first = SortState::toggle(None, "name");
        assert_eq!(first, SortState::ascending("name"));

        let flipped = SortState::toggle(Some(&first), "name");
        assert_eq!(flipped.direction, SortDirection::Descending);

        let other = SortState::toggle(Some(&flipped), "score");
        assert_eq!(other, SortState::ascending("score"));
    }

    #[test]
    fn test_text_sort_is_case_sensitive_and_missing_last() {
        let data = [
            Row { name: Some("beta"), score: 1.0 },
            Row { name: None, score: 2.0 },
            Row { name: Some("Alpha"), score: 3.0 },
            Row { name: Some("alpha"), score: 4.0 },
        ];
        let mut view: Vec<&Row> = data.iter().collect();
        sort_records(&mut view, &SortState::ascending("name"));
        assert_eq!(names(&view), vec![Some("Alpha"), Some("alpha"), Some("beta"), None]);

        let mut desc = SortState::ascending("name");
        desc.direction = SortDirection::Descending;
        sort_records(&mut view, &desc);
        assert_eq!(names(&view), vec![None, Some("beta"), Some("alpha"), Some("Alpha")]);
    }

    #[test]
    fn test_numeric_sort_is_numeric_and_stable() {
        let data = [
            Row { name: Some("a"), score: 10.0 },
            Row { name: Some("b"), score: 9.0 },
            Row { name: Some("c"), score: 10.0 },
        ];
        let mut view: Vec<&Row> = data.iter().collect();
        sort_records(&mut view, &SortState::ascending("score"));
        assert_eq!(names(&view), vec![Some("b"), Some("a"), Some("c")]);
    }
}
