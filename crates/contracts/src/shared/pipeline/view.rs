use super::filter::{filter_records, FilterCriteria};
use super::paginate::{paginate, PageState};
use super::record::Record;
use super::sort::{sort_records, SortState};
use serde::{Deserialize, Serialize};

/// View state of one dashboard table: filters, sort and page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState {
    pub criteria: FilterCriteria,
    pub sort: Option<SortState>,
    pub page: PageState,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            sort: None,
            page: PageState::new(page_size),
        }
    }

    /// Back to defaults, used on dataset (region/tab) switch
    pub fn reset(&mut self) {
        *self = Self::new(self.page.page_size);
    }

    pub fn set_filter<I, S>(&mut self, field: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.set(field, values);
    }

    pub fn toggle_filter(&mut self, field: &str, value: &str) {
        self.criteria.toggle(field, value);
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear_all();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortState::toggle(self.sort.as_ref(), field));
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(PageState::default().page_size)
    }
}

/// Result of running the table pipeline over a record slice
#[derive(Debug, Clone)]
pub struct Projection<'a, R> {
    /// Filtered and sorted rows, the collection a download exports
    pub rows: Vec<&'a R>,
    /// Page position clamped to the filtered row count
    pub page: PageState,
    pub total_pages: usize,
}

impl<'a, R> Projection<'a, R> {
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn page_rows(&self) -> &[&'a R] {
        paginate(&self.rows, self.page.current_page, self.page.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Store -> filter -> sort -> page
pub fn project<'a, R: Record>(records: &'a [R], state: &ListState) -> Projection<'a, R> {
    let mut rows = filter_records(records, &state.criteria);
    if let Some(sort) = &state.sort {
        sort_records(&mut rows, sort);
    }

    let mut page = state.page;
    page.clamp(rows.len());
    let total_pages = page.total_pages(rows.len());

    Projection {
        rows,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::record::{FieldDef, FieldValue};

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u32,
        group: &'static str,
    }

    const SCHEMA: &[FieldDef] = &[FieldDef::number("id", "Id"), FieldDef::text("group", "Group")];

    impl Record for Row {
        fn schema() -> &'static [FieldDef] {
            SCHEMA
        }

        fn value(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => Some(self.id.into()),
                "group" => Some(self.group.into()),
                _ => None,
            }
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                group: if id % 2 == 0 { "even" } else { "odd" },
            })
            .collect()
    }

    #[test]
    fn test_projection_pages_and_clamps() {
        let data = rows(45);
        let mut state = ListState::new(20);
        state.page.current_page = 3;

        let view = project(&data, &state);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page_rows().len(), 5);
        assert_eq!(view.page_rows()[0].id, 41);

        // Filtering down to 23 rows clamps page 3 back to 2
        state.set_filter("group", ["odd"]);
        let view = project(&data, &state);
        assert_eq!(view.total(), 23);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page.current_page, 2);
    }

    #[test]
    fn test_sort_toggle_and_reset() {
        let data = rows(5);
        let mut state = ListState::new(20);
        state.toggle_sort("id");
        state.toggle_sort("id");

        let view = project(&data, &state);
        let ids: Vec<u32> = view.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);

        state.set_filter("group", ["even"]);
        state.reset();
        assert_eq!(state, ListState::new(20));
    }

    #[test]
    fn test_empty_projection_has_one_page() {
        let data: Vec<Row> = Vec::new();
        let view = project(&data, &ListState::new(20));
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(view.page_rows().is_empty());
    }
}
