/// Helpers shared by the dashboard tables: sort markers and cell text
use contracts::shared::pipeline::{Record, SortState};

/// Sort marker for a header cell
pub fn get_sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => {
            if s.direction.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS class for a sortable header cell
pub fn get_sort_class(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => "sortable sortable--active",
        _ => "sortable",
    }
}

/// Display text of every schema column, in schema order.
/// Missing values render as empty cells.
pub fn row_cells<R: Record>(record: &R) -> Vec<String> {
    R::schema()
        .iter()
        .map(|def| {
            record
                .value(def.key)
                .map(|v| v.as_text())
                .unwrap_or_default()
        })
        .collect()
}
