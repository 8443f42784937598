//! Reactive wrapper around a page's record store and table view state.
//!
//! One `DatasetState` lives per mounted dashboard and is dropped with it,
//! so nothing carries over between pages.

use contracts::shared::pipeline::{
    distinct_values, paginate, project, ListState, LoadState, PageState, Record, RecordStore,
    SortState,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Filtered and sorted rows plus the clamped page position
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<R> {
    pub rows: Vec<R>,
    pub page: PageState,
    pub total_pages: usize,
}

impl<R> TableView<R> {
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn page_rows(&self) -> &[R] {
        paginate(&self.rows, self.page.current_page, self.page.page_size)
    }

    /// Rows as the `&[&R]` slice the summaries take
    pub fn row_refs(&self) -> Vec<&R> {
        self.rows.iter().collect()
    }
}

/// Options offered by one filter control
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
}

pub struct DatasetState<R: Send + Sync + 'static> {
    pub store: RwSignal<RecordStore<R>>,
    pub list: RwSignal<ListState>,
}

impl<R: Send + Sync + 'static> Clone for DatasetState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for DatasetState<R> {}

impl<R> DatasetState<R>
where
    R: Record + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(store: RecordStore<R>, page_size: usize) -> Self {
        Self {
            store: RwSignal::new(store),
            list: RwSignal::new(ListState::new(page_size)),
        }
    }

    /// Replace the dataset after a simulated `delay_ms` latency.
    ///
    /// View state resets immediately. A load superseded by a newer one
    /// before it completes is discarded.
    pub fn load<F>(&self, dataset: &str, delay_ms: u32, generate: F)
    where
        F: FnOnce() -> Vec<R> + 'static,
    {
        let Some(ticket) = self.store.try_update(|s| s.begin_load(dataset)) else {
            return;
        };
        self.list.update(ListState::reset);

        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let records = generate();
            if store
                .try_update(|s| s.complete_load(&ticket, records))
                .is_none()
            {
                log::debug!("Page closed before {} finished loading", ticket.dataset());
            }
        });
    }

    pub fn load_state(&self) -> Signal<LoadState> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.state()))
    }

    /// False while a load is pending; the store is empty meanwhile
    pub fn is_ready(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.is_ready()))
    }

    /// Store -> filter -> sort, re-run on every store or view state change
    pub fn table_view(&self) -> Memo<TableView<R>> {
        let (store, list) = (self.store, self.list);
        Memo::new(move |_| {
            list.with(|state| {
                store.with(|s| {
                    let projection = project(s.records(), state);
                    TableView {
                        rows: projection.rows.into_iter().cloned().collect(),
                        page: projection.page,
                        total_pages: projection.total_pages,
                    }
                })
            })
        })
    }

    /// Distinct values of each filter field over the whole store.
    /// `fixed` pins the option list of a field instead.
    pub fn filter_options(
        &self,
        fields: &'static [&'static str],
        fixed: &'static [(&'static str, &'static [&'static str])],
    ) -> Memo<Vec<FilterOptions>> {
        let store = self.store;
        Memo::new(move |_| {
            store.with(|s| {
                fields
                    .iter()
                    .map(|&field| {
                        let options = match fixed.iter().find(|(f, _)| *f == field) {
                            Some((_, values)) => values.iter().map(|v| v.to_string()).collect(),
                            None => distinct_values(s.records(), field),
                        };
                        FilterOptions {
                            field,
                            label: R::field_def(field).map(|def| def.label).unwrap_or(field),
                            options,
                        }
                    })
                    .collect()
            })
        })
    }

    pub fn sort(&self) -> Signal<Option<SortState>> {
        let list = self.list;
        Signal::derive(move || list.with(|l| l.sort.clone()))
    }

    pub fn active_filters(&self) -> Signal<usize> {
        let list = self.list;
        Signal::derive(move || list.with(|l| l.criteria.active_count()))
    }

    /// Selection change: back to the first page
    pub fn toggle_filter(&self, field: &str, value: &str) {
        self.list.update(|l| {
            l.toggle_filter(field, value);
            l.page.first();
        });
    }

    pub fn clear_filter(&self, field: &str) {
        self.list.update(|l| {
            l.criteria.clear(field);
            l.page.first();
        });
    }

    pub fn clear_filters(&self) {
        self.list.update(|l| {
            l.clear_filters();
            l.page.first();
        });
    }

    pub fn toggle_sort(&self, field: &str) {
        self.list.update(|l| l.toggle_sort(field));
    }

    pub fn go_to_page(&self, page: usize, total: usize) {
        self.list.update(|l| l.page.go_to(page, total));
    }
}
