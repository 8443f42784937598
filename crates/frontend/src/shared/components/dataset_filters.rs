use super::multi_select::MultiSelect;
use super::pagination_controls::PaginationControls;
use crate::shared::dataset::{DatasetState, FilterOptions, TableView};
use crate::shared::icons::icon;
use contracts::shared::pipeline::{FilterCriteria, Record};
use leptos::prelude::*;

/// One removable chip per selected value
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub field: String,
    pub value: String,
    pub text: String,
}

/// Chips of every active restriction, labelled from the record schema
pub fn filter_chips<R: Record>(criteria: &FilterCriteria) -> Vec<FilterChip> {
    criteria
        .iter()
        .flat_map(|(field, values)| {
            let label = R::field_def(field).map(|def| def.label).unwrap_or(field);
            values.iter().map(move |value| FilterChip {
                field: field.to_string(),
                value: value.clone(),
                text: format!("{}: {}", label, value),
            })
        })
        .collect()
}

/// Collapsible filter bar of a dataset page.
///
/// The header shows how many fields are restricted and hosts the table
/// pager; the body holds one multi-select per filter field and the chips
/// of the current selection.
#[component]
pub fn DatasetFilters<R>(
    state: DatasetState<R>,

    view: Memo<TableView<R>>,

    options: Memo<Vec<FilterOptions>>,
) -> impl IntoView
where
    R: Record + Clone + PartialEq + Send + Sync + 'static,
{
    let expanded = RwSignal::new(true);
    let list = state.list;
    // Restricted fields, not selected values
    let restricted = state.active_filters();

    let controls = move || {
        options
            .get()
            .into_iter()
            .map(|opts| {
                let field = opts.field;
                view! {
                    <MultiSelect
                        label=opts.label
                        options=opts.options
                        selected=Signal::derive(move || list.with(|l| l.criteria.selected(field)))
                        on_toggle=Callback::new(move |value: String| state.toggle_filter(field, &value))
                        on_clear=Callback::new(move |_| state.clear_filter(field))
                    />
                }
            })
            .collect_view()
    };

    let chips = move || {
        let chips = list.with(|l| filter_chips::<R>(&l.criteria));
        if chips.is_empty() {
            return view! { <></> }.into_any();
        }

        view! {
            <ul class="dataset-filters__chips">
                {chips.into_iter().map(|chip| {
                    let FilterChip { field, value, text } = chip;
                    view! {
                        <li class="filter-chip">
                            <span>{text}</span>
                            <button
                                class="filter-chip__remove"
                                aria-label="Remove filter"
                                on:click=move |_| state.toggle_filter(&field, &value)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }).collect_view()}
                <li>
                    <button class="button button--link" on:click=move |_| state.clear_filters()>
                        "Clear all"
                    </button>
                </li>
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="dataset-filters">
            <div class="dataset-filters__bar">
                <button
                    class="dataset-filters__toggle"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if expanded.get() {
                            "dataset-filters__chevron dataset-filters__chevron--open"
                        } else {
                            "dataset-filters__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span>"Filters"</span>
                    <Show when=move || { restricted.get() > 0 }>
                        <span class="badge badge--primary" title="Restricted fields">
                            {move || restricted.get()}
                        </span>
                    </Show>
                </button>
                <PaginationControls
                    current_page=Signal::derive(move || view.with(|v| v.page.current_page))
                    total_pages=Signal::derive(move || view.with(|v| v.total_pages))
                    total_count=Signal::derive(move || view.with(|v| v.total()))
                    range=Signal::derive(move || view.with(|v| v.page.range(v.total())))
                    on_page_change=Callback::new(move |page: usize| {
                        let total = view.with_untracked(|v| v.total());
                        state.go_to_page(page, total);
                    })
                />
            </div>

            <Show when=move || expanded.get()>
                <div class="dataset-filters__body">
                    <div class="dataset-filters__controls">{controls}</div>
                    {chips}
                </div>
            </Show>
        </section>
    }
}
