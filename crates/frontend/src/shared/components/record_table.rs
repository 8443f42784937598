use crate::shared::dataset::{DatasetState, TableView};
use crate::shared::export::export_records;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, row_cells};
use contracts::shared::pipeline::{ColumnGroup, FieldKind, Record, SortState};
use leptos::prelude::*;

/// Schema-driven table of the current page.
///
/// Every header cell toggles the sort on its field. `groups` adds a
/// header band above the field titles.
#[component]
pub fn RecordTable<R>(
    view: Memo<TableView<R>>,

    #[prop(into)]
    sort: Signal<Option<SortState>>,

    on_sort: Callback<String>,

    #[prop(optional)]
    groups: Option<&'static [ColumnGroup]>,
) -> impl IntoView
where
    R: Record + Clone + PartialEq + Send + Sync + 'static,
{
    let schema = R::schema();

    let group_row = groups.map(|groups| {
        view! {
            <tr class="table__group-row">
                {groups.iter().map(|g| view! {
                    <th class="table__group" colspan=g.span.to_string()>{g.label}</th>
                }).collect_view()}
            </tr>
        }
    });

    let header_row = view! {
        <tr>
            {schema.iter().map(|def| {
                let key = def.key;
                view! {
                    <th
                        class=move || sort.with(|s| get_sort_class(s.as_ref(), key))
                        on:click=move |_| on_sort.run(key.to_string())
                    >
                        {def.label}
                        <span class="sort-indicator">
                            {move || sort.with(|s| get_sort_indicator(s.as_ref(), key))}
                        </span>
                    </th>
                }
            }).collect_view()}
        </tr>
    };

    let body = move || {
        view.with(|v| {
            if v.page_rows().is_empty() {
                return view! {
                    <tr>
                        <td class="table__empty" colspan=schema.len().to_string()>
                            "No records match the current filters"
                        </td>
                    </tr>
                }
                .into_any();
            }

            v.page_rows()
                .iter()
                .map(|record| {
                    let cells = row_cells(record);
                    view! {
                        <tr>
                            {cells.into_iter().zip(schema).map(|(cell, def)| {
                                let class = match def.kind {
                                    FieldKind::Number => "table__cell table__cell--number",
                                    FieldKind::Text => "table__cell",
                                };
                                view! { <td class=class>{cell}</td> }
                            }).collect_view()}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    {group_row}
                    {header_row}
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

/// Record table with a title bar and CSV download of the filtered rows
#[component]
pub fn DatasetTable<R>(
    #[prop(into)]
    title: String,

    state: DatasetState<R>,

    view: Memo<TableView<R>>,

    /// Dataset name, the first half of the export file name
    dataset: &'static str,

    /// Second half of the export file name, e.g. the region tab
    #[prop(into)]
    qualifier: Signal<String>,

    #[prop(optional)]
    groups: Option<&'static [ColumnGroup]>,
) -> impl IntoView
where
    R: Record + Clone + PartialEq + Send + Sync + 'static,
{
    let on_export = move |_| {
        let qualifier = qualifier.get_untracked();
        let result = view.with_untracked(|v| export_records(v.rows.iter(), dataset, &qualifier));
        if let Err(e) = result {
            log::error!("Export of {} failed: {}", dataset, e);
        }
    };

    let on_sort = Callback::new(move |field: String| state.toggle_sort(&field));

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <h3 class="table-section__title">{title}</h3>
                <span class="table-section__count">
                    {move || format!("{} records", view.with(|v| v.total()))}
                </span>
                <button class="button button--secondary" on:click=on_export>
                    {icon("download")}
                    <span>"Download CSV"</span>
                </button>
            </div>
            {match groups {
                Some(groups) => view! {
                    <RecordTable view=view sort=state.sort() on_sort=on_sort groups=groups />
                }.into_any(),
                None => view! {
                    <RecordTable view=view sort=state.sort() on_sort=on_sort />
                }.into_any(),
            }}
        </div>
    }
}
