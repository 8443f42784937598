use crate::app::{use_config, PageKey};
use crate::shared::components::chart_panel::{ChartPanel, SeriesPanel};
use crate::shared::components::dataset_filters::DatasetFilters;
use crate::shared::components::record_table::DatasetTable;
use crate::shared::components::stat_card::KpiGrid;
use crate::shared::dataset::DatasetState;
use crate::shared::page::DashboardPage;
use contracts::dashboards::d101_procurement::summary::summarize;
use contracts::dashboards::d101_procurement::{
    demo, field, ProcurementRecord, DATASET_NAME, FILTER_FIELDS, SECTOR_OPTIONS,
};
use contracts::shared::pipeline::RecordStore;
use leptos::prelude::*;

/// Sector filter lists both options even when one has no rows
const FIXED_OPTIONS: &[(&str, &[&str])] = &[(field::PUBLIC_PRIVATE, SECTOR_OPTIONS)];

#[component]
pub fn ProcurementDashboard() -> impl IntoView {
    let config = use_config();
    let state: DatasetState<ProcurementRecord> = DatasetState::new(
        RecordStore::with_records(DATASET_NAME, demo::generate()),
        config.page_size,
    );
    let view = state.table_view();
    let options = state.filter_options(FILTER_FIELDS, FIXED_OPTIONS);

    let label_max_len = config.label_max_len;
    let summary = Memo::new(move |_| view.with(|v| summarize(&v.row_refs(), label_max_len)));

    view! {
        <DashboardPage page=PageKey::Procurement subtitle="Purchased quantities by channel, sector and year">
            <DatasetFilters state=state view=view options=options />

            <KpiGrid
                kpis=Signal::derive(move || summary.with(|s| s.kpis.clone()))
                icon_name="procurement"
            />

            <div class="chart-grid">
                <ChartPanel
                    title="Quantity by Procurement Type"
                    points=Signal::derive(move || summary.with(|s| s.qty_by_procurement.clone()))
                />
                <ChartPanel
                    title="Public vs Private"
                    points=Signal::derive(move || summary.with(|s| s.sector_split.clone()))
                    show_share=true
                />
                <SeriesPanel
                    title="Quantity by Year"
                    series=SECTOR_OPTIONS
                    rows=Signal::derive(move || summary.with(|s| s.qty_by_year.clone()))
                />
            </div>

            <DatasetTable
                title="Procurement Records"
                state=state
                view=view
                dataset=DATASET_NAME
                qualifier="filtered".to_string()
            />
        </DashboardPage>
    }
}
