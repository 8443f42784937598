use crate::app::{use_config, PageKey};
use crate::shared::components::chart_panel::{ChartPanel, SeriesPanel};
use crate::shared::components::dataset_filters::DatasetFilters;
use crate::shared::components::record_table::DatasetTable;
use crate::shared::components::stat_card::KpiGrid;
use crate::shared::dataset::DatasetState;
use crate::shared::page::DashboardPage;
use contracts::dashboards::d100_epidemiology::summary::summarize;
use contracts::dashboards::d100_epidemiology::{demo, EpidemiologyRecord, DATASET_NAME, FILTER_FIELDS};
use contracts::shared::pipeline::RecordStore;
use leptos::prelude::*;

/// Legend of `EpidemiologySummary::yearly_trend`
const TREND_LEGEND: &[&str] = &["Prevalence", "Incidence"];

#[component]
pub fn EpidemiologyDashboard() -> impl IntoView {
    let config = use_config();
    let state: DatasetState<EpidemiologyRecord> = DatasetState::new(
        RecordStore::with_records(DATASET_NAME, demo::generate()),
        config.page_size,
    );
    let view = state.table_view();
    let options = state.filter_options(FILTER_FIELDS, &[]);

    let label_max_len = config.label_max_len;
    let summary = Memo::new(move |_| view.with(|v| summarize(&v.row_refs(), label_max_len)));

    view! {
        <DashboardPage page=PageKey::Epidemiology subtitle="Prevalence and incidence by disease, region and year">
            <DatasetFilters state=state view=view options=options />

            <KpiGrid
                kpis=Signal::derive(move || summary.with(|s| s.kpis.clone()))
                icon_name="epidemiology"
            />

            <div class="chart-grid">
                <ChartPanel
                    title="Prevalence by Disease"
                    points=Signal::derive(move || summary.with(|s| s.prevalence_by_disease.clone()))
                />
                <ChartPanel
                    title="Incidence by Region"
                    points=Signal::derive(move || summary.with(|s| s.incidence_by_region.clone()))
                />
                <SeriesPanel
                    title="Yearly Trend"
                    series=TREND_LEGEND
                    rows=Signal::derive(move || summary.with(|s| s.yearly_trend.clone()))
                />
            </div>

            <DatasetTable
                title="Epidemiology Records"
                state=state
                view=view
                dataset=DATASET_NAME
                qualifier="filtered".to_string()
            />
        </DashboardPage>
    }
}
