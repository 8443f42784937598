use crate::app::{use_config, PageKey};
use crate::shared::components::chart_panel::ChartPanel;
use crate::shared::components::dataset_filters::DatasetFilters;
use crate::shared::components::record_table::DatasetTable;
use crate::shared::components::region_tabs::{LoadStatus, RegionTabs};
use crate::shared::components::stat_card::KpiGrid;
use crate::shared::dataset::DatasetState;
use crate::shared::page::DashboardPage;
use contracts::dashboards::common::RegionTab;
use contracts::dashboards::d103_distributor_intelligence::summary::summarize;
use contracts::dashboards::d103_distributor_intelligence::{
    demo, DistributorRecord, DATASET_NAME, FILTER_FIELDS,
};
use contracts::shared::pipeline::RecordStore;
use leptos::prelude::*;

#[component]
pub fn DistributorIntelligenceDashboard() -> impl IntoView {
    let config = use_config();
    let region = RwSignal::new(RegionTab::default());
    let state: DatasetState<DistributorRecord> =
        DatasetState::new(RecordStore::new(), config.page_size);

    let delay_ms = config.load_delay_ms;
    let load = move |tab: RegionTab| state.load(tab.key(), delay_ms, move || demo::generate(tab));
    load(region.get_untracked());

    let on_region = Callback::new(move |tab: RegionTab| {
        region.set(tab);
        load(tab);
    });

    let ready = state.is_ready();
    let view = state.table_view();
    let options = state.filter_options(FILTER_FIELDS, &[]);

    let label_max_len = config.label_max_len;
    let summary = Memo::new(move |_| view.with(|v| summarize(&v.row_refs(), label_max_len)));

    view! {
        <DashboardPage
            page=PageKey::DistributorIntelligence
            subtitle="Distribution partners, channels and annual volumes"
            actions=move || view! { <RegionTabs active=region on_select=on_region /> }
        >
            <LoadStatus
                state=state.load_state()
                label=Signal::derive(move || region.get().label().to_string())
            />

            <Show when=move || ready.get()>
                <DatasetFilters state=state view=view options=options />

                <KpiGrid
                    kpis=Signal::derive(move || summary.with(|s| s.kpis.clone()))
                    icon_name="distributors"
                />

                <div class="chart-grid">
                    <ChartPanel
                        title="Annual Volume by Country"
                        points=Signal::derive(move || summary.with(|s| s.volume_by_country.clone()))
                    />
                    <ChartPanel
                        title="Distributors by Lead Potential"
                        points=Signal::derive(move || summary.with(|s| s.by_lead_potential.clone()))
                        show_share=true
                    />
                    <ChartPanel
                        title="Distributors by Channel"
                        points=Signal::derive(move || summary.with(|s| s.by_channel.clone()))
                    />
                </div>

                <DatasetTable
                    title="Distributors"
                    state=state
                    view=view
                    dataset=DATASET_NAME
                    qualifier=Signal::derive(move || region.get().key().to_string())
                />
            </Show>
        </DashboardPage>
    }
}
