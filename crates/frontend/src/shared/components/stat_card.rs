use crate::shared::icons::icon;
use contracts::shared::kpi::Kpi;
use leptos::prelude::*;

/// One KPI card; unavailable values render muted as `N/A`
#[component]
pub fn StatCard(
    kpi: Kpi,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
) -> impl IntoView {
    let class = if kpi.value.is_available() {
        "stat-card"
    } else {
        "stat-card stat-card--muted"
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{kpi.label}</div>
                <div class="stat-card__value">{kpi.value.to_string()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn KpiGrid(
    #[prop(into)]
    kpis: Signal<Vec<Kpi>>,
    icon_name: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {move || kpis.get().into_iter().map(|kpi| view! {
                <StatCard kpi=kpi icon_name=icon_name />
            }).collect_view()}
        </div>
    }
}
