use crate::dashboards::{
    CustomerIntelligenceDashboard, DistributorIntelligenceDashboard, EpidemiologyDashboard,
    ProcurementDashboard,
};
use crate::layout::{HomePage, Shell};
use crate::shared::theme::ThemeContext;
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKey {
    #[default]
    Home,
    Epidemiology,
    Procurement,
    CustomerIntelligence,
    DistributorIntelligence,
}

impl PageKey {
    pub fn all() -> [PageKey; 5] {
        [
            PageKey::Home,
            PageKey::Epidemiology,
            PageKey::Procurement,
            PageKey::CustomerIntelligence,
            PageKey::DistributorIntelligence,
        ]
    }

    /// Stable identifier, used for the page root's `data-page`
    pub fn slug(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Epidemiology => "d100_epidemiology",
            PageKey::Procurement => "d101_procurement",
            PageKey::CustomerIntelligence => "d102_customer_intelligence",
            PageKey::DistributorIntelligence => "d103_distributor_intelligence",
        }
    }

    pub fn dom_id(&self) -> String {
        format!("page-{}", self.slug())
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Home => "Overview",
            PageKey::Epidemiology => "Epidemiology",
            PageKey::Procurement => "Procurement",
            PageKey::CustomerIntelligence => "MSP Customer Intelligence",
            PageKey::DistributorIntelligence => "Distributor Intelligence",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Epidemiology => "epidemiology",
            PageKey::Procurement => "procurement",
            PageKey::CustomerIntelligence => "customers",
            PageKey::DistributorIntelligence => "distributors",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PageKey::Home => "All dashboards at a glance",
            PageKey::Epidemiology => "Disease prevalence and incidence by country and year",
            PageKey::Procurement => "Vaccine purchases by channel, sector and brand",
            PageKey::CustomerIntelligence => "MSP accounts, lead potential and relationship health",
            PageKey::DistributorIntelligence => "Distribution partners, channels and volumes",
        }
    }
}

/// Configuration provided by [`App`]; defaults outside of it
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}

fn initial_config() -> DashboardConfig {
    match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load dashboard config, using defaults: {:#}", e);
            DashboardConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = initial_config();
    provide_context(ThemeContext::new(config.theme));
    provide_context(config);

    let active = RwSignal::new(PageKey::default());
    let on_navigate = Callback::new(move |page: PageKey| {
        log::debug!("Navigate to {:?}", page);
        active.set(page);
    });

    view! {
        <Shell active=active on_navigate=on_navigate>
            {move || match active.get() {
                PageKey::Home => view! { <HomePage on_navigate=on_navigate /> }.into_any(),
                PageKey::Epidemiology => view! { <EpidemiologyDashboard /> }.into_any(),
                PageKey::Procurement => view! { <ProcurementDashboard /> }.into_any(),
                PageKey::CustomerIntelligence => view! { <CustomerIntelligenceDashboard /> }.into_any(),
                PageKey::DistributorIntelligence => view! { <DistributorIntelligenceDashboard /> }.into_any(),
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_distinguishable() {
        let pages = PageKey::all();
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                assert_ne!(a.title(), b.title());
                assert_ne!(a.icon(), b.icon());
                assert_ne!(a.slug(), b.slug());
            }
        }
        assert_eq!(PageKey::default(), PageKey::Home);
        assert_eq!(PageKey::Procurement.dom_id(), "page-d101_procurement");
    }
}
