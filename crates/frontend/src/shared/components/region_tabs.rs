use contracts::dashboards::common::RegionTab;
use contracts::shared::pipeline::LoadState;
use leptos::prelude::*;

/// Global / Asia / India switch of the intelligence dashboards
#[component]
pub fn RegionTabs(
    #[prop(into)]
    active: Signal<RegionTab>,

    on_select: Callback<RegionTab>,
) -> impl IntoView {
    view! {
        <div class="region-tabs" role="tablist">
            {RegionTab::all().into_iter().map(|tab| view! {
                <button
                    role="tab"
                    class=move || {
                        if active.get() == tab {
                            "region-tabs__tab region-tabs__tab--active"
                        } else {
                            "region-tabs__tab"
                        }
                    }
                    on:click=move |_| {
                        if active.get_untracked() != tab {
                            on_select.run(tab);
                        }
                    }
                >
                    {tab.label()}
                </button>
            }).collect_view()}
        </div>
    }
}

/// Spinner line shown while a region dataset loads
#[component]
pub fn LoadStatus(
    #[prop(into)]
    state: Signal<LoadState>,

    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    view! {
        <Show when=move || state.get() == LoadState::Loading>
            <div class="load-status">
                <span class="load-status__spinner"></span>
                <span>{move || format!("Loading {} data...", label.get())}</span>
            </div>
        </Show>
    }
}
