use crate::app::PageKey;
use crate::shared::icons::icon;
use crate::shared::page::DashboardPage;
use leptos::prelude::*;

/// Landing page: one card per dashboard
#[component]
pub fn HomePage(on_navigate: Callback<PageKey>) -> impl IntoView {
    let cards = PageKey::all()
        .into_iter()
        .filter(|page| *page != PageKey::Home)
        .map(|page| {
            view! {
                <button class="dashboard-card" on:click=move |_| on_navigate.run(page)>
                    <span class="dashboard-card__icon">{icon(page.icon())}</span>
                    <span class="dashboard-card__title">{page.title()}</span>
                    <span class="dashboard-card__description">{page.description()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <DashboardPage
            page=PageKey::Home
            subtitle="Healthcare market and channel analytics over generated demo data"
        >
            <div class="dashboard-grid">{cards}</div>
        </DashboardPage>
    }
}
