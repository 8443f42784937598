use crate::app::PageKey;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader(on_navigate: Callback<PageKey>) -> impl IntoView {
    view! {
        <div class="top-header">
            <div
                class="top-header__brand"
                on:click=move |_| on_navigate.run(PageKey::Home)
            >
                {icon("bar-chart")}
                <span class="top-header__title">"Market Insights"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
            </div>
        </div>
    }
}
