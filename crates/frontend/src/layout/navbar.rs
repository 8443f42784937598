use crate::app::PageKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar(
    #[prop(into)]
    active: Signal<PageKey>,

    on_navigate: Callback<PageKey>,
) -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {PageKey::all().into_iter().map(|page| {
                    view! {
                        <li
                            class=move || if active.get() == page { "nav-item nav-item--active" } else { "nav-item" }
                            on:click=move |_| on_navigate.run(page)
                        >
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
