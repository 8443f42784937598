//! Root wrapper of every page, titled from its [`PageKey`].

use crate::app::PageKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page root with the title block; `actions` render beside the title
/// (the region tabs of the intelligence dashboards).
#[component]
pub fn DashboardPage(
    page: PageKey,

    subtitle: &'static str,

    #[prop(optional, into)]
    actions: Option<ViewFn>,

    children: Children,
) -> impl IntoView {
    let class = if page == PageKey::Home {
        "page page--home"
    } else {
        "page page--dashboard"
    };

    view! {
        <section id=page.dom_id() class=class data-page=page.slug()>
            <header class="page__header">
                <span class="page__icon">{icon(page.icon())}</span>
                <div class="page__heading">
                    <h1 class="page__title">{page.title()}</h1>
                    <p class="page__subtitle">{subtitle}</p>
                </div>
                {actions.map(|actions| view! {
                    <div class="page__actions">{actions.run()}</div>
                })}
            </header>
            <div class="page__content">{children()}</div>
        </section>
    }
}
